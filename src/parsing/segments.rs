//! Small semantic facts pulled out of single ALTER TABLE clauses.
mod change_column;
pub use change_column::ChangeColumnSegment;

mod column_definition;
pub use column_definition::ColumnDefinitionSegment;

mod column_position;
pub use column_position::ColumnPosition;
pub use column_position::ColumnPositionSegment;

mod index;
pub use index::IndexSegment;
pub use index::RenameIndexSegment;
