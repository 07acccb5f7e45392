//! In-memory table schema snapshots handed in by the catalog.
mod column_flags;
pub use column_flags::ColumnFlags;

mod column_meta_data;
pub use column_meta_data::ColumnMetaData;

mod table_meta_data;
pub use table_meta_data::TableMetaData;
