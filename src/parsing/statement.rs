//! Everything one ALTER TABLE statement was found to change.
use super::segments::{
    ChangeColumnSegment, ColumnDefinitionSegment, ColumnPositionSegment, IndexSegment,
    RenameIndexSegment,
};
use crate::metadata::ColumnMetaData;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlterTableStatement {
    pub table_name: String,
    pub added_column_definitions: Vec<ColumnDefinitionSegment>,
    pub changed_column_definitions: Vec<ChangeColumnSegment>,
    pub dropped_columns: Vec<String>,
    pub added_indexes: Vec<IndexSegment>,
    pub dropped_indexes: Vec<String>,
    pub renamed_indexes: Vec<RenameIndexSegment>,
    pub added_primary_key_columns: Vec<String>,
    pub drop_primary_key: bool,
    /// Appended in extractor order, sorted into statement order before they are applied
    pub position_changed_columns: Vec<ColumnPositionSegment>,
    /// Column layout after the statement, only known when the old layout was supplied
    pub updated_columns: Option<Vec<ColumnMetaData>>,
}

impl AlterTableStatement {
    pub fn find_column_definition(&self, column_name: &str) -> Option<&ColumnDefinitionSegment> {
        self.added_column_definitions
            .iter()
            .chain(self.changed_column_definitions.iter().map(|c| &c.definition))
            .find(|d| d.column_name == column_name)
    }
}
