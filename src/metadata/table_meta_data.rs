//! Column layout of one table as the catalog currently knows it.
use super::ColumnMetaData;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableMetaData {
    pub columns: Vec<ColumnMetaData>,
}

impl TableMetaData {
    pub fn new(columns: Vec<ColumnMetaData>) -> TableMetaData {
        TableMetaData { columns }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.column_name.as_str()).collect()
    }

    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.primary_key())
            .map(|c| c.column_name.as_str())
            .collect()
    }
}
