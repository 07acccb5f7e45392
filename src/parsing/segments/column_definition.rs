use crate::metadata::{ColumnFlags, ColumnMetaData};

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDefinitionSegment {
    pub column_name: String,
    pub data_type: String,
    pub flags: ColumnFlags,
}

impl ColumnDefinitionSegment {
    pub fn to_column_meta_data(&self) -> ColumnMetaData {
        ColumnMetaData::new(self.column_name.clone(), self.data_type.clone(), self.flags)
    }
}
