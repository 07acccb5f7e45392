use super::ColumnFlags;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnMetaData {
    pub column_name: String,
    pub column_type: String,
    pub flags: ColumnFlags,
}

impl ColumnMetaData {
    pub fn new(column_name: String, column_type: String, flags: ColumnFlags) -> ColumnMetaData {
        ColumnMetaData {
            column_name,
            column_type,
            flags,
        }
    }

    pub fn primary_key(&self) -> bool {
        self.flags.contains(ColumnFlags::PRIMARY_KEY)
    }
}

impl fmt::Display for ColumnMetaData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.column_name, self.column_type)?;
        if self.primary_key() {
            write!(f, " PRIMARY KEY")?;
        }
        Ok(())
    }
}
