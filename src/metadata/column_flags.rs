//! Bit flags for column attributes such as primary key membership.

bitflags! {
    pub struct ColumnFlags: u8 {
        const PRIMARY_KEY = 0b00000001;
        const NOT_NULL = 0b00000010;
        const AUTO_INCREMENT = 0b00000100;
    }
}

impl Default for ColumnFlags {
    fn default() -> Self {
        ColumnFlags::empty()
    }
}
