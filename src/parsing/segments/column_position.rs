//! Where a FIRST or AFTER clause wants a column to end up.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnPosition {
    /// FIRST, the named column moves to the front
    First(String),
    /// AFTER after_column, column moves directly behind after_column
    After { column: String, after_column: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnPositionSegment {
    /// Offset of the FIRST / AFTER clause in the statement, only used for ordering
    pub start_index: usize,
    pub position: ColumnPosition,
}

impl ColumnPositionSegment {
    pub fn first(start_index: usize, column: String) -> ColumnPositionSegment {
        ColumnPositionSegment {
            start_index,
            position: ColumnPosition::First(column),
        }
    }

    pub fn after(
        start_index: usize,
        column: String,
        after_column: String,
    ) -> ColumnPositionSegment {
        ColumnPositionSegment {
            start_index,
            position: ColumnPosition::After {
                column,
                after_column,
            },
        }
    }

    /// The column being moved, for FIRST as well as AFTER
    pub fn moved_column(&self) -> &str {
        match &self.position {
            ColumnPosition::First(c) => c,
            ColumnPosition::After { column, .. } => column,
        }
    }

    pub fn first_column(&self) -> Option<&str> {
        match &self.position {
            ColumnPosition::First(c) => Some(c),
            ColumnPosition::After { .. } => None,
        }
    }

    pub fn after_column(&self) -> Option<&str> {
        match &self.position {
            ColumnPosition::First(_) => None,
            ColumnPosition::After { after_column, .. } => Some(after_column),
        }
    }
}
