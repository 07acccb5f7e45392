use crate::constants::RuleName;
use crate::parsing::extractor::OptionalSegmentExtractor;
use crate::parsing::segments::ColumnPositionSegment;
use crate::parsing::AstNode;

/// Reads a FIRST / AFTER clause for the column being added, changed or modified.
///
/// The moved column's name comes from the caller, the tree only holds the AFTER target.
pub struct MySQLColumnPositionExtractor {
    column_name: String,
}

impl MySQLColumnPositionExtractor {
    pub fn new(column_name: String) -> MySQLColumnPositionExtractor {
        MySQLColumnPositionExtractor { column_name }
    }
}

impl OptionalSegmentExtractor for MySQLColumnPositionExtractor {
    type Segment = ColumnPositionSegment;

    fn extract(&self, node: &AstNode) -> Option<ColumnPositionSegment> {
        let first_or_after = node.find_first_child_node(RuleName::FirstOrAfterColumn)?;
        let start_index = first_or_after.start_index;
        match first_or_after.find_first_child_node(RuleName::ColumnName) {
            Some(after_column) => Some(ColumnPositionSegment::after(
                start_index,
                self.column_name.clone(),
                after_column.exact_text(),
            )),
            None => Some(ColumnPositionSegment::first(
                start_index,
                self.column_name.clone(),
            )),
        }
    }
}
