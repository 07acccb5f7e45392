use super::ColumnDefinitionSegment;

/// CHANGE old_name new_definition, MODIFY uses the same name on both sides
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeColumnSegment {
    pub old_name: String,
    pub definition: ColumnDefinitionSegment,
}
