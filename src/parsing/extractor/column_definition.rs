use super::{required_child, ExtractorError};
use crate::constants::RuleName;
use crate::metadata::ColumnFlags;
use crate::parsing::segments::ColumnDefinitionSegment;
use crate::parsing::AstNode;

/// Reads the first column definition found under a node
pub struct ColumnDefinitionExtractor {}

impl ColumnDefinitionExtractor {
    /// Every clause carrying a definition must have one, so unlike the position this is not
    /// optional and the missing node is reported.
    pub fn extract(&self, node: &AstNode) -> Result<ColumnDefinitionSegment, ExtractorError> {
        let definition = required_child(node, RuleName::ColumnDefinition)?;
        let column_name = required_child(definition, RuleName::ColumnName)?;
        let data_type = required_child(definition, RuleName::DataType)?;

        let mut flags = ColumnFlags::empty();
        for (rule, flag) in [
            (RuleName::PrimaryKey, ColumnFlags::PRIMARY_KEY),
            (RuleName::NotNull, ColumnFlags::NOT_NULL),
            (RuleName::AutoIncrement, ColumnFlags::AUTO_INCREMENT),
        ]
        .iter()
        {
            flags.set(*flag, definition.find_first_child_node(*rule).is_some());
        }

        Ok(ColumnDefinitionSegment {
            column_name: column_name.exact_text(),
            data_type: data_type.text.clone(),
            flags,
        })
    }
}
