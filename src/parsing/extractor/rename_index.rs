use super::{ClauseExtractor, ExtractorError};
use crate::constants::RuleName;
use crate::parsing::segments::RenameIndexSegment;
use crate::parsing::{AlterTableStatement, AstNode};

pub struct RenameIndexExtractor {}

impl ClauseExtractor for RenameIndexExtractor {
    fn extract(
        &self,
        root: &AstNode,
        statement: &mut AlterTableStatement,
    ) -> Result<(), ExtractorError> {
        for rename_index in root.find_all_child_nodes(RuleName::RenameIndex) {
            let names = rename_index.find_all_child_nodes(RuleName::IndexName);
            if names.len() != 2 {
                return Err(ExtractorError::MissingNode(
                    RuleName::RenameIndex,
                    RuleName::IndexName,
                ));
            }
            statement.renamed_indexes.push(RenameIndexSegment {
                old_name: names[0].exact_text(),
                new_name: names[1].exact_text(),
            });
        }
        Ok(())
    }
}
