use crate::constants::RuleName;
use crate::parsing::extractor::{required_child, ClauseExtractor, ExtractorError};
use crate::parsing::{AlterTableStatement, AstNode};

pub struct MySQLDropIndexExtractor {}

impl ClauseExtractor for MySQLDropIndexExtractor {
    fn extract(
        &self,
        root: &AstNode,
        statement: &mut AlterTableStatement,
    ) -> Result<(), ExtractorError> {
        for drop_index in root.find_all_child_nodes(RuleName::DropIndex) {
            let index_name = required_child(drop_index, RuleName::IndexName)?;
            statement.dropped_indexes.push(index_name.exact_text());
        }
        Ok(())
    }
}
