use super::{key_part_columns, ClauseExtractor, ExtractorError};
use crate::constants::RuleName;
use crate::parsing::{AlterTableStatement, AstNode};

/// Primary key columns added by a constraint clause, the clause rule differs between dialects
pub struct PrimaryKeyForAlterTableExtractor {
    rule: RuleName,
}

impl PrimaryKeyForAlterTableExtractor {
    pub fn new(rule: RuleName) -> PrimaryKeyForAlterTableExtractor {
        PrimaryKeyForAlterTableExtractor { rule }
    }
}

impl ClauseExtractor for PrimaryKeyForAlterTableExtractor {
    fn extract(
        &self,
        root: &AstNode,
        statement: &mut AlterTableStatement,
    ) -> Result<(), ExtractorError> {
        for constraint in root.find_all_child_nodes(self.rule) {
            if constraint
                .find_first_child_node(RuleName::PrimaryKey)
                .is_none()
            {
                continue;
            }
            let columns = key_part_columns(constraint);
            if columns.is_empty() {
                return Err(ExtractorError::MissingNode(self.rule, RuleName::KeyParts));
            }
            statement.added_primary_key_columns.extend(columns);
        }
        Ok(())
    }
}

pub struct DropPrimaryKeyExtractor {}

impl ClauseExtractor for DropPrimaryKeyExtractor {
    fn extract(
        &self,
        root: &AstNode,
        statement: &mut AlterTableStatement,
    ) -> Result<(), ExtractorError> {
        if root.find_first_child_node(RuleName::DropPrimaryKey).is_some() {
            statement.drop_primary_key = true;
        }
        Ok(())
    }
}
