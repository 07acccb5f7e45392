use super::{required_child, ClauseExtractor, ExtractorError};
use crate::constants::RuleName;
use crate::parsing::{AlterTableStatement, AstNode};

pub struct DropColumnExtractor {}

impl ClauseExtractor for DropColumnExtractor {
    fn extract(
        &self,
        root: &AstNode,
        statement: &mut AlterTableStatement,
    ) -> Result<(), ExtractorError> {
        for drop_column in root.find_all_child_nodes(RuleName::DropColumn) {
            let column_name = required_child(drop_column, RuleName::ColumnName)?;
            statement.dropped_columns.push(column_name.exact_text());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::SqlParser;

    #[test]
    fn test_drop_columns() -> Result<(), Box<dyn std::error::Error>> {
        let tree = SqlParser::parse("ALTER TABLE t DROP COLUMN a, DROP `b`")?;
        let mut statement = AlterTableStatement::default();
        DropColumnExtractor {}.extract(&tree, &mut statement)?;
        assert_eq!(vec!["a".to_string(), "b".to_string()], statement.dropped_columns);
        Ok(())
    }

    #[test]
    fn test_missing_column_name() {
        let root = AstNode::new(
            RuleName::AlterTable,
            "ALTER TABLE t DROP COLUMN".to_string(),
            0,
            vec![AstNode::new(
                RuleName::DropColumn,
                "DROP COLUMN".to_string(),
                14,
                vec![],
            )],
        );
        let mut statement = AlterTableStatement::default();
        let res = DropColumnExtractor {}.extract(&root, &mut statement);
        assert!(matches!(
            res,
            Err(ExtractorError::MissingNode(
                RuleName::DropColumn,
                RuleName::ColumnName
            ))
        ));
    }
}
