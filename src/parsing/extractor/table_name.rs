use super::{required_child, ClauseExtractor, ExtractorError};
use crate::constants::RuleName;
use crate::parsing::ast::exact_value;
use crate::parsing::{AlterTableStatement, AstNode};

pub struct TableNameExtractor {}

impl ClauseExtractor for TableNameExtractor {
    fn extract(
        &self,
        root: &AstNode,
        statement: &mut AlterTableStatement,
    ) -> Result<(), ExtractorError> {
        let table_name = required_child(root, RuleName::TableName)?;
        statement.table_name = table_name
            .text
            .split('.')
            .map(exact_value)
            .collect::<Vec<&str>>()
            .join(".");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::SqlParser;

    #[test]
    fn test_quoted_schema() -> Result<(), Box<dyn std::error::Error>> {
        let tree = SqlParser::parse("ALTER TABLE `db`.`t_order` DROP COLUMN a")?;
        let mut statement = AlterTableStatement::default();
        TableNameExtractor {}.extract(&tree, &mut statement)?;
        assert_eq!("db.t_order", statement.table_name);
        Ok(())
    }
}
