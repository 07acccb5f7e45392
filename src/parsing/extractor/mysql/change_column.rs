use super::MySQLColumnPositionExtractor;
use crate::constants::RuleName;
use crate::parsing::extractor::{
    required_child, ClauseExtractor, ColumnDefinitionExtractor, ExtractorError,
    OptionalSegmentExtractor,
};
use crate::parsing::segments::ChangeColumnSegment;
use crate::parsing::{AlterTableStatement, AstNode};

/// CHANGE old_name new_definition, the position refers to the new name
pub struct MySQLChangeColumnExtractor {}

impl ClauseExtractor for MySQLChangeColumnExtractor {
    fn extract(
        &self,
        root: &AstNode,
        statement: &mut AlterTableStatement,
    ) -> Result<(), ExtractorError> {
        for change_column in root.find_all_child_nodes(RuleName::ChangeColumn) {
            //Breadth first, so this is the old name and not the one inside the definition
            let old_name = required_child(change_column, RuleName::ColumnName)?;
            let definition = ColumnDefinitionExtractor {}.extract(change_column)?;

            if let Some(position) =
                MySQLColumnPositionExtractor::new(definition.column_name.clone())
                    .extract(change_column)
            {
                statement.position_changed_columns.push(position);
            }
            statement.changed_column_definitions.push(ChangeColumnSegment {
                old_name: old_name.exact_text(),
                definition,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::SqlParser;

    #[test]
    fn test_rename_and_move() -> Result<(), Box<dyn std::error::Error>> {
        let tree =
            SqlParser::parse("ALTER TABLE t CHANGE COLUMN remark memo VARCHAR(100) AFTER id")?;
        let mut statement = AlterTableStatement::default();
        MySQLChangeColumnExtractor {}.extract(&tree, &mut statement)?;

        let change = &statement.changed_column_definitions[0];
        assert_eq!("remark", change.old_name);
        assert_eq!("memo", change.definition.column_name);
        assert_eq!("VARCHAR(100)", change.definition.data_type);

        let position = &statement.position_changed_columns[0];
        assert_eq!("memo", position.moved_column());
        assert_eq!(Some("id"), position.after_column());
        Ok(())
    }
}
