use super::MySQLColumnPositionExtractor;
use crate::constants::RuleName;
use crate::parsing::extractor::{
    ClauseExtractor, ColumnDefinitionExtractor, ExtractorError, OptionalSegmentExtractor,
};
use crate::parsing::{AlterTableStatement, AstNode};

pub struct MySQLAddColumnExtractor {}

impl ClauseExtractor for MySQLAddColumnExtractor {
    fn extract(
        &self,
        root: &AstNode,
        statement: &mut AlterTableStatement,
    ) -> Result<(), ExtractorError> {
        for add_column in root.find_all_child_nodes(RuleName::AddColumn) {
            let definitions = add_column.find_all_child_nodes(RuleName::ColumnDefinition);
            if definitions.is_empty() {
                return Err(ExtractorError::MissingNode(
                    RuleName::AddColumn,
                    RuleName::ColumnDefinition,
                ));
            }

            for definition in definitions.iter() {
                let segment = ColumnDefinitionExtractor {}.extract(definition)?;
                //Only the single column form can carry FIRST / AFTER
                if definitions.len() == 1 {
                    if let Some(position) =
                        MySQLColumnPositionExtractor::new(segment.column_name.clone())
                            .extract(add_column)
                    {
                        statement.position_changed_columns.push(position);
                    }
                }
                statement.added_column_definitions.push(segment);
            }
        }
        Ok(())
    }
}
