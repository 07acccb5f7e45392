use super::MySQLColumnPositionExtractor;
use crate::constants::RuleName;
use crate::parsing::extractor::{
    ClauseExtractor, ColumnDefinitionExtractor, ExtractorError, OptionalSegmentExtractor,
};
use crate::parsing::segments::ChangeColumnSegment;
use crate::parsing::{AlterTableStatement, AstNode};

pub struct MySQLModifyColumnExtractor {}

impl ClauseExtractor for MySQLModifyColumnExtractor {
    fn extract(
        &self,
        root: &AstNode,
        statement: &mut AlterTableStatement,
    ) -> Result<(), ExtractorError> {
        for modify_column in root.find_all_child_nodes(RuleName::ModifyColumn) {
            let definition = ColumnDefinitionExtractor {}.extract(modify_column)?;

            if let Some(position) =
                MySQLColumnPositionExtractor::new(definition.column_name.clone())
                    .extract(modify_column)
            {
                statement.position_changed_columns.push(position);
            }
            statement.changed_column_definitions.push(ChangeColumnSegment {
                old_name: definition.column_name.clone(),
                definition,
            });
        }
        Ok(())
    }
}
