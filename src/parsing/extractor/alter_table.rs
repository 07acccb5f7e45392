use super::{ClauseExtractor, DropColumnExtractor, ExtractorError, TableNameExtractor};
use crate::constants::RuleName;
use crate::metadata::{ColumnFlags, ColumnMetaData, TableMetaData};
use crate::parsing::segments::ColumnPositionSegment;
use crate::parsing::{AlterTableStatement, AstNode};

/// Dialect specific handling of FIRST / AFTER, works on the post ALTER column list
pub trait ColumnPositionAdjuster: Send + Sync {
    fn adjust(&self, positions: &mut [ColumnPositionSegment], columns: &mut Vec<ColumnMetaData>);
}

pub struct AlterTableExtractor {
    extractors: Vec<Box<dyn ClauseExtractor>>,
    position_adjuster: Option<Box<dyn ColumnPositionAdjuster>>,
}

impl AlterTableExtractor {
    /// The clauses every dialect shares, without any column repositioning
    pub fn new() -> AlterTableExtractor {
        let mut extractor = AlterTableExtractor {
            extractors: vec![],
            position_adjuster: None,
        };
        extractor.add_extractor(Box::new(TableNameExtractor {}));
        extractor.add_extractor(Box::new(DropColumnExtractor {}));
        extractor
    }

    pub fn add_extractor(&mut self, extractor: Box<dyn ClauseExtractor>) {
        self.extractors.push(extractor);
    }

    pub fn set_position_adjuster(&mut self, adjuster: Box<dyn ColumnPositionAdjuster>) {
        self.position_adjuster = Some(adjuster);
    }

    /// Runs every registered extractor over the tree.
    ///
    /// If the table's current layout is known the post ALTER layout is worked out as well
    /// and left in `updated_columns`.
    pub fn extract(
        &self,
        root: &AstNode,
        table: Option<&TableMetaData>,
    ) -> Result<AlterTableStatement, ExtractorError> {
        if root.rule != RuleName::AlterTable {
            return Err(ExtractorError::UnexpectedRoot(root.rule));
        }

        let mut statement = AlterTableStatement::default();
        for extractor in self.extractors.iter() {
            extractor.extract(root, &mut statement)?;
        }
        debug!(
            "Extracted alter of {} with {} position changes",
            statement.table_name,
            statement.position_changed_columns.len()
        );

        if let Some(table) = table {
            let mut columns = AlterTableExtractor::apply_definitions(&statement, table);
            if let Some(adjuster) = &self.position_adjuster {
                adjuster.adjust(&mut statement.position_changed_columns, &mut columns);
            }
            statement.updated_columns = Some(columns);
        }

        Ok(statement)
    }

    /// Everything but the repositioning: primary key changes, changed, dropped and added columns
    fn apply_definitions(
        statement: &AlterTableStatement,
        table: &TableMetaData,
    ) -> Vec<ColumnMetaData> {
        let mut columns = table.columns.clone();

        if statement.drop_primary_key {
            for column in columns.iter_mut() {
                column.flags.remove(ColumnFlags::PRIMARY_KEY);
            }
        }

        for change in statement.changed_column_definitions.iter() {
            match columns.iter_mut().find(|c| c.column_name == change.old_name) {
                Some(column) => {
                    //Changing a column's definition does not take it out of the primary key
                    let kept = column.flags & ColumnFlags::PRIMARY_KEY;
                    *column = change.definition.to_column_meta_data();
                    column.flags.insert(kept);
                }
                None => debug!(
                    "Column {} to change is not in {}, skipping",
                    change.old_name, statement.table_name
                ),
            }
        }

        columns.retain(|c| !statement.dropped_columns.contains(&c.column_name));

        columns.extend(
            statement
                .added_column_definitions
                .iter()
                .map(|d| d.to_column_meta_data()),
        );

        for column in columns.iter_mut() {
            if statement
                .added_primary_key_columns
                .contains(&column.column_name)
            {
                column.flags.insert(ColumnFlags::PRIMARY_KEY);
            }
        }

        columns
    }
}

impl Default for AlterTableExtractor {
    fn default() -> Self {
        AlterTableExtractor::new()
    }
}
