//! Entry point for callers holding raw sql: parse, then extract with the dialect's extractor.
use crate::constants::DatabaseType;
use crate::metadata::TableMetaData;
use crate::parsing::{
    AlterTableExtractor, AlterTableStatement, ExtractorError, SqlParser, SqlParserError,
};
use thiserror::Error;

pub struct Engine {
    database_type: DatabaseType,
    alter_table_extractor: AlterTableExtractor,
}

impl Engine {
    pub fn new(database_type: DatabaseType) -> Engine {
        let alter_table_extractor = match database_type {
            DatabaseType::MySQL => AlterTableExtractor::mysql(),
        };
        Engine {
            database_type,
            alter_table_extractor,
        }
    }

    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    /// Extracts the segments of one ALTER TABLE statement.
    ///
    /// Pass the table's current layout to also get the post ALTER column order back
    /// in `updated_columns`.
    pub fn parse_alter_table(
        &self,
        sql: &str,
        table: Option<&TableMetaData>,
    ) -> Result<AlterTableStatement, EngineError> {
        let tree = SqlParser::parse(sql)?;
        trace!("Parsed {} into {:?}", sql, tree);

        let statement = self.alter_table_extractor.extract(&tree, table)?;
        Ok(statement)
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    ExtractorError(#[from] ExtractorError),
    #[error(transparent)]
    ParseError(#[from] SqlParserError),
}
