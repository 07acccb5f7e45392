use crate::constants::RuleName;
use crate::parsing::extractor::{key_part_columns, ClauseExtractor, ExtractorError};
use crate::parsing::segments::IndexSegment;
use crate::parsing::{AlterTableStatement, AstNode};

/// ADD [UNIQUE] INDEX, an unnamed index is named after its first column like MySQL does
pub struct MySQLAddIndexExtractor {}

impl ClauseExtractor for MySQLAddIndexExtractor {
    fn extract(
        &self,
        root: &AstNode,
        statement: &mut AlterTableStatement,
    ) -> Result<(), ExtractorError> {
        for add_index in root.find_all_child_nodes(RuleName::AddIndex) {
            let columns = key_part_columns(add_index);
            let name = match add_index.find_first_child_node(RuleName::IndexName) {
                Some(name) => name.exact_text(),
                None => columns
                    .first()
                    .cloned()
                    .ok_or(ExtractorError::MissingNode(
                        RuleName::AddIndex,
                        RuleName::KeyParts,
                    ))?,
            };
            statement.added_indexes.push(IndexSegment {
                name,
                columns,
                unique: add_index.find_first_child_node(RuleName::Unique).is_some(),
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
    fn test_named_and_anonymous() -> Result<(), Box<dyn std::error::Error>> {
        let tree = SqlParser::parse(
            "ALTER TABLE t ADD UNIQUE KEY uk_code (code), ADD INDEX (status, created_at)",
        )?;
        let mut statement = AlterTableStatement::default();
        MySQLAddIndexExtractor {}.extract(&tree, &mut statement)?;

        assert_eq!(
            vec![
                IndexSegment {
                    name: "uk_code".to_string(),
                    columns: vec!["code".to_string()],
                    unique: true,
                },
                IndexSegment {
                    name: "status".to_string(),
                    columns: vec!["status".to_string(), "created_at".to_string()],
                    unique: false,
                },
            ],
            statement.added_indexes
        );
        Ok(())
    }
}
