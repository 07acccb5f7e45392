//! Segment extractors walk the parse tree and fill in an AlterTableStatement.
//!
//! Two flavours exist:
//! * OptionalSegmentExtractor pulls zero or one segment out of a single node
//! * ClauseExtractor finds every clause of its kind under the statement root and records the result
//!
//! A dialect is nothing more than the ordered list of clause extractors registered on an
//! AlterTableExtractor plus the way it repositions columns afterwards.

mod alter_table;
pub use alter_table::AlterTableExtractor;
pub use alter_table::ColumnPositionAdjuster;

mod column_definition;
pub use column_definition::ColumnDefinitionExtractor;

mod drop_column;
pub use drop_column::DropColumnExtractor;

pub mod mysql;
pub use mysql::{insertion_index, reorder_columns};

mod primary_key;
pub use primary_key::DropPrimaryKeyExtractor;
pub use primary_key::PrimaryKeyForAlterTableExtractor;

mod rename_index;
pub use rename_index::RenameIndexExtractor;

mod table_name;
pub use table_name::TableNameExtractor;

use super::{AlterTableStatement, AstNode};
use crate::constants::RuleName;
use thiserror::Error;

pub trait OptionalSegmentExtractor {
    type Segment;

    fn extract(&self, node: &AstNode) -> Option<Self::Segment>;
}

pub trait ClauseExtractor: Send + Sync {
    fn extract(
        &self,
        root: &AstNode,
        statement: &mut AlterTableStatement,
    ) -> Result<(), ExtractorError>;
}

/// Pulls the column names out of a (key_part, ...) list
pub(crate) fn key_part_columns(node: &AstNode) -> Vec<String> {
    match node.find_first_child_node(RuleName::KeyParts) {
        Some(key_parts) => key_parts
            .find_all_child_nodes(RuleName::ColumnName)
            .iter()
            .map(|c| c.exact_text())
            .collect(),
        None => vec![],
    }
}

/// Looks up a mandatory child, a missing one means the tree was not built by our grammar
pub(crate) fn required_child(node: &AstNode, rule: RuleName) -> Result<&AstNode, ExtractorError> {
    node.find_first_child_node(rule)
        .ok_or(ExtractorError::MissingNode(node.rule, rule))
}

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("{0} node is missing its {1}")]
    MissingNode(RuleName, RuleName),
    #[error("Expected an AlterTable tree, got {0}")]
    UnexpectedRoot(RuleName),
}
