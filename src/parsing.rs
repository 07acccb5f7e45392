//! Top level of the ALTER TABLE parsing and extraction pipeline
//!
//! sql text -> SqlParser -> AstNode tree -> AlterTableExtractor -> AlterTableStatement

pub mod ast;
pub use ast::AstNode;

pub mod extractor;
pub use extractor::AlterTableExtractor;
pub use extractor::ExtractorError;

pub mod segments;

pub mod sql_parser;
pub use sql_parser::SqlParser;
pub use sql_parser::SqlParserError;

mod statement;
pub use statement::AlterTableStatement;
