//! Top level of the ALTER TABLE sql parser
//!
//! Only the MySQL subset the extractors understand is accepted:
//!     ALTER TABLE name spec [, spec]...
//! where spec is one of the ADD / DROP / RENAME / CHANGE / MODIFY clauses in alter_table.rs

mod alter_table;
mod column_definition;
mod common;

use super::AstNode;
use alter_table::parse_alter_table;
use common::{match_semicolon, maybe_take_whitespace};
use nom::combinator::{all_consuming, opt};
use nom::error::{convert_error, ContextError, ParseError, VerboseError};
use nom::sequence::tuple;
use nom::Finish;
use nom::IResult;
use thiserror::Error;

pub struct SqlParser {}

impl SqlParser {
    pub fn parse(input: &str) -> Result<AstNode, SqlParserError> {
        match SqlParser::nom_parse::<VerboseError<&str>>(input).finish() {
            Ok((_, mut tree)) => {
                rebase(&mut tree, input.len());
                Ok(tree)
            }
            Err(e) => Err(SqlParserError::ParseError(convert_error(input, e))),
        }
    }

    fn nom_parse<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
        input: &'a str,
    ) -> IResult<&'a str, AstNode, E> {
        let (input, (result, _, _)) = all_consuming(tuple((
            parse_alter_table,
            opt(match_semicolon),
            maybe_take_whitespace,
        )))(input)?;
        Ok((input, result))
    }
}

/// While parsing, nodes only know how much input was left when they started.
/// Turns those into offsets from the start of the statement.
fn rebase(node: &mut AstNode, total_len: usize) {
    node.start_index = total_len - node.start_index;
    node.stop_index = (node.start_index + node.text.len()).saturating_sub(1);
    for child in node.children.iter_mut() {
        rebase(child, total_len);
    }
}

#[derive(Debug, Error)]
pub enum SqlParserError {
    #[error("SQL Parse Error {0}")]
    ParseError(String),
}
