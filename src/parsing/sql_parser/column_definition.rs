//! Format here: https://dev.mysql.com/doc/refman/8.0/en/create-table.html
//! Column definitions and the FIRST / AFTER position that may follow them

use super::common::{
    keyword, maybe_take_whitespace, parse_identifier, parse_keyword_node, parse_literal,
    parse_named, parse_precision, parse_sql_string, spanned,
};
use crate::constants::RuleName;
use crate::parsing::AstNode;
use nom::branch::alt;
use nom::combinator::{cut, map, opt};
use nom::error::{context, ContextError, ParseError};
use nom::multi::many0;
use nom::sequence::{preceded, tuple};
use nom::IResult;

/// column_name data_type [attribute...]
pub(super) fn parse_column_definition<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, (name, data_type, attributes)) = tuple((
        parse_named(RuleName::ColumnName),
        context("data type", parse_data_type),
        many0(parse_column_attribute),
    ))(input)?;

    let mut children = vec![name, data_type];
    children.extend(attributes);
    Ok((
        input,
        spanned(RuleName::ColumnDefinition, before, input, children),
    ))
}

fn parse_data_type<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, _) = tuple((
        parse_identifier,
        opt(parse_precision),
        opt(keyword("unsigned")),
    ))(input)?;
    Ok((input, spanned(RuleName::DataType, before, input, vec![])))
}

fn parse_column_attribute<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    alt((
        parse_keyword_node(RuleName::NotNull, &["not", "null"]),
        parse_keyword_node(RuleName::ColumnAttribute, &["null"]),
        parse_keyword_node(RuleName::PrimaryKey, &["primary", "key"]),
        parse_keyword_node(RuleName::AutoIncrement, &["auto_increment"]),
        parse_unique,
        parse_default,
        parse_comment,
    ))(input)
}

fn parse_unique<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, _) = tuple((keyword("unique"), opt(keyword("key"))))(input)?;
    Ok((input, spanned(RuleName::Unique, before, input, vec![])))
}

fn parse_default<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, _) = preceded(keyword("default"), cut(parse_literal))(input)?;
    Ok((input, spanned(RuleName::ColumnAttribute, before, input, vec![])))
}

fn parse_comment<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, _) = preceded(
        keyword("comment"),
        cut(preceded(maybe_take_whitespace, parse_sql_string)),
    )(input)?;
    Ok((input, spanned(RuleName::ColumnAttribute, before, input, vec![])))
}

/// FIRST | AFTER column_name
pub(super) fn parse_first_or_after_column<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, children) = alt((
        map(keyword("first"), |_| vec![]),
        map(
            preceded(
                keyword("after"),
                cut(context("after column", parse_named(RuleName::ColumnName))),
            ),
            |name| vec![name],
        ),
    ))(input)?;
    Ok((
        input,
        spanned(RuleName::FirstOrAfterColumn, before, input, children),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::error::VerboseError;

    #[test]
    fn test_column_definition() -> Result<(), Box<dyn std::error::Error>> {
        let test = " id BIGINT(20) UNSIGNED NOT NULL AUTO_INCREMENT COMMENT 'row id' FIRST";
        let (rest, node) = parse_column_definition::<VerboseError<&str>>(test)?;
        assert_eq!(" FIRST", rest);
        assert_eq!(RuleName::ColumnDefinition, node.rule);

        let rules: Vec<RuleName> = node.children.iter().map(|c| c.rule).collect();
        assert_eq!(
            vec![
                RuleName::ColumnName,
                RuleName::DataType,
                RuleName::NotNull,
                RuleName::AutoIncrement,
                RuleName::ColumnAttribute
            ],
            rules
        );
        assert_eq!("BIGINT(20) UNSIGNED", node.children[1].text);
        Ok(())
    }

    #[test]
    fn test_default_values() -> Result<(), Box<dyn std::error::Error>> {
        let test = "status VARCHAR(8) DEFAULT 'new' NULL";
        let (rest, node) = parse_column_definition::<VerboseError<&str>>(test)?;
        assert_eq!("", rest);
        assert_eq!(4, node.children.len());
        Ok(())
    }

    #[test]
    fn test_first_or_after() -> Result<(), Box<dyn std::error::Error>> {
        let (_, first) = parse_first_or_after_column::<VerboseError<&str>>(" FIRST")?;
        assert!(first.children.is_empty());

        let (_, after) = parse_first_or_after_column::<VerboseError<&str>>(" after `name`")?;
        assert_eq!(1, after.children.len());
        assert_eq!("`name`", after.children[0].text);

        assert!(parse_first_or_after_column::<VerboseError<&str>>(" AFTER").is_err());
        Ok(())
    }
}
