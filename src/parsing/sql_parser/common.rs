use crate::constants::RuleName;
use crate::parsing::AstNode;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, tag_no_case, take_while1};
use nom::character::complete::{char, digit1, multispace0, satisfy};
use nom::combinator::{map, not, opt, recognize, verify};
use nom::error::{ContextError, ParseError};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

//Never an unquoted identifier, otherwise "ADD CONSTRAINT PRIMARY KEY" is ambiguous
const RESERVED: [&str; 22] = [
    "add",
    "after",
    "alter",
    "auto_increment",
    "change",
    "column",
    "comment",
    "constraint",
    "default",
    "drop",
    "first",
    "index",
    "key",
    "modify",
    "not",
    "null",
    "primary",
    "rename",
    "table",
    "to",
    "unique",
    "unsigned",
];

/// Builds a node covering everything consumed between `before` and `after`.
///
/// The start index is recorded as the remaining input length and fixed up once parsing is done.
pub(super) fn spanned(
    rule: RuleName,
    before: &str,
    after: &str,
    children: Vec<AstNode>,
) -> AstNode {
    let consumed = &before[..before.len() - after.len()];
    let trimmed = consumed.trim_start();
    let leading = consumed.len() - trimmed.len();
    AstNode::new(
        rule,
        trimmed.trim_end().to_string(),
        before.len() - leading,
        children,
    )
}

pub(super) fn maybe_take_whitespace<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    multispace0(input)
}

/// Unquoted MySQL identifiers also allow anything in U+0080 .. U+FFFF
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || ('\u{80}'..='\u{FFFF}').contains(&c)
}

/// Case insensitive keyword that must not run into more identifier characters
pub(super) fn keyword<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    word: &'static str,
) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str, E> {
    preceded(
        maybe_take_whitespace,
        terminated(tag_no_case(word), not(satisfy(is_identifier_char))),
    )
}

pub(super) fn parse_identifier<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    preceded(
        maybe_take_whitespace,
        alt((
            recognize(delimited(char('`'), is_not("`"), char('`'))),
            verify(take_while1(is_identifier_char), |s: &str| {
                !RESERVED.contains(&s.to_ascii_lowercase().as_str())
            }),
        )),
    )(input)
}

/// An identifier wrapped up as a leaf node
pub(super) fn parse_named<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    rule: RuleName,
) -> impl FnMut(&'a str) -> IResult<&'a str, AstNode, E> {
    move |input: &'a str| {
        let before = input;
        let (input, _) = parse_identifier(input)?;
        Ok((input, spanned(rule, before, input, vec![])))
    }
}

/// A keyword sequence wrapped up as a leaf node, for things like PRIMARY KEY
pub(super) fn parse_keyword_node<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    rule: RuleName,
    words: &'static [&'static str],
) -> impl FnMut(&'a str) -> IResult<&'a str, AstNode, E> {
    move |input: &'a str| {
        let before = input;
        let mut input = input;
        for word in words.iter() {
            let (rest, _) = keyword(*word)(input)?;
            input = rest;
        }
        Ok((input, spanned(rule, before, input, vec![])))
    }
}

pub(super) fn match_index_or_key<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    alt((keyword("index"), keyword("key")))(input)
}

// Literals accepted after DEFAULT
// Examples:
// * 'foo'
// * 'it''s'
// * -1.5
// * NULL / CURRENT_TIMESTAMP
pub(super) fn parse_literal<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    preceded(
        maybe_take_whitespace,
        alt((
            parse_sql_string,
            recognize(tuple((
                opt(char('-')),
                digit1,
                opt(pair(char('.'), digit1)),
            ))),
            take_while1(is_identifier_char),
        )),
    )(input)
}

pub(super) fn parse_sql_string<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    recognize(delimited(
        char('\''),
        many0(alt((is_not("'"), tag("''")))),
        char('\''),
    ))(input)
}

/// A parenthesised list of numbers such as the (10, 2) of DECIMAL(10, 2)
pub(super) fn parse_precision<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Vec<&'a str>, E> {
    delimited(
        match_open_paren,
        separated_list1(match_comma, preceded(maybe_take_whitespace, digit1)),
        match_close_paren,
    )(input)
}

pub(super) fn match_open_paren<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    preceded(maybe_take_whitespace, tag("("))(input)
}

pub(super) fn match_close_paren<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    preceded(maybe_take_whitespace, tag(")"))(input)
}

pub(super) fn match_comma<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    preceded(maybe_take_whitespace, tag(","))(input)
}

pub(super) fn match_semicolon<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, (), E> {
    map(preceded(maybe_take_whitespace, tag(";")), |_| ())(input)
}

#[cfg(test)]
mod tests {
    use nom::error::VerboseError;

    use super::*;

    #[test]
    fn test_keyword_boundary() {
        assert!(keyword::<VerboseError<&str>>("key")(" KEY idx").is_ok());
        assert!(keyword::<VerboseError<&str>>("key")("keys").is_err());
    }

    #[test]
    fn test_identifier() -> Result<(), Box<dyn std::error::Error>> {
        let (rest, name) = parse_identifier::<VerboseError<&str>>("  user_id, b")?;
        assert_eq!("user_id", name);
        assert_eq!(", b", rest);

        let (_, quoted) = parse_identifier::<VerboseError<&str>>("`order`")?;
        assert_eq!("`order`", quoted);

        assert!(parse_identifier::<VerboseError<&str>>("primary key").is_err());
        Ok(())
    }

    #[test]
    fn test_non_ascii_identifier() -> Result<(), Box<dyn std::error::Error>> {
        let (rest, name) = parse_identifier::<VerboseError<&str>>(" café INT")?;
        assert_eq!("café", name);
        assert_eq!(" INT", rest);

        let (rest, name) = parse_identifier::<VerboseError<&str>>("名前,")?;
        assert_eq!("名前", name);
        assert_eq!(",", rest);

        //A keyword directly followed by a non ASCII letter is an identifier, not the keyword
        assert!(keyword::<VerboseError<&str>>("first")("firsté").is_err());
        Ok(())
    }

    #[test]
    fn test_parse_sql_string() -> Result<(), Box<dyn std::error::Error>> {
        let (rest, value) = parse_sql_string::<VerboseError<&str>>("'one''two' rest")?;
        assert_eq!("'one''two'", value);
        assert_eq!(" rest", rest);
        Ok(())
    }

    #[test]
    fn test_literal() -> Result<(), Box<dyn std::error::Error>> {
        let (_, value) = parse_literal::<VerboseError<&str>>(" -1.5")?;
        assert_eq!("-1.5", value);
        let (_, value) = parse_literal::<VerboseError<&str>>(" CURRENT_TIMESTAMP")?;
        assert_eq!("CURRENT_TIMESTAMP", value);
        Ok(())
    }

    #[test]
    fn test_spanned_skips_whitespace() -> Result<(), Box<dyn std::error::Error>> {
        let before = "   col rest";
        let (after, _) = parse_identifier::<VerboseError<&str>>(before)?;
        let node = spanned(RuleName::ColumnName, before, after, vec![]);
        assert_eq!("col", node.text);
        //Remaining length when the text starts
        assert_eq!(8, node.start_index);
        Ok(())
    }
}
