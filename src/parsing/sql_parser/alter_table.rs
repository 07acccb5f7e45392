//! Format here: https://dev.mysql.com/doc/refman/8.0/en/alter-table.html
//! This is only implementing the clauses the extractors care about

use super::column_definition::{parse_column_definition, parse_first_or_after_column};
use super::common::{
    keyword, match_close_paren, match_comma, match_index_or_key, match_open_paren,
    parse_identifier, parse_keyword_node, parse_named, parse_precision, spanned,
};
use crate::constants::RuleName;
use crate::parsing::AstNode;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::{cut, map, opt};
use nom::error::{context, ContextError, ParseError};
use nom::multi::separated_list1;
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

pub(super) fn parse_alter_table<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, (_, (table_name, specifications))) = tuple((
        match_alter_table,
        cut(tuple((
            context("table name", parse_table_name),
            separated_list1(match_comma, parse_alter_specification),
        ))),
    ))(input)?;

    let mut children = vec![table_name];
    children.extend(specifications);
    Ok((input, spanned(RuleName::AlterTable, before, input, children)))
}

fn match_alter_table<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, (), E> {
    let (input, _) = tuple((keyword("alter"), keyword("table")))(input)?;
    Ok((input, ()))
}

/// Optionally schema qualified, schema.table
fn parse_table_name<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, _) = pair(parse_identifier, opt(preceded(tag("."), parse_identifier)))(input)?;
    Ok((input, spanned(RuleName::TableName, before, input, vec![])))
}

fn parse_alter_specification<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    context(
        "alter specification",
        alt((
            parse_add_index,
            parse_add_constraint,
            parse_add_column,
            parse_drop_primary_key,
            parse_drop_index,
            parse_drop_column,
            parse_rename_index,
            parse_change_column,
            parse_modify_column,
        )),
    )(input)
}

/// ADD [COLUMN] col_def [FIRST | AFTER col] | ADD [COLUMN] (col_def, ...)
fn parse_add_column<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, (_, _, children)) = tuple((
        keyword("add"),
        opt(keyword("column")),
        cut(alt((
            delimited(
                match_open_paren,
                separated_list1(match_comma, parse_column_definition),
                match_close_paren,
            ),
            map(
                pair(parse_column_definition, opt(parse_first_or_after_column)),
                |(definition, position)| {
                    let mut children = vec![definition];
                    children.extend(position);
                    children
                },
            ),
        ))),
    ))(input)?;
    Ok((input, spanned(RuleName::AddColumn, before, input, children)))
}

/// ADD [UNIQUE] {INDEX | KEY} [index_name] (key_part, ...)
fn parse_add_index<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, (_, unique, (index_name, key_parts))) = tuple((
        keyword("add"),
        alt((
            map(
                terminated(
                    parse_keyword_node(RuleName::Unique, &["unique"]),
                    opt(match_index_or_key),
                ),
                Some,
            ),
            map(match_index_or_key, |_| None),
        )),
        cut(pair(opt(parse_named(RuleName::IndexName)), parse_key_parts)),
    ))(input)?;

    let mut children = vec![];
    children.extend(unique);
    children.extend(index_name);
    children.push(key_parts);
    Ok((input, spanned(RuleName::AddIndex, before, input, children)))
}

/// ADD [CONSTRAINT [symbol]] PRIMARY KEY (key_part, ...)
fn parse_add_constraint<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, (_, constraint_name, primary_key, key_parts)) = tuple((
        keyword("add"),
        opt(preceded(
            keyword("constraint"),
            opt(parse_named(RuleName::ConstraintName)),
        )),
        parse_keyword_node(RuleName::PrimaryKey, &["primary", "key"]),
        cut(parse_key_parts),
    ))(input)?;

    let mut children = vec![];
    children.extend(constraint_name.flatten());
    children.push(primary_key);
    children.push(key_parts);
    Ok((input, spanned(RuleName::AddConstraint, before, input, children)))
}

/// (col [(length)] [ASC | DESC], ...)
fn parse_key_parts<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, columns) = delimited(
        match_open_paren,
        separated_list1(
            match_comma,
            terminated(
                parse_named(RuleName::ColumnName),
                pair(
                    opt(parse_precision),
                    opt(alt((keyword("asc"), keyword("desc")))),
                ),
            ),
        ),
        match_close_paren,
    )(input)?;
    Ok((input, spanned(RuleName::KeyParts, before, input, columns)))
}

fn parse_drop_primary_key<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    parse_keyword_node(RuleName::DropPrimaryKey, &["drop", "primary", "key"])(input)
}

fn parse_drop_index<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, (_, _, index_name)) = tuple((
        keyword("drop"),
        match_index_or_key,
        cut(parse_named(RuleName::IndexName)),
    ))(input)?;
    Ok((input, spanned(RuleName::DropIndex, before, input, vec![index_name])))
}

fn parse_drop_column<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, (_, _, column_name)) = tuple((
        keyword("drop"),
        opt(keyword("column")),
        cut(parse_named(RuleName::ColumnName)),
    ))(input)?;
    Ok((input, spanned(RuleName::DropColumn, before, input, vec![column_name])))
}

/// RENAME {INDEX | KEY} old_index_name TO new_index_name
fn parse_rename_index<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, (_, _, (old_name, _, new_name))) = tuple((
        keyword("rename"),
        match_index_or_key,
        cut(tuple((
            parse_named(RuleName::IndexName),
            keyword("to"),
            parse_named(RuleName::IndexName),
        ))),
    ))(input)?;
    Ok((
        input,
        spanned(RuleName::RenameIndex, before, input, vec![old_name, new_name]),
    ))
}

/// CHANGE [COLUMN] old_col_name col_def [FIRST | AFTER col_name]
fn parse_change_column<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, (_, _, (old_name, definition, position))) = tuple((
        keyword("change"),
        opt(keyword("column")),
        cut(tuple((
            parse_named(RuleName::ColumnName),
            parse_column_definition,
            opt(parse_first_or_after_column),
        ))),
    ))(input)?;

    let mut children = vec![old_name, definition];
    children.extend(position);
    Ok((input, spanned(RuleName::ChangeColumn, before, input, children)))
}

/// MODIFY [COLUMN] col_def [FIRST | AFTER col_name]
fn parse_modify_column<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, AstNode, E> {
    let before = input;
    let (input, (_, _, (definition, position))) = tuple((
        keyword("modify"),
        opt(keyword("column")),
        cut(pair(parse_column_definition, opt(parse_first_or_after_column))),
    ))(input)?;

    let mut children = vec![definition];
    children.extend(position);
    Ok((input, spanned(RuleName::ModifyColumn, before, input, children)))
}
