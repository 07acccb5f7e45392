//! Grammar rule identifiers used to tag parse tree nodes.
//!
//! The extractors only ever look nodes up by these names, so a different
//! parser front end only has to produce a tree tagged with the same rules.
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuleName {
    AlterTable,
    TableName,
    AddColumn,
    ColumnDefinition,
    ColumnName,
    DataType,
    PrimaryKey,
    NotNull,
    AutoIncrement,
    ColumnAttribute,
    FirstOrAfterColumn,
    AddIndex,
    Unique,
    IndexName,
    KeyParts,
    DropIndex,
    RenameIndex,
    AddConstraint,
    ConstraintName,
    DropPrimaryKey,
    DropColumn,
    ChangeColumn,
    ModifyColumn,
}

impl RuleName {
    pub const fn value(self) -> &'static str {
        use RuleName::*;
        match self {
            AlterTable => "AlterTable",
            TableName => "TableName",
            AddColumn => "AddColumn",
            ColumnDefinition => "ColumnDefinition",
            ColumnName => "ColumnName",
            DataType => "DataType",
            PrimaryKey => "PrimaryKey",
            NotNull => "NotNull",
            AutoIncrement => "AutoIncrement",
            ColumnAttribute => "ColumnAttribute",
            FirstOrAfterColumn => "FirstOrAfterColumn",
            AddIndex => "AddIndex",
            Unique => "Unique",
            IndexName => "IndexName",
            KeyParts => "KeyParts",
            DropIndex => "DropIndex",
            RenameIndex => "RenameIndex",
            AddConstraint => "AddConstraint",
            ConstraintName => "ConstraintName",
            DropPrimaryKey => "DropPrimaryKey",
            DropColumn => "DropColumn",
            ChangeColumn => "ChangeColumn",
            ModifyColumn => "ModifyColumn",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
