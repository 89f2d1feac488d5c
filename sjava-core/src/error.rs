use serde::Serialize;
use thiserror::Error;

use crate::VarType;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Broad category of a validation failure.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Structural,
    Name,
    Initialization,
    Type,
    Syntax,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Structural => write!(f, "structural error"),
            ErrorKind::Name => write!(f, "name error"),
            ErrorKind::Initialization => write!(f, "initialization error"),
            ErrorKind::Type => write!(f, "type error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// The first problem found in a program. Validation stops as soon as one is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("nested method declaration: '{line}'")]
    NestedMethod { line: String },
    #[error("condition or loop outside of a method: '{line}'")]
    ControlOutsideMethod { line: String },
    #[error("unmatched closing brace: '{line}'")]
    UnmatchedBlockEnd { line: String },
    #[error("unclosed block{}", .method.as_ref().map(|m| format!(" in method '{m}'")).unwrap_or_default())]
    UnclosedBlock { method: Option<String> },
    #[error("method '{name}' is declared more than once")]
    DuplicateMethod { name: String },
    #[error("invalid method name '{name}'")]
    InvalidMethodName { name: String },
    #[error("invalid method declaration: '{line}'")]
    MalformedMethodHeader { line: String },
    #[error("invalid parameter '{param}' in method '{method}'")]
    InvalidParameter { method: String, param: String },
    #[error("method '{method}' must end with 'return;' before its closing brace, found '{line}'")]
    MissingReturn { method: String, line: String },
    #[error("statement is not allowed outside of a method: '{line}'")]
    StatementOutsideMethod { line: String },
    #[error("unexpected line: '{line}'")]
    UnexpectedLine { line: String },
    #[error("the global scope cannot be closed")]
    ScopeUnderflow,

    #[error("unknown variable '{name}'")]
    UnknownVariable { name: String },
    #[error("unknown method '{name}'")]
    UnknownMethod { name: String },
    #[error("variable '{name}' is already declared in this scope")]
    Redeclaration { name: String },
    #[error("invalid identifier '{name}'")]
    InvalidIdentifier { name: String },

    #[error("final variable '{name}' requires an initializer")]
    FinalWithoutInitializer { name: String },
    #[error("cannot assign to final variable '{name}'")]
    AssignToFinal { name: String },
    #[error("variable '{name}' is used before it is initialized")]
    UninitializedVariable { name: String },
    #[error("no value given for '{name}'")]
    MissingValue { name: String },

    #[error("'{value}' is not a valid {expected} value")]
    InvalidLiteral { value: String, expected: VarType },
    #[error("type mismatch: cannot use {source_type} variable '{name}' as {target}")]
    TypeMismatch {
        name: String,
        source_type: VarType,
        target: VarType,
    },
    #[error("variable '{name}' of type {ty} cannot be used as a condition")]
    InvalidConditionType { name: String, ty: VarType },
    #[error("method '{method}' expects {expected} argument(s) but {found} were given")]
    ArgumentCount {
        method: String,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized line: '{line}'")]
    UnrecognizedLine { line: String },
    #[error("malformed condition: '{condition}'")]
    MalformedCondition { condition: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NestedMethod { .. }
            | Error::ControlOutsideMethod { .. }
            | Error::UnmatchedBlockEnd { .. }
            | Error::UnclosedBlock { .. }
            | Error::DuplicateMethod { .. }
            | Error::InvalidMethodName { .. }
            | Error::MalformedMethodHeader { .. }
            | Error::InvalidParameter { .. }
            | Error::MissingReturn { .. }
            | Error::StatementOutsideMethod { .. }
            | Error::UnexpectedLine { .. }
            | Error::ScopeUnderflow => ErrorKind::Structural,

            Error::UnknownVariable { .. }
            | Error::UnknownMethod { .. }
            | Error::Redeclaration { .. }
            | Error::InvalidIdentifier { .. } => ErrorKind::Name,

            Error::FinalWithoutInitializer { .. }
            | Error::AssignToFinal { .. }
            | Error::UninitializedVariable { .. }
            | Error::MissingValue { .. } => ErrorKind::Initialization,

            Error::InvalidLiteral { .. }
            | Error::TypeMismatch { .. }
            | Error::InvalidConditionType { .. }
            | Error::ArgumentCount { .. } => ErrorKind::Type,

            Error::UnrecognizedLine { .. } | Error::MalformedCondition { .. } => ErrorKind::Syntax,
        }
    }
}
