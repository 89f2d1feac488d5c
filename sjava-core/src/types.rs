use serde::Serialize;

/// Words that can never be used as variable or method names.
pub const RESERVED_WORDS: &[&str] = &[
    "void", "final", "if", "while", "return", "true", "false", "int", "double", "boolean", "char",
    "String",
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum VarType {
    Int,
    Double,
    Boolean,
    Char,
    String,
}

impl VarType {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(VarType::Int),
            "double" => Some(VarType::Double),
            "boolean" => Some(VarType::Boolean),
            "char" => Some(VarType::Char),
            "String" => Some(VarType::String),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            VarType::Int => "int",
            VarType::Double => "double",
            VarType::Boolean => "boolean",
            VarType::Char => "char",
            VarType::String => "String",
        }
    }

    /// Whether a variable of type `self` may be used where `target` is expected.
    /// Only identical types and the int/double pair are interchangeable.
    pub fn is_compatible_with(self, target: VarType) -> bool {
        self == target
            || matches!(
                (self, target),
                (VarType::Int, VarType::Double) | (VarType::Double, VarType::Int)
            )
    }

    /// Types that may appear as a bare condition atom.
    pub fn is_condition_type(self) -> bool {
        matches!(self, VarType::Boolean | VarType::Int | VarType::Double)
    }
}

impl std::fmt::Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// A letter, or an underscore followed by a letter, then any run of letters, digits or
/// underscores. Reserved words are not identifiers.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let head_ok = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => true,
        Some('_') => matches!(chars.next(), Some(c) if c.is_ascii_alphabetic()),
        _ => false,
    };

    head_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_reserved_word(name)
}

/// Method names are stricter than variables and must start with a letter.
pub fn is_method_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic()) && is_identifier(name)
}
