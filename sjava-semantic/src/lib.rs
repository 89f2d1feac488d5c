pub mod analysis;
pub mod analyzer;
pub mod symbol_table;
pub mod validation;

#[cfg(test)]
mod tests;

pub use analyzer::{SemanticAnalyzer, SemanticInfo, validate};
pub use symbol_table::{Binding, Scope, SymbolTable};
