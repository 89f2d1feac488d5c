use sjava_core::{Error, Result, is_identifier};

use crate::symbol_table::SymbolTable;
use crate::validation::literal::{is_boolean_literal, is_numeric_literal};

/// Validates the flat expression of an `if`/`while` header. Atoms are joined by `&&` or
/// `||` only; there is no grouping and no precedence.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConditionChecker;

impl ConditionChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, condition: &str, table: &SymbolTable) -> Result<()> {
        for atom in split_atoms(condition) {
            let atom = atom.trim();

            // leading, trailing or doubled operators leave an empty atom behind
            if atom.is_empty() {
                return Err(Error::MalformedCondition {
                    condition: condition.into(),
                });
            }

            self.check_atom(atom, table)?;
        }

        Ok(())
    }

    fn check_atom(&self, atom: &str, table: &SymbolTable) -> Result<()> {
        if is_boolean_literal(atom) || is_numeric_literal(atom) {
            return Ok(());
        }

        if !is_identifier(atom) {
            return Err(Error::MalformedCondition {
                condition: atom.into(),
            });
        }

        let Some(binding) = table.lookup(atom) else {
            return Err(Error::UnknownVariable { name: atom.into() });
        };

        if !binding.is_initialized {
            return Err(Error::UninitializedVariable { name: atom.into() });
        }

        if !binding.ty.is_condition_type() {
            return Err(Error::InvalidConditionType {
                name: atom.into(),
                ty: binding.ty,
            });
        }

        Ok(())
    }
}

fn split_atoms(condition: &str) -> Vec<&str> {
    let bytes = condition.as_bytes();
    let mut atoms = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index + 1 < bytes.len() {
        match &bytes[index..index + 2] {
            b"&&" | b"||" => {
                atoms.push(&condition[start..index]);
                index += 2;
                start = index;
            }
            _ => index += 1,
        }
    }

    atoms.push(&condition[start..]);
    atoms
}
