use sjava_core::{Error, Result, VarType, is_identifier};
use sjava_syntax::split_top_level;

use crate::symbol_table::{Binding, SymbolTable};
use crate::validation::literal::is_literal_of;

/// Checks declaration and assignment lines against the active symbol table, creating and
/// updating bindings as it goes.
#[derive(Debug, Default, Clone, Copy)]
pub struct VariableChecker;

impl VariableChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check_line(&self, line: &str, table: &mut SymbolTable) -> Result<()> {
        let mut rest = line.trim();

        let is_final = match strip_word(rest, "final") {
            Some(after) => {
                rest = after;
                true
            }
            None => false,
        };

        let declared_type = first_word(rest).and_then(VarType::from_keyword);
        if let Some(ty) = declared_type {
            rest = strip_word(rest, ty.keyword()).unwrap_or(rest);
        }

        if is_final && declared_type.is_none() {
            return Err(Error::UnrecognizedLine { line: line.into() });
        }

        let rest = rest.strip_suffix(';').unwrap_or(rest);

        for fragment in split_top_level(rest, ',') {
            let (name, value) = match fragment.split_once('=') {
                Some((name, value)) => (name.trim(), Some(value.trim())),
                None => (fragment.trim(), None),
            };

            match declared_type {
                Some(ty) => self.declare(name, ty, is_final, value, table)?,
                None => self.assign(name, value, table)?,
            }
        }

        Ok(())
    }

    fn declare(
        &self,
        name: &str,
        ty: VarType,
        is_final: bool,
        value: Option<&str>,
        table: &mut SymbolTable,
    ) -> Result<()> {
        if !is_identifier(name) {
            return Err(Error::InvalidIdentifier { name: name.into() });
        }

        if table.is_declared_in_current_scope(name) {
            return Err(Error::Redeclaration { name: name.into() });
        }

        let binding = Binding::new(name, ty, is_final);
        let binding = match value {
            None if is_final => return Err(Error::FinalWithoutInitializer { name: name.into() }),
            None => binding,
            Some("") => return Err(Error::MissingValue { name: name.into() }),
            Some(value) => binding.initialized(validate_value(value, ty, table)?),
        };

        table.declare(binding)
    }

    fn assign(&self, name: &str, value: Option<&str>, table: &mut SymbolTable) -> Result<()> {
        if !is_identifier(name) {
            return Err(Error::InvalidIdentifier { name: name.into() });
        }

        let Some(target) = table.lookup(name) else {
            return Err(Error::UnknownVariable { name: name.into() });
        };

        if target.is_final {
            return Err(Error::AssignToFinal { name: name.into() });
        }

        let target_type = target.ty;
        let value = value
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::MissingValue { name: name.into() })?;
        let stored = validate_value(value, target_type, table)?;

        if let Some(target) = table.lookup_mut(name) {
            target.assign(stored);
        }

        Ok(())
    }
}

/// Checks that `value` can be stored into something of type `target`, returning the value
/// text to keep on the receiving binding.
///
/// A bound variable is accepted when its type is compatible and it has been initialized.
/// Anything else must be a literal of exactly the target type.
pub fn validate_value(value: &str, target: VarType, table: &SymbolTable) -> Result<Option<String>> {
    let value = value.trim();

    if let Some(source) = table.lookup(value) {
        if !source.ty.is_compatible_with(target) {
            return Err(Error::TypeMismatch {
                name: value.into(),
                source_type: source.ty,
                target,
            });
        }

        if !source.is_initialized {
            return Err(Error::UninitializedVariable { name: value.into() });
        }

        return Ok(source.value.clone());
    }

    if is_literal_of(target, value) {
        return Ok(Some(value.into()));
    }

    if is_identifier(value) {
        return Err(Error::UnknownVariable { name: value.into() });
    }

    Err(Error::InvalidLiteral {
        value: value.into(),
        expected: target,
    })
}

fn first_word(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// Strips `word` and the whitespace after it. The word must be followed by whitespace.
fn strip_word<'t>(text: &'t str, word: &str) -> Option<&'t str> {
    let rest = text.strip_prefix(word)?;
    let trimmed = rest.trim_start();
    (trimmed.len() != rest.len()).then_some(trimmed)
}
