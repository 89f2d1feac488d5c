use std::collections::HashMap;

use serde::Serialize;
use sjava_core::{Error, Result, VarType};
use sjava_syntax::Parameter;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub ty: VarType,
    pub is_final: bool,
    pub is_initialized: bool,
    /// Last value text written to the variable. Kept for inspection only, it never takes
    /// part in a decision.
    pub value: Option<String>,
}

impl Binding {
    pub fn new(name: impl Into<String>, ty: VarType, is_final: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            is_final,
            is_initialized: false,
            value: None,
        }
    }

    pub fn initialized(mut self, value: Option<String>) -> Self {
        self.is_initialized = true;
        self.value = value;
        self
    }

    pub fn assign(&mut self, value: Option<String>) {
        self.is_initialized = true;
        self.value = value;
    }
}

impl From<&Parameter> for Binding {
    fn from(param: &Parameter) -> Self {
        Binding::new(param.name.clone(), param.ty, param.is_final).initialized(None)
    }
}

/// One nesting level's bindings.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    bindings: HashMap<String, Binding>,
}

impl Scope {
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// A stack of scopes. The bottom scope is the global one and stays for the whole run.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
        }
    }

    pub fn open_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    pub fn close_scope(&mut self) -> Result<()> {
        if self.scopes.len() <= 1 {
            return Err(Error::ScopeUnderflow);
        }

        self.scopes.pop();
        Ok(())
    }

    /// Number of scopes above the global one.
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    pub fn declare(&mut self, binding: Binding) -> Result<()> {
        let scope = self.current_mut();
        if scope.contains(&binding.name) {
            return Err(Error::Redeclaration { name: binding.name });
        }

        scope.bindings.insert(binding.name.clone(), binding);
        Ok(())
    }

    pub fn is_declared_in_current_scope(&self, name: &str) -> bool {
        self.current().contains(name)
    }

    /// Searches from the innermost scope outwards and returns the first match.
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.bindings.get_mut(name))
    }

    pub fn global(&self) -> &Scope {
        &self.scopes[0]
    }

    fn current(&self) -> &Scope {
        // the global scope can never be popped, so the stack is never empty
        &self.scopes[self.scopes.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Scope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }
}
