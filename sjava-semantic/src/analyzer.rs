use sjava_core::{Error, Result};
use sjava_syntax::{LineKind, MethodTable, Partition, classify};

use crate::analysis::MethodWalker;
use crate::symbol_table::SymbolTable;
use crate::validation::VariableChecker;

#[derive(Debug)]
pub struct SemanticInfo {
    /// The table after the run. Only the global scope is left on it.
    pub symbol_table: SymbolTable,
    pub methods_checked: usize,
}

/// Runs every semantic check over a partitioned program and stops at the first error.
#[derive(Debug)]
pub struct SemanticAnalyzer<'p> {
    globals: &'p [String],
    methods: &'p MethodTable,
}

impl<'p> SemanticAnalyzer<'p> {
    pub fn new(globals: &'p [String], methods: &'p MethodTable) -> Self {
        Self { globals, methods }
    }

    pub fn analyze(&self) -> Result<SemanticInfo> {
        let mut symbol_table = SymbolTable::new();

        // Globals are all declared before any body is walked, and every method is already in
        // the table, so bodies may call methods declared further down.
        self.declare_globals(&mut symbol_table)?;

        let walker = MethodWalker::new(self.methods);
        for method in self.methods.iter() {
            tracing::debug!("validating method '{}'", method.name);
            walker.walk(method, &mut symbol_table)?;
        }

        Ok(SemanticInfo {
            symbol_table,
            methods_checked: self.methods.len(),
        })
    }

    fn declare_globals(&self, symbol_table: &mut SymbolTable) -> Result<()> {
        let checker = VariableChecker::new();

        for line in self.globals {
            match classify(line)? {
                LineKind::VariableDeclaration | LineKind::VariableAssignment => {
                    checker.check_line(line, symbol_table)?;
                }
                _ => return Err(Error::StatementOutsideMethod { line: line.clone() }),
            }
        }

        tracing::debug!("declared {} global variable(s)", symbol_table.global().len());
        Ok(())
    }
}

pub fn validate(partition: &Partition) -> Result<SemanticInfo> {
    SemanticAnalyzer::new(&partition.globals, &partition.methods).analyze()
}
