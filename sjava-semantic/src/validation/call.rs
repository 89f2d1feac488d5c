use sjava_core::{Error, Result};
use sjava_syntax::{MethodTable, split_top_level};

use crate::symbol_table::SymbolTable;
use crate::validation::variable::validate_value;

#[derive(Debug, Clone, Copy)]
pub struct CallChecker<'m> {
    methods: &'m MethodTable,
}

impl<'m> CallChecker<'m> {
    pub fn new(methods: &'m MethodTable) -> Self {
        Self { methods }
    }

    pub fn check(&self, callee: &str, args: &str, table: &SymbolTable) -> Result<()> {
        let Some(method) = self.methods.get(callee) else {
            return Err(Error::UnknownMethod {
                name: callee.into(),
            });
        };

        let args = match args.trim() {
            "" => Vec::new(),
            args => split_top_level(args, ','),
        };

        if args.len() != method.params.len() {
            return Err(Error::ArgumentCount {
                method: callee.into(),
                expected: method.params.len(),
                found: args.len(),
            });
        }

        for (arg, param) in args.iter().zip(&method.params) {
            validate_value(arg, param.ty, table)?;
        }

        Ok(())
    }
}
