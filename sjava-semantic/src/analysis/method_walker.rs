use sjava_core::{Error, Result};
use sjava_syntax::{LineKind, MethodSignature, MethodTable, call_parts, classify, condition_expression};

use crate::symbol_table::{Binding, SymbolTable};
use crate::validation::{CallChecker, ConditionChecker, VariableChecker};

/// Walks one method body line by line, opening and closing scopes in step with the block
/// nesting and handing each line to the matching checker.
#[derive(Debug)]
pub struct MethodWalker<'m> {
    variables: VariableChecker,
    conditions: ConditionChecker,
    calls: CallChecker<'m>,
}

impl<'m> MethodWalker<'m> {
    pub fn new(methods: &'m MethodTable) -> Self {
        Self {
            variables: VariableChecker::new(),
            conditions: ConditionChecker::new(),
            calls: CallChecker::new(methods),
        }
    }

    pub fn walk(&self, method: &MethodSignature, table: &mut SymbolTable) -> Result<()> {
        check_trailing_return(method)?;

        table.open_scope();
        for param in &method.params {
            table.declare(Binding::from(param))?;
        }

        let mut block_depth = 1usize;

        for line in &method.body {
            let line = line.trim();
            let kind = classify(line)?;

            if block_depth == 0 && kind != LineKind::BlockEnd {
                return Err(Error::UnexpectedLine { line: line.into() });
            }

            match kind {
                LineKind::FunctionCall => {
                    let (callee, args) = call_parts(line)
                        .ok_or_else(|| Error::UnrecognizedLine { line: line.into() })?;
                    self.calls.check(callee, args, table)?;
                }
                LineKind::ConditionOrLoopStart => {
                    let condition = condition_expression(line)
                        .ok_or_else(|| Error::UnrecognizedLine { line: line.into() })?;
                    self.conditions.check(condition, table)?;
                    table.open_scope();
                    block_depth += 1;
                }
                LineKind::BlockEnd => {
                    if block_depth == 0 {
                        return Err(Error::UnmatchedBlockEnd { line: line.into() });
                    }
                    table.close_scope()?;
                    block_depth -= 1;
                }
                LineKind::VariableDeclaration | LineKind::VariableAssignment => {
                    self.variables.check_line(line, table)?;
                }
                LineKind::ReturnStatement => {}
                LineKind::MethodHeader => {
                    return Err(Error::UnexpectedLine { line: line.into() });
                }
            }
        }

        if block_depth != 0 {
            return Err(Error::UnclosedBlock {
                method: Some(method.name.clone()),
            });
        }

        Ok(())
    }
}

/// The line right before the closing brace must be `return;`. Bodies too short to have such
/// a line are let through unchecked.
fn check_trailing_return(method: &MethodSignature) -> Result<()> {
    let Some(index) = method.body.len().checked_sub(2) else {
        tracing::warn!(
            "method '{}' has no line before its closing brace, skipping the return check",
            method.name
        );
        return Ok(());
    };

    let line = method.body[index].trim();
    if line != "return;" {
        return Err(Error::MissingReturn {
            method: method.name.clone(),
            line: line.into(),
        });
    }

    Ok(())
}
