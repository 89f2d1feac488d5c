#[cfg(test)]
mod snapshots;

use sjava_core::{Error, Result};

use crate::classifier::{LineKind, classify, method_header_parts};
use crate::method::{MethodSignature, MethodTable};

/// A program split into its global declaration lines and its methods.
#[derive(Debug, Default, Clone)]
pub struct Partition {
    pub globals: Vec<String>,
    pub methods: MethodTable,
}

/// Splits a normalized line stream into globals and method bodies in a single pass,
/// tracking brace nesting as it goes.
#[derive(Debug, Default)]
pub struct Partitioner {
    in_method: bool,
    block_depth: usize,
    header: Option<String>,
    body: Vec<String>,
    partition: Partition,
}

impl Partitioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn partition<S: AsRef<str>>(mut self, lines: &[S]) -> Result<Partition> {
        for line in lines {
            self.feed(line.as_ref())?;
        }

        self.finish()
    }

    pub fn feed(&mut self, line: &str) -> Result<()> {
        match classify(line)? {
            LineKind::MethodHeader => {
                if self.in_method {
                    return Err(Error::NestedMethod { line: line.into() });
                }

                self.in_method = true;
                self.block_depth = 1;
                self.body = Vec::new();
                self.header = Some(line.into());
            }
            LineKind::ConditionOrLoopStart => {
                if !self.in_method {
                    return Err(Error::ControlOutsideMethod { line: line.into() });
                }

                self.block_depth += 1;
                self.body.push(line.into());
            }
            LineKind::BlockEnd => {
                if self.block_depth == 0 {
                    return Err(Error::UnmatchedBlockEnd { line: line.into() });
                }

                self.block_depth -= 1;
                if self.in_method {
                    self.body.push(line.into());
                }

                if self.block_depth == 0 && self.in_method {
                    self.finalize_method()?;
                }
            }
            _ if self.in_method => self.body.push(line.into()),
            _ => {
                if self.block_depth == 0 && !line.trim().is_empty() {
                    self.partition.globals.push(line.into());
                }
            }
        }

        Ok(())
    }

    pub fn finish(self) -> Result<Partition> {
        if self.block_depth != 0 {
            let method = self
                .header
                .as_deref()
                .and_then(method_header_parts)
                .map(|(name, _)| name.to_string());
            return Err(Error::UnclosedBlock { method });
        }

        Ok(self.partition)
    }

    fn finalize_method(&mut self) -> Result<()> {
        let header = self.header.take().unwrap_or_default();
        let body = std::mem::take(&mut self.body);
        let method = MethodSignature::from_header(&header, body)?;

        tracing::debug!(
            "collected method '{}' with {} parameter(s) and {} body line(s)",
            method.name,
            method.params.len(),
            method.body.len()
        );

        self.partition.methods.register(method)?;
        self.in_method = false;
        Ok(())
    }
}

pub fn partition<S: AsRef<str>>(lines: &[S]) -> Result<Partition> {
    Partitioner::new().partition(lines)
}
