use serde::Serialize;

use super::Partition;
use crate::method::MethodSignature;

#[derive(Debug, Serialize)]
pub struct SnapshotPartition<'p> {
    pub globals: Vec<&'p str>,
    pub methods: Vec<SnapshotMethod<'p>>,
}

#[derive(Debug, Serialize)]
pub struct SnapshotMethod<'p> {
    pub name: &'p str,
    pub params: Vec<String>,
    pub body_lines: usize,
}

impl<'p> SnapshotPartition<'p> {
    pub fn from_partition(partition: &'p Partition) -> Self {
        Self {
            globals: partition.globals.iter().map(String::as_str).collect(),
            methods: partition
                .methods
                .iter()
                .map(SnapshotMethod::from_method)
                .collect(),
        }
    }
}

impl<'p> SnapshotMethod<'p> {
    fn from_method(method: &'p MethodSignature) -> Self {
        Self {
            name: &method.name,
            params: method
                .params
                .iter()
                .map(|param| match param.is_final {
                    true => format!("final {} {}", param.ty, param.name),
                    false => format!("{} {}", param.ty, param.name),
                })
                .collect(),
            body_lines: method.body.len(),
        }
    }
}
