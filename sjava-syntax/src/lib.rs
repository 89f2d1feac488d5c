pub mod classifier;
mod cursor;
pub mod method;
pub mod partitioner;

pub use classifier::{LineKind, call_parts, classify, condition_expression, method_header_parts};
pub use cursor::split_top_level;
pub use method::{MethodSignature, MethodTable, Parameter};
pub use partitioner::{Partition, Partitioner, partition};
