pub mod method_walker;

pub use method_walker::MethodWalker;
