pub mod call;
pub mod condition;
pub mod literal;
pub mod variable;

pub use call::CallChecker;
pub use condition::ConditionChecker;
pub use variable::{VariableChecker, validate_value};
