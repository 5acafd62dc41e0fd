//! Precedence ordering for [`Version`]s and evaluation of constraint
//! expressions such as `"> 1.0.0, < 2.0.0"` or `"~> 1.2.3"`.

mod compare;
mod operator;
mod requirement;

pub use compare::{
    compare, equal_to, greater_or_equal, greater_than, less_or_equal, less_than, twiddle,
};
pub use operator::{Operator, satisfies_relation};
pub use requirement::{Clause, ConstraintError, Requirement, satisfies};
pub use vc_version::{Version, VersionError};
