pub mod compare;
pub mod gaps;

pub use compare::run_compare;
pub use gaps::run_gaps;
