use std::fmt;

#[derive(Debug)]
pub enum PlanError {
    /// The exact planner's `R * C * 4 * 2^N` cost/parent arrays could not
    /// be allocated. The `Auto` dispatcher is expected to route large `N`
    /// to the approximate planner before this is ever reached.
    AllocationFailed,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::AllocationFailed => {
                write!(f, "failed to allocate the exact planner's state arrays")
            }
        }
    }
}

impl std::error::Error for PlanError {}

crate::util::err::err_macro::impl_err!(PlanError, Plan);
