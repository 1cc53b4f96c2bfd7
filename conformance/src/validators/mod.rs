//! Raw artifact validators.
//!
//! Each validator inspects the artifact bytes against one output invariant
//! and returns a single [`TestResult`](crate::TestResult).

pub mod pixels;
pub mod placement;
pub mod reference;
pub mod size;

/// Most offending positions listed in a failure's details.
pub(crate) const MAX_DETAILS: usize = 8;
