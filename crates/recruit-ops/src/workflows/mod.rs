//! Workflow engines for the recruiting-operations platform.

pub mod engagement;
pub mod hierarchy;
