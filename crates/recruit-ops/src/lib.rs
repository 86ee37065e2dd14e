//! Core engine for the recruiting-operations platform.
//!
//! The interesting logic lives in [`workflows`]: interview lifecycle
//! classification, candidate priority ranking, the recruiter hierarchy
//! tree, and the permission and placement guards layered on top. The
//! remaining modules carry configuration, telemetry, and the shared
//! server error type.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
