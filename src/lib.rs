//! Degree planning core: multi-semester course scheduling.
//!
//! Turns a student's program requirements, a course catalog, and a record of
//! completed courses into a deterministic 4-year (8-semester) plan that
//! respects prerequisite ordering, per-term offering availability, and a
//! per-semester credit ceiling. Courses that cannot be placed are reported
//! as data, not as errors — a partial plan is always produced.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Term`, `CourseCatalog`,
//!   `Program`, `Requirement`, `SemesterSlot`, `PlanResult`
//! - **`resolver`**: Program selection and required-pool resolution
//! - **`prereq`**: Prerequisite counters with precomputed reverse adjacency
//! - **`dispatching`**: Priority rules and rule engine for candidate ordering
//! - **`planner`**: The greedy fixed-horizon scheduler and plan metrics
//! - **`validation`**: Input integrity checks (duplicate IDs, cycles, refs)
//! - **`error`**: Fallible-boundary error taxonomy
//!
//! # Architecture
//!
//! Resolution and data access can fail (`error::PlanError`); the scheduling
//! computation itself is total, synchronous, and allocates all mutable state
//! per invocation — caller-owned catalogs and requirements are read-only.

pub mod dispatching;
pub mod error;
pub mod models;
pub mod planner;
pub mod prereq;
pub mod resolver;
pub mod validation;
