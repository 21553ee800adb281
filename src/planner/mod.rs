//! Greedy semester planner and plan metrics.
//!
//! `SemesterPlanner` drives a fixed 8-slot horizon (4 years × Fall/Spring)
//! with a single deterministic greedy pass: no backtracking, no re-ordering
//! of already-placed courses. The algorithm optimizes for predictability
//! and explainability over optimal credit packing — a course may be held
//! back by the credit ceiling even when placing it earlier would free later
//! slack, and that trade is deliberate.
//!
//! `PlanStats` computes plan quality metrics from a finished `PlanResult`.

mod semester;
mod stats;

pub use semester::{
    PlanRequest, SemesterPlanner, DEFAULT_CREDIT_CEILING, DEFAULT_PLAN_YEARS, PRIMARY_TERMS,
};
pub use stats::PlanStats;
