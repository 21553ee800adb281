//! Plan quality metrics.
//!
//! Computes summary indicators from a finished plan, the same aggregates a
//! consumer would derive before rendering: credit totals, load per term,
//! and how much of the required set was actually placed.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Credits | Sum over all slots |
//! | Terms Used | Slots holding at least one course |
//! | Max Term Credits | Heaviest single semester |
//! | Avg Term Credits | Mean load across used terms |
//! | Completion Rate | scheduled / (scheduled + unmet) |

use crate::models::PlanResult;

/// Summary indicators for a generated plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStats {
    /// Total credits scheduled across the horizon.
    pub total_credits: u32,
    /// Number of scheduled courses.
    pub scheduled_courses: usize,
    /// Number of required courses left unplaced.
    pub unmet_courses: usize,
    /// Slots holding at least one course.
    pub terms_used: usize,
    /// Heaviest single-semester credit load.
    pub max_term_credits: u32,
    /// Mean credit load across used terms (0.0 when none used).
    pub avg_term_credits: f64,
    /// Fraction of required courses that were placed (1.0 when nothing
    /// was required).
    pub completion_rate: f64,
}

impl PlanStats {
    /// Computes stats from a plan result.
    pub fn calculate(plan: &PlanResult) -> Self {
        let total_credits = plan.total_credits();
        let scheduled_courses = plan.course_count();
        let unmet_courses = plan.unmet_requirements.len();

        let used: Vec<u32> = plan
            .schedule
            .iter()
            .filter(|slot| !slot.is_empty())
            .map(|slot| slot.credits)
            .collect();
        let terms_used = used.len();
        let max_term_credits = used.iter().copied().max().unwrap_or(0);
        let avg_term_credits = if terms_used == 0 {
            0.0
        } else {
            total_credits as f64 / terms_used as f64
        };

        let required = scheduled_courses + unmet_courses;
        let completion_rate = if required == 0 {
            1.0
        } else {
            scheduled_courses as f64 / required as f64
        };

        Self {
            total_credits,
            scheduled_courses,
            unmet_courses,
            terms_used,
            max_term_credits,
            avg_term_credits,
            completion_rate,
        }
    }

    /// Whether no semester exceeds the given credit ceiling.
    pub fn within_credit_ceiling(&self, ceiling: u32) -> bool {
        self.max_term_credits <= ceiling
    }

    /// Whether every required course was placed.
    pub fn is_complete(&self) -> bool {
        self.unmet_courses == 0
    }
}
