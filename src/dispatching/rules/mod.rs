//! Built-in priority rules.
//!
//! # Categories
//!
//! - **Availability**: SCARCITY
//! - **Dependency**: UNLOCKS
//! - **Load**: FEWEST_CREDITS, MOST_CREDITS
//!
//! # Score Convention
//! All rules return lower scores for higher-priority courses.

use super::{PlanContext, PriorityRule, RuleScore};
use crate::models::Course;

/// Scarcity: fewest offering terms first.
///
/// The primary ordering of the planner. A course offered in one term has
/// exactly four chances inside the horizon; placing it at the earliest
/// legal opportunity avoids starving it behind flexible courses.
#[derive(Debug, Clone, Copy)]
pub struct Scarcity;

impl PriorityRule for Scarcity {
    fn name(&self) -> &'static str {
        "SCARCITY"
    }

    fn evaluate(&self, course: &Course, _context: &PlanContext) -> RuleScore {
        course.offering_count() as f64
    }

    fn description(&self) -> &'static str {
        "Fewest offering terms first"
    }
}

/// Unlocks: most downstream dependents first.
///
/// Scheduling a course that many other courses list as a prerequisite
/// widens the eligible set for later slots.
#[derive(Debug, Clone, Copy)]
pub struct Unlocks;

impl PriorityRule for Unlocks {
    fn name(&self) -> &'static str {
        "UNLOCKS"
    }

    fn evaluate(&self, course: &Course, context: &PlanContext) -> RuleScore {
        -(context.unlocks(&course.id) as f64)
    }

    fn description(&self) -> &'static str {
        "Most downstream dependents first"
    }
}

/// Fewest credits first.
///
/// Packs more courses per slot under the credit ceiling.
#[derive(Debug, Clone, Copy)]
pub struct FewestCredits;

impl PriorityRule for FewestCredits {
    fn name(&self) -> &'static str {
        "FEWEST_CREDITS"
    }

    fn evaluate(&self, course: &Course, _context: &PlanContext) -> RuleScore {
        course.credits as f64
    }

    fn description(&self) -> &'static str {
        "Fewest credits first"
    }
}

/// Most credits first.
///
/// Front-loads heavy courses while slots still have full credit headroom.
#[derive(Debug, Clone, Copy)]
pub struct MostCredits;

impl PriorityRule for MostCredits {
    fn name(&self) -> &'static str {
        "MOST_CREDITS"
    }

    fn evaluate(&self, course: &Course, _context: &PlanContext) -> RuleScore {
        -(course.credits as f64)
    }

    fn description(&self) -> &'static str {
        "Most credits first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Term;

    fn course(id: &str, credits: u32, terms: &[Term]) -> Course {
        Course::new(id, format!("{id} name"), credits)
            .unwrap()
            .with_terms(terms.to_vec())
    }

    fn ctx() -> PlanContext {
        PlanContext::for_slot(Term::Fall, 0, 2024)
    }

    #[test]
    fn test_scarcity_scores() {
        let rare = course("rare", 4, &[Term::Fall]);
        let common = course("common", 4, &[Term::Fall, Term::Spring, Term::Summer]);

        assert!(Scarcity.evaluate(&rare, &ctx()) < Scarcity.evaluate(&common, &ctx()));
    }

    #[test]
    fn test_unlocks_scores() {
        let gateway = course("gateway", 4, &[Term::Fall]);
        let leaf = course("leaf", 4, &[Term::Fall]);
        let ctx = ctx().with_unlock_counts([("gateway".to_string(), 5)].into());

        assert!(Unlocks.evaluate(&gateway, &ctx) < Unlocks.evaluate(&leaf, &ctx));
    }

    #[test]
    fn test_credit_rules_are_opposites() {
        let light = course("light", 1, &[Term::Fall]);
        let heavy = course("heavy", 6, &[Term::Fall]);

        assert!(FewestCredits.evaluate(&light, &ctx()) < FewestCredits.evaluate(&heavy, &ctx()));
        assert!(MostCredits.evaluate(&heavy, &ctx()) < MostCredits.evaluate(&light, &ctx()));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Scarcity.name(), "SCARCITY");
        assert_eq!(Unlocks.name(), "UNLOCKS");
        assert_eq!(FewestCredits.name(), "FEWEST_CREDITS");
        assert_eq!(MostCredits.name(), "MOST_CREDITS");
        assert_eq!(Scarcity.description(), "Fewest offering terms first");
    }
}
