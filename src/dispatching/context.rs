//! Slot context for priority-rule evaluation.

use std::collections::HashMap;

use crate::models::Term;

/// The state a rule may consult when scoring a course for one slot.
///
/// Term and position identify the slot being filled; `unlock_counts` lets
/// context-aware rules weigh how much downstream work a course unblocks.
#[derive(Debug, Clone)]
pub struct PlanContext {
    /// Term label of the slot being filled.
    pub term: Term,
    /// Zero-based position of the slot in the horizon.
    pub slot_index: usize,
    /// Calendar year the slot is displayed in.
    pub year: i32,
    /// course id → number of catalog courses listing it as a prerequisite.
    pub unlock_counts: HashMap<String, usize>,
}

impl PlanContext {
    /// Creates a context for the given slot.
    pub fn for_slot(term: Term, slot_index: usize, year: i32) -> Self {
        Self {
            term,
            slot_index,
            year,
            unlock_counts: HashMap::new(),
        }
    }

    /// Sets the dependent counts consulted by unlock-aware rules.
    pub fn with_unlock_counts(mut self, counts: HashMap<String, usize>) -> Self {
        self.unlock_counts = counts;
        self
    }

    /// Dependent count for a course; zero when nothing lists it.
    pub fn unlocks(&self, course_id: &str) -> usize {
        self.unlock_counts.get(course_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = PlanContext::for_slot(Term::Fall, 2, 2025)
            .with_unlock_counts([("CSCI 1100".to_string(), 3)].into());

        assert_eq!(ctx.term, Term::Fall);
        assert_eq!(ctx.slot_index, 2);
        assert_eq!(ctx.year, 2025);
        assert_eq!(ctx.unlocks("CSCI 1100"), 3);
        assert_eq!(ctx.unlocks("MATH 1010"), 0);
    }
}
