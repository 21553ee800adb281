//! Prerequisite tracking.
//!
//! Maintains, per catalog course, the number of its prerequisites not yet
//! satisfied. A course is eligible for scheduling iff its counter is zero.
//! Instead of scanning the catalog for dependents on every satisfaction
//! event, the tracker precomputes the reverse adjacency (prerequisite →
//! dependents) once per run; observable behavior is identical.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::models::CourseCatalog;

/// Per-course unmet-prerequisite counters with a precomputed dependent map.
///
/// Covers the whole catalog, not just the courses under consideration: any
/// catalog course may be a dependent of a completed or scheduled course and
/// its counter must stay current even if it is never scheduled itself.
///
/// Counters are initialized from the *distinct* prerequisite set, and every
/// decrement clamps at zero, so a duplicated entry in a prerequisite list
/// can never drive a counter negative. [`PrereqTracker::satisfy`] must be
/// called at most once per course per run; a repeat call is a logic error
/// surfaced by a debug assertion and ignored in release builds.
#[derive(Debug, Clone)]
pub struct PrereqTracker {
    /// course id → number of distinct prerequisites not yet satisfied.
    unmet: HashMap<String, u32>,
    /// prerequisite id → courses that list it, in catalog order.
    dependents: HashMap<String, Vec<String>>,
    /// Courses already passed to `satisfy`.
    satisfied: HashSet<String>,
}

impl PrereqTracker {
    /// Builds counters and the reverse adjacency for the full catalog.
    pub fn from_catalog(catalog: &CourseCatalog) -> Self {
        let mut unmet = HashMap::with_capacity(catalog.len());
        let mut dependents: HashMap<String, Vec<String>> = HashMap::new();

        for course in catalog.courses() {
            if unmet.contains_key(&course.id) {
                continue; // duplicate catalog row, first occurrence wins
            }
            let mut distinct: HashSet<&str> = HashSet::new();
            for prereq in &course.prerequisites {
                if distinct.insert(prereq.as_str()) {
                    dependents
                        .entry(prereq.clone())
                        .or_default()
                        .push(course.id.clone());
                }
            }
            unmet.insert(course.id.clone(), distinct.len() as u32);
        }

        Self {
            unmet,
            dependents,
            satisfied: HashSet::new(),
        }
    }

    /// Records that `course_id` is satisfied (completed before the horizon
    /// or just scheduled) and decrements every dependent's counter.
    pub fn satisfy(&mut self, course_id: &str) {
        let first_call = self.satisfied.insert(course_id.to_string());
        debug_assert!(first_call, "satisfy called twice for course '{course_id}'");
        if !first_call {
            warn!(course_id, "re-entrant satisfy call ignored");
            return;
        }

        if let Some(deps) = self.dependents.get(course_id) {
            for dependent in deps {
                if let Some(count) = self.unmet.get_mut(dependent) {
                    *count = count.saturating_sub(1);
                }
            }
        }
    }

    /// Eligibility predicate: all prerequisites satisfied.
    pub fn is_eligible(&self, course_id: &str) -> bool {
        self.unmet_count(course_id) == 0
    }

    /// Number of distinct prerequisites still unmet for a course.
    ///
    /// Identifiers outside the catalog report zero; they have no declared
    /// prerequisites to wait on.
    pub fn unmet_count(&self, course_id: &str) -> u32 {
        self.unmet.get(course_id).copied().unwrap_or(0)
    }

    /// Courses that list `course_id` as a prerequisite, in catalog order.
    pub fn dependents_of(&self, course_id: &str) -> &[String] {
        self.dependents
            .get(course_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `satisfy` has already been called for this course.
    pub fn is_satisfied(&self, course_id: &str) -> bool {
        self.satisfied.contains(course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Term};

    fn course(id: &str, prereqs: &[&str]) -> Course {
        Course::new(id, format!("{id} name"), 4)
            .unwrap()
            .offered_in(Term::Fall)
            .with_prerequisites(prereqs.iter().map(|s| s.to_string()).collect())
    }

    fn catalog(courses: Vec<Course>) -> CourseCatalog {
        CourseCatalog::new(courses)
    }

    #[test]
    fn test_initial_counters() {
        let tracker = PrereqTracker::from_catalog(&catalog(vec![
            course("A", &[]),
            course("B", &["A"]),
            course("C", &["A", "B"]),
        ]));

        assert_eq!(tracker.unmet_count("A"), 0);
        assert_eq!(tracker.unmet_count("B"), 1);
        assert_eq!(tracker.unmet_count("C"), 2);
        assert!(tracker.is_eligible("A"));
        assert!(!tracker.is_eligible("C"));
    }

    #[test]
    fn test_satisfy_unlocks_dependents() {
        let mut tracker = PrereqTracker::from_catalog(&catalog(vec![
            course("A", &[]),
            course("B", &["A"]),
            course("C", &["A", "B"]),
        ]));

        tracker.satisfy("A");
        assert!(tracker.is_eligible("B"));
        assert_eq!(tracker.unmet_count("C"), 1);

        tracker.satisfy("B");
        assert!(tracker.is_eligible("C"));
    }

    #[test]
    fn test_dependents_in_catalog_order() {
        let tracker = PrereqTracker::from_catalog(&catalog(vec![
            course("Z", &["A"]),
            course("A", &[]),
            course("M", &["A"]),
        ]));
        assert_eq!(tracker.dependents_of("A"), ["Z", "M"]);
        assert!(tracker.dependents_of("Q").is_empty());
    }

    #[test]
    fn test_duplicate_prerequisite_counted_once() {
        let tracker =
            PrereqTracker::from_catalog(&catalog(vec![course("A", &[]), course("B", &["A", "A"])]));
        // Distinct set: one decrement fully unlocks B.
        assert_eq!(tracker.unmet_count("B"), 1);
    }

    #[test]
    fn test_unknown_prerequisite_blocks_forever() {
        let tracker = PrereqTracker::from_catalog(&catalog(vec![course("X", &["GHOST"])]));
        assert_eq!(tracker.unmet_count("X"), 1);
        assert!(!tracker.is_eligible("X"));
    }

    #[test]
    fn test_unknown_course_reports_zero() {
        let tracker = PrereqTracker::from_catalog(&catalog(vec![course("A", &[])]));
        assert_eq!(tracker.unmet_count("NOT-IN-CATALOG"), 0);
    }

    #[test]
    #[should_panic(expected = "satisfy called twice")]
    fn test_reentrant_satisfy_is_logic_error() {
        let mut tracker =
            PrereqTracker::from_catalog(&catalog(vec![course("A", &[]), course("B", &["A"])]));
        tracker.satisfy("A");
        tracker.satisfy("A");
    }

    #[test]
    fn test_satisfy_unrelated_course_leaves_counters() {
        let mut tracker = PrereqTracker::from_catalog(&catalog(vec![
            course("A", &[]),
            course("P", &[]),
            course("B", &["A"]),
        ]));
        tracker.satisfy("P");
        assert_eq!(tracker.unmet_count("B"), 1);
        tracker.satisfy("A");
        assert_eq!(tracker.unmet_count("B"), 0);
    }

    #[test]
    fn test_is_satisfied() {
        let mut tracker = PrereqTracker::from_catalog(&catalog(vec![course("A", &[])]));
        assert!(!tracker.is_satisfied("A"));
        tracker.satisfy("A");
        assert!(tracker.is_satisfied("A"));
    }
}
