//! Plan (solution) model.
//!
//! A plan is the terminal output of a scheduling run: the full ordered
//! semester sequence, the requirements that could not be placed, a summary
//! message, and a generation timestamp. Serde field names are the wire
//! shape consumed by downstream collaborators, so alternate plan sources
//! must produce this structure verbatim.

use serde::{Deserialize, Serialize};

use super::Term;

/// A course as it appears inside a semester slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    /// Course identifier.
    pub id: String,
    /// Course name.
    pub name: String,
    /// Credit value.
    pub credits: u32,
}

/// One semester in the planning horizon.
///
/// Owns the courses admitted into it and a running credit total. The
/// planner maintains the invariant that `credits` never exceeds the
/// configured ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterSlot {
    /// Calendar year this slot is displayed in.
    pub year: i32,
    /// Term label for this slot.
    pub term: Term,
    /// Courses admitted into this semester, in admission order.
    pub courses: Vec<ScheduledCourse>,
    /// Running credit total across admitted courses.
    pub credits: u32,
}

impl SemesterSlot {
    /// Creates an empty slot for the given year and term.
    pub fn new(year: i32, term: Term) -> Self {
        Self {
            year,
            term,
            courses: Vec::new(),
            credits: 0,
        }
    }

    /// Whether a course with the given credit value fits under the ceiling.
    pub fn fits(&self, credits: u32, ceiling: u32) -> bool {
        self.credits + credits <= ceiling
    }

    /// Admits a course into this slot and updates the credit total.
    pub fn admit(&mut self, course: ScheduledCourse) {
        self.credits += course.credits;
        self.courses.push(course);
    }

    /// Number of courses in this slot.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Whether the slot holds no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// A required course that was never placed into any slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmetRequirement {
    /// Identifier of the course left unplaced.
    pub course_id: String,
    /// Fixed diagnostic reason. The algorithm does not distinguish which
    /// constraint (timing, prerequisites, credit limit) applied.
    pub reason: String,
}

/// The terminal, immutable result of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// The full ordered semester sequence, always `years × 2` slots.
    pub schedule: Vec<SemesterSlot>,
    /// Courses still required but never placed.
    pub unmet_requirements: Vec<UnmetRequirement>,
    /// Human-readable summary.
    pub message: String,
    /// ISO-8601 generation timestamp.
    pub plan_timestamp: String,
}

impl PlanResult {
    /// Total credits scheduled across all slots.
    pub fn total_credits(&self) -> u32 {
        self.schedule.iter().map(|slot| slot.credits).sum()
    }

    /// Total number of scheduled courses.
    pub fn course_count(&self) -> usize {
        self.schedule.iter().map(SemesterSlot::course_count).sum()
    }

    /// Index of the slot containing the given course, if scheduled.
    pub fn slot_of(&self, course_id: &str) -> Option<usize> {
        self.schedule
            .iter()
            .position(|slot| slot.courses.iter().any(|c| c.id == course_id))
    }

    /// Whether the given course appears anywhere in the schedule.
    pub fn contains_course(&self, course_id: &str) -> bool {
        self.slot_of(course_id).is_some()
    }

    /// Whether every required course was placed.
    pub fn is_fully_scheduled(&self) -> bool {
        self.unmet_requirements.is_empty()
    }

    /// Identifiers of all unplaced courses, in report order.
    pub fn unmet_ids(&self) -> Vec<&str> {
        self.unmet_requirements
            .iter()
            .map(|u| u.course_id.as_str())
            .collect()
    }
}
