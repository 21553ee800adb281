//! Course model.
//!
//! A course is the unit of scheduling: a catalog entry with a credit value,
//! the terms it is offered in, and the prerequisite courses it depends on.
//! Course records are immutable for the duration of a planning run.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An academic term.
///
/// The planning horizon is built from the two primary terms (`Fall`, then
/// `Spring`); `Summer` appears in offering lists but never in the horizon,
/// so a summer-only course can legitimately end a run unplaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Fall semester (first primary term of an academic year).
    Fall,
    /// Spring semester (second primary term).
    Spring,
    /// Summer session. Offered-in only; not part of the planning horizon.
    Summer,
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Term::Fall => "Fall",
            Term::Spring => "Spring",
            Term::Summer => "Summer",
        };
        f.write_str(label)
    }
}

/// A course to be scheduled.
///
/// Carries everything the planner needs: credit value for packing under the
/// per-semester ceiling, offering terms for slot eligibility, and
/// prerequisite identifiers for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (e.g., "CSCI 1100").
    pub id: String,
    /// Human-readable course name.
    pub name: String,
    /// Credit value. Always positive.
    pub credits: u32,
    /// Terms in which the course is offered.
    pub terms_offered: Vec<Term>,
    /// Identifiers of prerequisite courses, in declaration order.
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Creates a new course.
    ///
    /// Validates upstream shape at construction: the identifier must be
    /// non-empty and the credit value positive.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
    ) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::EmptyIdentifier { entity: "course" });
        }
        if credits == 0 {
            return Err(ModelError::ZeroCredits { course_id: id });
        }
        Ok(Self {
            id,
            name: name.into(),
            credits,
            terms_offered: Vec::new(),
            prerequisites: Vec::new(),
        })
    }

    /// Adds an offering term.
    pub fn offered_in(mut self, term: Term) -> Self {
        self.terms_offered.push(term);
        self
    }

    /// Sets the full offering-term list.
    pub fn with_terms(mut self, terms: Vec<Term>) -> Self {
        self.terms_offered = terms;
        self
    }

    /// Adds a prerequisite course identifier.
    pub fn with_prerequisite(mut self, course_id: impl Into<String>) -> Self {
        self.prerequisites.push(course_id.into());
        self
    }

    /// Sets the full prerequisite list.
    pub fn with_prerequisites(mut self, course_ids: Vec<String>) -> Self {
        self.prerequisites = course_ids;
        self
    }

    /// Whether the course is offered in the given term.
    pub fn is_offered_in(&self, term: Term) -> bool {
        self.terms_offered.contains(&term)
    }

    /// Scarcity signal: the number of terms this course is offered in.
    ///
    /// Fewer offering terms means fewer chances to place the course, so
    /// scarcer courses are scheduled at their earliest legal opportunity.
    pub fn offering_count(&self) -> usize {
        self.terms_offered.len()
    }

    /// Whether this course declares any prerequisites.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
