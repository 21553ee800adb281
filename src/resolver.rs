//! Requirement resolution.
//!
//! Two layers live here. The outer layer is the data-access collaborator
//! boundary: turning a student's program selection into requirement records
//! and a catalog, which is the only step that can fail hard. The inner
//! layer is pure: flattening requirement options pools into the working set
//! of course identifiers still needing placement.

use std::collections::HashSet;

use tracing::debug;

use crate::error::PlanError;
use crate::models::{Course, CourseCatalog, Program, Requirement};

/// The programs a student is pursuing.
///
/// Any subset of the three selections may be present; empty entries are
/// ignored during resolution.
#[derive(Debug, Clone, Default)]
pub struct ProgramSelection {
    /// Major program name.
    pub major: Option<String>,
    /// Minor program name.
    pub minor: Option<String>,
    /// Concentration name.
    pub concentration: Option<String>,
}

impl ProgramSelection {
    /// Creates a selection with just a major.
    pub fn major(name: impl Into<String>) -> Self {
        Self {
            major: Some(name.into()),
            ..Default::default()
        }
    }

    /// Sets the minor.
    pub fn with_minor(mut self, name: impl Into<String>) -> Self {
        self.minor = Some(name.into());
        self
    }

    /// Sets the concentration.
    pub fn with_concentration(mut self, name: impl Into<String>) -> Self {
        self.concentration = Some(name.into());
        self
    }

    /// The selected program names, in major/minor/concentration order.
    pub fn names(&self) -> Vec<&str> {
        [&self.major, &self.minor, &self.concentration]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

/// What the data-access layer hands the planner: the requirements for the
/// selected programs plus the complete course catalog.
#[derive(Debug, Clone)]
pub struct ResolvedRequirements {
    /// Requirements linked to the selected programs.
    pub requirements: Vec<Requirement>,
    /// The full course catalog.
    pub catalog: CourseCatalog,
}

/// The upstream data-access collaborator.
///
/// Implementations turn stored program/course rows into in-memory
/// structures. Resolution must fail with
/// [`PlanError::NoMatchingPrograms`] when the selection matches zero known
/// programs; backend unavailability surfaces as [`PlanError::DataSource`].
pub trait RequirementSource {
    /// Resolves a program selection into requirements and a catalog.
    fn resolve(&self, selection: &ProgramSelection) -> Result<ResolvedRequirements, PlanError>;
}

/// A `RequirementSource` over data already resident in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    programs: Vec<Program>,
    requirements: Vec<Requirement>,
    courses: Vec<Course>,
}

impl InMemorySource {
    /// Creates a source from programs, their requirements, and a catalog.
    pub fn new(programs: Vec<Program>, requirements: Vec<Requirement>, courses: Vec<Course>) -> Self {
        Self {
            programs,
            requirements,
            courses,
        }
    }
}

impl RequirementSource for InMemorySource {
    fn resolve(&self, selection: &ProgramSelection) -> Result<ResolvedRequirements, PlanError> {
        let names = selection.names();
        let matched: Vec<&Program> = self
            .programs
            .iter()
            .filter(|p| names.contains(&p.name.as_str()))
            .collect();

        if matched.is_empty() {
            return Err(PlanError::NoMatchingPrograms {
                selection: names.into_iter().map(String::from).collect(),
            });
        }

        let matched_ids: HashSet<&str> = matched.iter().map(|p| p.id.as_str()).collect();
        let requirements = self
            .requirements
            .iter()
            .filter(|r| matched_ids.contains(r.program_id.as_str()))
            .cloned()
            .collect();

        Ok(ResolvedRequirements {
            requirements,
            catalog: CourseCatalog::new(self.courses.clone()),
        })
    }
}

/// The working set of course identifiers still needing placement.
///
/// Set semantics with a deterministic first-mention iteration order; after
/// resolution the pool only ever shrinks — a scheduled course never
/// re-enters.
#[derive(Debug, Clone, Default)]
pub struct RequiredPool {
    ids: Vec<String>,
    members: HashSet<String>,
}

impl RequiredPool {
    fn insert(&mut self, course_id: &str) -> bool {
        if self.members.insert(course_id.to_string()) {
            self.ids.push(course_id.to_string());
            true
        } else {
            false
        }
    }

    /// Removes a course from the pool. No-op if absent.
    pub fn remove(&mut self, course_id: &str) {
        if self.members.remove(course_id) {
            self.ids.retain(|id| id != course_id);
        }
    }

    /// Whether the pool still contains the course.
    pub fn contains(&self, course_id: &str) -> bool {
        self.members.contains(course_id)
    }

    /// Pool members in first-mention order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of courses remaining.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing remains to schedule.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Consumes the pool, yielding the remaining identifiers in order.
    pub fn into_ids(self) -> Vec<String> {
        self.ids
    }
}

/// Flattens requirement options pools into a [`RequiredPool`].
///
/// Includes every option identifier the catalog knows (the catalog is
/// authoritative — unknown identifiers are dropped), collapses duplicates
/// across requirements, and removes already-completed courses. An empty
/// result is valid: nothing left to schedule.
pub fn resolve_required_pool(
    requirements: &[Requirement],
    catalog: &CourseCatalog,
    completed: &HashSet<String>,
) -> RequiredPool {
    let mut pool = RequiredPool::default();

    for requirement in requirements {
        for course_id in &requirement.options_pool {
            if !catalog.contains(course_id) {
                debug!(
                    requirement = %requirement.id,
                    course_id = %course_id,
                    "dropping option unknown to the catalog"
                );
                continue;
            }
            if completed.contains(course_id) {
                continue;
            }
            pool.insert(course_id);
        }
    }

    pool
}
