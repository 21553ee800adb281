//! Course catalog: the read-only lookup the planner runs against.
//!
//! The catalog owns its courses and indexes them by identifier while
//! preserving input order. Deterministic iteration order is what makes a
//! planning run reproducible, so the index never reorders.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Course;

/// The complete set of known courses, indexed by identifier.
///
/// Duplicate identifiers keep the first occurrence; duplicates are reported
/// by [`crate::validation::validate_inputs`], not silently merged here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseCatalog {
    courses: Vec<Course>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl CourseCatalog {
    /// Builds a catalog from a list of courses, preserving input order.
    pub fn new(courses: Vec<Course>) -> Self {
        let mut index = HashMap::with_capacity(courses.len());
        for (pos, course) in courses.iter().enumerate() {
            index.entry(course.id.clone()).or_insert(pos);
        }
        Self { courses, index }
    }

    /// Looks up a course by identifier.
    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.index.get(course_id).map(|&pos| &self.courses[pos])
    }

    /// Whether the catalog knows the given identifier.
    pub fn contains(&self, course_id: &str) -> bool {
        self.index.contains_key(course_id)
    }

    /// All courses, in input order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of distinct course identifiers.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl From<Vec<Course>> for CourseCatalog {
    fn from(courses: Vec<Course>) -> Self {
        Self::new(courses)
    }
}

impl<'de> Deserialize<'de> for CourseCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            courses: Vec<Course>,
        }
        Ok(Self::new(Raw::deserialize(deserializer)?.courses))
    }
}
