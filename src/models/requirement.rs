//! Program and requirement models.
//!
//! A program is something a student pursues (major, minor, concentration).
//! A requirement belongs to one program and carries an options pool: the
//! course identifiers that can satisfy it. Multiple requirements may
//! reference overlapping courses; the resolver collapses the overlap.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An academic program (major, minor, or concentration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Unique program identifier.
    pub id: String,
    /// Program name as selected by the student (e.g., "Computer Science").
    pub name: String,
}

impl Program {
    /// Creates a new program.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::EmptyIdentifier { entity: "program" });
        }
        Ok(Self {
            id,
            name: name.into(),
        })
    }
}

/// A single degree requirement.
///
/// The options pool lists every course identifier that satisfies this
/// requirement. Pool membership is set-based downstream: a course shared by
/// two requirements is only ever scheduled once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Unique requirement identifier.
    pub id: String,
    /// The program this requirement belongs to.
    pub program_id: String,
    /// Human-readable requirement name (e.g., "CS Core").
    pub name: String,
    /// Course identifiers that can satisfy this requirement.
    pub options_pool: Vec<String>,
}

impl Requirement {
    /// Creates a new requirement for a program.
    pub fn new(
        id: impl Into<String>,
        program_id: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::EmptyIdentifier {
                entity: "requirement",
            });
        }
        let program_id = program_id.into();
        if program_id.trim().is_empty() {
            return Err(ModelError::EmptyIdentifier { entity: "program" });
        }
        Ok(Self {
            id,
            program_id,
            name: String::new(),
            options_pool: Vec::new(),
        })
    }

    /// Sets the requirement name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a course identifier to the options pool.
    pub fn with_option(mut self, course_id: impl Into<String>) -> Self {
        self.options_pool.push(course_id.into());
        self
    }

    /// Sets the full options pool.
    pub fn with_options(mut self, course_ids: Vec<String>) -> Self {
        self.options_pool = course_ids;
        self
    }
}
