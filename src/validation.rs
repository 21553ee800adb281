//! Input validation for planning problems.
//!
//! Checks structural integrity of requirements and the course catalog
//! before planning. Detects:
//! - Duplicate IDs
//! - Empty or dangling options pools
//! - Unknown or duplicated prerequisite references
//! - Courses offered in no term
//! - Circular prerequisite dependencies (DAG validation)
//!
//! The planner itself tolerates all of these (unknown references simply
//! leave a course blocked, duplicates collapse); validation exists so a
//! caller can surface data problems instead of shipping a silently thin
//! plan.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use crate::models::{Course, Requirement};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A requirement's options pool is empty.
    EmptyRequirement,
    /// An options pool references a course that doesn't exist.
    UnknownOption,
    /// A course lists a prerequisite that doesn't exist.
    UnknownPrerequisite,
    /// A course lists the same prerequisite twice.
    DuplicatePrerequisite,
    /// A course is offered in no term and can never be placed.
    NeverOffered,
    /// Prerequisite graph contains a cycle.
    CyclicPrerequisite,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a planning problem.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. No duplicate requirement IDs
/// 3. Every requirement has a non-empty options pool
/// 4. All options-pool references point to existing courses
/// 5. All prerequisite references point to existing courses
/// 6. No prerequisite is listed twice by the same course
/// 7. Every course is offered in at least one term
/// 8. No circular prerequisite dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_inputs(requirements: &[Requirement], catalog: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect course IDs
    let mut course_ids = HashSet::new();
    for course in catalog {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }

        if course.terms_offered.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NeverOffered,
                format!("Course '{}' is offered in no term", course.id),
            ));
        }
    }

    // Requirement IDs and options pools
    let mut requirement_ids = HashSet::new();
    for req in requirements {
        if !requirement_ids.insert(req.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate requirement ID: {}", req.id),
            ));
        }

        if req.options_pool.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyRequirement,
                format!("Requirement '{}' has an empty options pool", req.id),
            ));
        }

        for option in &req.options_pool {
            if !course_ids.contains(option.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownOption,
                    format!(
                        "Requirement '{}' references unknown course '{}'",
                        req.id, option
                    ),
                ));
            }
        }
    }

    // Prerequisite references
    for course in catalog {
        let mut seen = HashSet::new();
        for prereq in &course.prerequisites {
            if !seen.insert(prereq.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicatePrerequisite,
                    format!(
                        "Course '{}' lists prerequisite '{}' more than once",
                        course.id, prereq
                    ),
                ));
            }
            if !course_ids.contains(prereq.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPrerequisite,
                    format!(
                        "Course '{}' references unknown prerequisite '{}'",
                        course.id, prereq
                    ),
                ));
            }
        }
    }

    // Check for cycles in the prerequisite graph (DFS-based)
    if let Some(cycle_err) = detect_cycles(catalog) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the prerequisite graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists.
///
/// # Reference
/// Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
fn detect_cycles(catalog: &[Course]) -> Option<ValidationError> {
    // Build adjacency list: prerequisite → dependents
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut all_ids: HashSet<&str> = HashSet::new();

    for course in catalog {
        all_ids.insert(&course.id);
        for prereq in &course.prerequisites {
            adj.entry(prereq.as_str()).or_default().push(course.id.as_str());
        }
    }

    // DFS cycle detection
    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &node in &all_ids {
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrerequisite,
                format!("Circular prerequisite dependency involving course '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Term;

    fn course(id: &str, prereqs: &[&str]) -> Course {
        Course::new(id, format!("{id} name"), 4)
            .unwrap()
            .offered_in(Term::Fall)
            .with_prerequisites(prereqs.iter().map(|s| s.to_string()).collect())
    }

    fn requirement(id: &str, options: &[&str]) -> Requirement {
        Requirement::new(id, "PROG")
            .unwrap()
            .with_options(options.iter().map(|s| s.to_string()).collect())
    }

    fn sample_catalog() -> Vec<Course> {
        vec![
            course("A", &[]),
            course("B", &["A"]),
            course("C", &["A", "B"]),
        ]
    }

    #[test]
    fn test_valid_input() {
        let requirements = vec![requirement("R1", &["A", "B", "C"])];
        assert!(validate_inputs(&requirements, &sample_catalog()).is_ok());
    }

    #[test]
    fn test_duplicate_course_id() {
        let catalog = vec![course("A", &[]), course("A", &[])];
        let errors = validate_inputs(&[], &catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("course")));
    }

    #[test]
    fn test_duplicate_requirement_id() {
        let requirements = vec![requirement("R1", &["A"]), requirement("R1", &["A"])];
        let errors = validate_inputs(&requirements, &sample_catalog()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId
                && e.message.contains("requirement")));
    }

    #[test]
    fn test_empty_requirement() {
        let requirements = vec![requirement("R1", &[])];
        let errors = validate_inputs(&requirements, &sample_catalog()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyRequirement));
    }

    #[test]
    fn test_unknown_option() {
        let requirements = vec![requirement("R1", &["A", "PHANTOM"])];
        let errors = validate_inputs(&requirements, &sample_catalog()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownOption
                && e.message.contains("PHANTOM")));
    }

    #[test]
    fn test_unknown_prerequisite() {
        let catalog = vec![course("X", &["GHOST"])];
        let errors = validate_inputs(&[], &catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownPrerequisite));
    }

    #[test]
    fn test_duplicate_prerequisite() {
        let catalog = vec![course("A", &[]), course("B", &["A", "A"])];
        let errors = validate_inputs(&[], &catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePrerequisite));
    }

    #[test]
    fn test_never_offered() {
        let never = Course::new("N", "Never offered", 4).unwrap();
        let errors = validate_inputs(&[], &[never]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NeverOffered));
    }

    #[test]
    fn test_cyclic_prerequisites() {
        // A → B → C → A
        let catalog = vec![
            course("A", &["C"]),
            course("B", &["A"]),
            course("C", &["B"]),
        ];
        let errors = validate_inputs(&[], &catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicPrerequisite));
    }

    #[test]
    fn test_no_cycle_in_chain() {
        // Linear chain is fine.
        assert!(validate_inputs(&[], &sample_catalog()).is_ok());
    }

    #[test]
    fn test_self_prerequisite_is_cycle() {
        let catalog = vec![course("A", &["A"])];
        let errors = validate_inputs(&[], &catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicPrerequisite));
    }

    #[test]
    fn test_multiple_errors() {
        let requirements = vec![requirement("R1", &[])];
        let catalog = vec![course("X", &["GHOST"])];
        let errors = validate_inputs(&requirements, &catalog).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
