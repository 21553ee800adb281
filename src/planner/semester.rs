//! Greedy fixed-horizon semester scheduler.
//!
//! # Algorithm
//!
//! 1. Resolve requirements into the required pool; seed prerequisite
//!    counters from completed courses.
//! 2. For each of the 8 slots (4 years × Fall/Spring): filter the pool for
//!    eligibility (offered this term, all prerequisites satisfied), order
//!    candidates via the rule engine, and greedily admit them left to right
//!    while the slot stays under the credit ceiling.
//! 3. Admitted courses leave the pool and satisfy their dependents; they
//!    become prerequisites-fulfilled for later slots only, never their own.
//! 4. Whatever survives the horizon is reported unmet.
//!
//! One pass, no look-ahead, no swapping, no reconsideration of skipped
//! courses within a slot. Identical inputs produce an identical schedule.

use std::collections::{HashMap, HashSet};

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::dispatching::{rules, PlanContext, RuleEngine, TieBreaker};
use crate::models::{
    CourseCatalog, PlanResult, Requirement, ScheduledCourse, SemesterSlot, Term, UnmetRequirement,
};
use crate::prereq::PrereqTracker;
use crate::resolver::{resolve_required_pool, RequiredPool};

/// Standard maximum credit load per semester.
pub const DEFAULT_CREDIT_CEILING: u32 = 16;

/// Number of academic years in the planning horizon.
pub const DEFAULT_PLAN_YEARS: u32 = 4;

/// The two primary terms of each academic year, in horizon order.
pub const PRIMARY_TERMS: [Term; 2] = [Term::Fall, Term::Spring];

/// Fixed diagnostic for courses that survive the horizon unplaced. The
/// algorithm does not distinguish which constraint applied.
const UNMET_REASON: &str =
    "Could not be scheduled due to timing, prerequisites, or credit limits.";

/// Input container for a planning run.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Requirements for the student's selected programs.
    pub requirements: Vec<Requirement>,
    /// The complete course catalog.
    pub catalog: CourseCatalog,
    /// Courses the student has already satisfied.
    pub completed_course_ids: Vec<String>,
    /// First calendar year of the plan.
    pub start_year: i32,
}

impl PlanRequest {
    /// Creates a new plan request.
    pub fn new(
        requirements: Vec<Requirement>,
        catalog: impl Into<CourseCatalog>,
        start_year: i32,
    ) -> Self {
        Self {
            requirements,
            catalog: catalog.into(),
            completed_course_ids: Vec::new(),
            start_year,
        }
    }

    /// Sets the completed course identifiers.
    pub fn with_completed(mut self, course_ids: Vec<String>) -> Self {
        self.completed_course_ids = course_ids;
        self
    }
}

/// Run-local mutable state, owned by exactly one `generate` invocation.
///
/// Threading one context object through the slot loop keeps all mutation in
/// a single place; nothing here aliases caller-owned data.
struct PlannerRun {
    pool: RequiredPool,
    tracker: PrereqTracker,
    slots: Vec<SemesterSlot>,
}

/// Greedy fixed-horizon semester planner.
///
/// Defaults: scarcity-first ordering with lexicographic course-ID
/// tie-breaking, a 16-credit ceiling, and a 4-year horizon.
///
/// # Example
///
/// ```
/// use degree_plan::models::{Course, Requirement, Term};
/// use degree_plan::planner::{PlanRequest, SemesterPlanner};
///
/// let catalog = vec![Course::new("CSCI 1100", "CS I", 4)
///     .unwrap()
///     .offered_in(Term::Fall)];
/// let requirements = vec![Requirement::new("R1", "P1")
///     .unwrap()
///     .with_option("CSCI 1100")];
/// let request = PlanRequest::new(requirements, catalog, 2024);
///
/// let plan = SemesterPlanner::new().generate(&request);
/// assert_eq!(plan.schedule.len(), 8);
/// assert!(plan.is_fully_scheduled());
/// ```
#[derive(Debug, Clone)]
pub struct SemesterPlanner {
    rule_engine: RuleEngine,
    credit_ceiling: u32,
    years: u32,
}

impl SemesterPlanner {
    /// Creates a planner with default ordering, ceiling, and horizon.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::new()
                .with_rule(rules::Scarcity)
                .with_final_tie_breaker(TieBreaker::ById),
            credit_ceiling: DEFAULT_CREDIT_CEILING,
            years: DEFAULT_PLAN_YEARS,
        }
    }

    /// Replaces the candidate-ordering rule engine.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Sets the per-semester credit ceiling.
    pub fn with_credit_ceiling(mut self, ceiling: u32) -> Self {
        self.credit_ceiling = ceiling;
        self
    }

    /// Sets the number of academic years in the horizon.
    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    /// Generates a plan.
    ///
    /// Total over its input domain: always returns a `PlanResult`, with
    /// unplaceable courses reported in `unmet_requirements` rather than as
    /// an error. Caller-owned catalog and requirement records are read-only.
    pub fn generate(&self, request: &PlanRequest) -> PlanResult {
        let completed: HashSet<String> =
            request.completed_course_ids.iter().cloned().collect();

        let mut run = PlannerRun {
            pool: resolve_required_pool(&request.requirements, &request.catalog, &completed),
            tracker: PrereqTracker::from_catalog(&request.catalog),
            slots: Vec::with_capacity((self.years as usize) * PRIMARY_TERMS.len()),
        };

        // Pre-seed: prerequisites satisfied before the horizon begins.
        // Repeated ids collapse in the set above; only catalog-known courses
        // unlock dependents.
        for course_id in &completed {
            if request.catalog.contains(course_id) {
                run.tracker.satisfy(course_id);
            }
        }

        let unlock_counts: HashMap<String, usize> = request
            .catalog
            .courses()
            .iter()
            .map(|c| (c.id.clone(), run.tracker.dependents_of(&c.id).len()))
            .collect();

        let mut slot_index = 0;
        for year_offset in 0..self.years {
            let year = request.start_year + year_offset as i32;
            for term in PRIMARY_TERMS {
                let slot =
                    self.fill_slot(&request.catalog, &mut run, year, term, slot_index, &unlock_counts);
                debug!(
                    year,
                    term = %term,
                    admitted = slot.course_count(),
                    credits = slot.credits,
                    remaining = run.pool.len(),
                    "filled semester slot"
                );
                run.slots.push(slot);
                slot_index += 1;
            }
        }

        assemble_result(run)
    }

    /// Fills one slot: eligibility filter, rule ordering, greedy packing,
    /// then pool/tracker updates for everything admitted.
    fn fill_slot(
        &self,
        catalog: &CourseCatalog,
        run: &mut PlannerRun,
        year: i32,
        term: Term,
        slot_index: usize,
        unlock_counts: &HashMap<String, usize>,
    ) -> SemesterSlot {
        let mut slot = SemesterSlot::new(year, term);

        let candidates: Vec<_> = run
            .pool
            .ids()
            .iter()
            .filter_map(|id| catalog.get(id))
            .filter(|c| c.is_offered_in(term) && run.tracker.is_eligible(&c.id))
            .collect();

        let context = PlanContext::for_slot(term, slot_index, year)
            .with_unlock_counts(unlock_counts.clone());
        let order = self.rule_engine.sort_indices(&candidates, &context);

        let mut admitted: Vec<String> = Vec::new();
        for idx in order {
            let course = candidates[idx];
            if slot.fits(course.credits, self.credit_ceiling) {
                slot.admit(ScheduledCourse {
                    id: course.id.clone(),
                    name: course.name.clone(),
                    credits: course.credits,
                });
                admitted.push(course.id.clone());
            }
        }

        // Dependents become eligible in later slots only: the eligibility
        // filter above ran before any of this slot's satisfactions.
        for course_id in &admitted {
            run.pool.remove(course_id);
            run.tracker.satisfy(course_id);
        }

        slot
    }
}

impl Default for SemesterPlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts the final slot sequence and residual pool into the result
/// structure. Performs no I/O and cannot fail.
fn assemble_result(run: PlannerRun) -> PlanResult {
    let unmet_requirements: Vec<UnmetRequirement> = run
        .pool
        .into_ids()
        .into_iter()
        .map(|course_id| UnmetRequirement {
            course_id,
            reason: UNMET_REASON.to_string(),
        })
        .collect();

    let message = format!(
        "Plan generated successfully, with {} requirements left unmet.",
        unmet_requirements.len()
    );

    PlanResult {
        schedule: run.slots,
        unmet_requirements,
        message,
        plan_timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
