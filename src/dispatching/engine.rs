//! Rule engine for multi-criteria candidate ordering.
//!
//! Composes priority rules with configurable evaluation modes and
//! tie-breaking strategies. The engine is what makes a slot's admission
//! order fully deterministic: rules first, then an explicit final
//! tie-breaker instead of incidental input order.

use std::sync::Arc;

use super::{PlanContext, PriorityRule, RuleScore};
use crate::models::Course;

/// How multiple rules are combined.
#[derive(Debug, Clone, Default)]
pub enum EvaluationMode {
    /// Apply rules in sequence; use next rule only on ties.
    #[default]
    Sequential,
    /// Compute weighted sum of all rule scores.
    Weighted,
}

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Leave tied courses in their incoming (pool) order.
    #[default]
    NextRule,
    /// Deterministic by course ID (lexicographic).
    ById,
}

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn PriorityRule>,
    weight: f64,
}

/// A composable rule engine for course prioritization.
///
/// Supports sequential multi-layer evaluation (primary rule → tie-breaker)
/// and weighted combination modes.
///
/// # Example
/// ```
/// use degree_plan::dispatching::{RuleEngine, TieBreaker};
/// use degree_plan::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Scarcity)
///     .with_tie_breaker(rules::Unlocks)
///     .with_final_tie_breaker(TieBreaker::ById);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<WeightedRule>,
    mode: EvaluationMode,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            mode: EvaluationMode::Sequential,
            tie_breaker: TieBreaker::NextRule,
            epsilon: 1e-9,
        }
    }

    /// Adds a primary rule (weight 1.0).
    pub fn with_rule<R: PriorityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight: 1.0,
        });
        self
    }

    /// Adds a weighted rule.
    pub fn with_weighted_rule<R: PriorityRule + 'static>(mut self, rule: R, weight: f64) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Adds a tie-breaking rule (weight 0.0, used only in Sequential mode).
    pub fn with_tie_breaker<R: PriorityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight: 0.0,
        });
        self
    }

    /// Sets the evaluation mode.
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sorts courses by priority (highest priority first).
    ///
    /// Returns indices into the original slice. The sort is stable, so with
    /// [`TieBreaker::NextRule`] fully tied courses keep their input order.
    pub fn sort_indices(&self, courses: &[&Course], context: &PlanContext) -> Vec<usize> {
        if courses.is_empty() {
            return Vec::new();
        }

        let mut indices: Vec<usize> = (0..courses.len()).collect();

        match &self.mode {
            EvaluationMode::Sequential => {
                indices
                    .sort_by(|&a, &b| self.compare_sequential(courses[a], courses[b], context));
            }
            EvaluationMode::Weighted => {
                let scores: Vec<f64> = courses
                    .iter()
                    .map(|c| self.weighted_score(c, context))
                    .collect();
                indices.sort_by(|&a, &b| {
                    scores[a]
                        .partial_cmp(&scores[b])
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
        }

        indices
    }

    /// Returns the index of the highest-priority course.
    pub fn select_best(&self, courses: &[&Course], context: &PlanContext) -> Option<usize> {
        self.sort_indices(courses, context).first().copied()
    }

    /// Evaluates a single course and returns scores from each rule.
    pub fn evaluate(&self, course: &Course, context: &PlanContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(course, context) * wr.weight)
            .collect()
    }

    fn compare_sequential(
        &self,
        a: &Course,
        b: &Course,
        context: &PlanContext,
    ) -> std::cmp::Ordering {
        for wr in &self.rules {
            let score_a = wr.rule.evaluate(a, context);
            let score_b = wr.rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal);
            }
        }

        // All rules tied → use final tie-breaker
        match &self.tie_breaker {
            TieBreaker::NextRule => std::cmp::Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }

    fn weighted_score(&self, course: &Course, context: &PlanContext) -> f64 {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(course, context) * wr.weight)
            .sum()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .field("mode", &self.mode)
            .finish()
    }
}
