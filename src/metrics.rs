/*
    This module aggregates descriptive statistics over a batch of cases
*/

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::case::{CaseKind, TestCase};

// Operators counted across the pooled expressions
const COUNTED_OPERATORS: [&str; 5] = ["+", "-", "*", "/", "%"];

// A snapshot aggregate over one batch. `avg_execution_time` is a
// pass-through the caller fills in from its own timing; `calculate`
// leaves it at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_generated: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub extreme_count: usize,
    pub valid_percentage: f64,
    pub invalid_percentage: f64,
    pub extreme_percentage: f64,
    pub avg_length: f64,
    pub max_depth: usize,
    pub operator_counts: BTreeMap<String, usize>,
    pub mutation_levels: BTreeMap<String, usize>,
    pub avg_execution_time: f64,
}

fn percentage(count: usize, total: usize) -> f64 {
    count as f64 / total as f64 * 100.0
}

// Pure aggregation over `cases`. An empty batch has no meaningful ratios:
// the percentages and the average length come out NaN.
pub fn calculate(cases: &[TestCase]) -> Metrics {
    let total = cases.len();
    let count_of =
        |kind: CaseKind| cases.iter().filter(|case| case.kind == kind).count();
    let valid_count = count_of(CaseKind::Valid);
    let invalid_count = count_of(CaseKind::Invalid);
    let extreme_count = count_of(CaseKind::Extreme);

    let length_sum: usize = cases
        .iter()
        .map(|case| case.expression.chars().count())
        .sum();

    let max_depth = cases
        .iter()
        .filter_map(|case| case.derivation.as_ref())
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let operator_counts = COUNTED_OPERATORS
        .iter()
        .map(|operator| {
            let occurrences = cases
                .iter()
                .map(|case| case.expression.matches(operator).count())
                .sum();
            (operator.to_string(), occurrences)
        })
        .collect();

    let mutation_levels = cases
        .iter()
        .filter_map(|case| case.mutation)
        .counts()
        .into_iter()
        .map(|(mutation, count)| (mutation.to_string(), count))
        .collect();

    Metrics {
        total_generated: total,
        valid_count,
        invalid_count,
        extreme_count,
        valid_percentage: percentage(valid_count, total),
        invalid_percentage: percentage(invalid_count, total),
        extreme_percentage: percentage(extreme_count, total),
        avg_length: length_sum as f64 / total as f64,
        max_depth,
        operator_counts,
        mutation_levels,
        avg_execution_time: 0.0,
    }
}
