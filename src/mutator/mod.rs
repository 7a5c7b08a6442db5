/*
    This module perturbs valid expressions into putative invalid ones
*/

use rand::prelude::*;

use crate::case::{CaseKind, Mutation, TestCase};

// Characters the insert mutation may add
const OPERATORS: [char; 7] = ['+', '-', '*', '/', '%', '(', ')'];

// Applies exactly one edit, chosen by a single draw in [0, 1). The delete
// and swap buckets need at least two characters; when that precondition
// fails the draw falls through to the next branch in the chain, so
// single-character bases only ever see insert or duplicate.
pub fn mutate(expression: &str, rng: &mut impl Rng) -> (String, Mutation) {
    let mut chars: Vec<char> = expression.chars().collect();
    let draw: f64 = rng.gen();

    if draw < 0.3 && chars.len() > 1 {
        let index = rng.gen_range(0..chars.len());
        chars.remove(index);
        (chars.into_iter().collect(), Mutation::Delete)
    } else if draw < 0.6 {
        let index = rng.gen_range(0..=chars.len());
        let operator = OPERATORS[rng.gen_range(0..OPERATORS.len())];
        chars.insert(index, operator);
        (chars.into_iter().collect(), Mutation::Insert)
    } else if draw < 0.8 && chars.len() > 1 {
        let first = rng.gen_range(0..chars.len());
        let mut second = rng.gen_range(0..chars.len());
        while second == first {
            second = rng.gen_range(0..chars.len());
        }
        chars.swap(first, second);
        (chars.into_iter().collect(), Mutation::Swap)
    } else {
        // The copy lands immediately after the original occurrence.
        // Duplicating within an empty expression copies nothing.
        let start = if chars.is_empty() {
            0
        } else {
            rng.gen_range(0..chars.len())
        };
        let length = if chars.is_empty() {
            0
        } else {
            rng.gen_range(0..chars.len() - start) + 1
        };
        let copy: Vec<char> = chars[start..start + length].to_vec();
        chars.splice(start + length..start + length, copy);
        (chars.into_iter().collect(), Mutation::Duplicate)
    }
}

// Mutates `count` randomly picked bases from `valid_cases`, numbering ids
// onward from the end of the valid batch. An empty pool mutates the empty
// expression instead of failing.
pub fn generate_invalid(
    valid_cases: &[TestCase],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<TestCase> {
    (0..count)
        .map(|offset| {
            let base = valid_cases
                .choose(rng)
                .map(|case| case.expression.as_str())
                .unwrap_or("");
            let (expression, mutation) = mutate(base, rng);
            TestCase {
                id: valid_cases.len() + offset + 1,
                kind: CaseKind::Invalid,
                expression,
                derivation: None,
                mutation: Some(mutation),
            }
        })
        .collect()
}
