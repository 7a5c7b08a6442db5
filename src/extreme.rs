/*
    This module assembles degenerate long expressions by stacking
    independent derivations
*/

use rand::Rng;

use crate::case::{CaseKind, TestCase};
use crate::generator::derive_from;
use crate::grammar::Grammar;

// Derivation attempts per case before giving up on the target length
const MAX_ATTEMPTS: usize = 100;

// Each case is built from fresh derivations of the start symbol, appended
// until `max_length` characters are reached or the attempts run out, then
// truncated to at most `max_length` characters. Terminating grammars can
// leave shorter results.
pub fn generate_extreme(
    grammar: &Grammar,
    count: usize,
    max_depth: usize,
    max_length: usize,
    rng: &mut impl Rng,
) -> Vec<TestCase> {
    (1..=count)
        .map(|id| {
            let mut expression = String::new();
            let mut length = 0;
            let mut attempts = 0;
            while length < max_length && attempts < MAX_ATTEMPTS {
                let derived = derive_from(grammar, &grammar.start, max_depth, rng);
                length += derived.expression.chars().count();
                expression.push_str(&derived.expression);
                attempts += 1;
            }

            // Truncation counts characters, not bytes
            if length > max_length {
                expression = expression.chars().take(max_length).collect();
            }

            TestCase {
                id,
                kind: CaseKind::Extreme,
                expression,
                derivation: None,
                mutation: None,
            }
        })
        .collect()
}
