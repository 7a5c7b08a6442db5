/*
    This module derives random valid sentences from a grammar
*/

use rand::prelude::*;

use crate::case::{CaseKind, TestCase};
use crate::grammar::{Grammar, EPSILON};

// The product of expanding one symbol: the concatenated terminal text and
// a preorder listing of the production applications used
#[derive(Debug, PartialEq)]
pub struct Derivation {
    pub expression: String,
    pub trace: Vec<String>,
}

// Expands `symbol` iteratively with a work stack of (symbol, depth) pairs.
// A subtree past `max_depth`, an undefined reference and an empty rewrite
// all contribute nothing.
pub fn derive_from(
    grammar: &Grammar,
    symbol: &str,
    max_depth: usize,
    rng: &mut impl Rng,
) -> Derivation {
    let mut expression = String::new();
    let mut trace = Vec::new();
    let mut pending = vec![(symbol.to_string(), 0)];

    while let Some((symbol, depth)) = pending.pop() {
        if depth > max_depth {
            continue;
        }

        // Misclassified forward references sit in `terminals` as well as in
        // `productions`; the terminal reading wins
        if grammar.terminals.contains(&symbol) {
            expression.push_str(&symbol);
            trace.push(symbol);
            continue;
        }

        let Some(alternatives) = grammar.productions.get(&symbol) else {
            continue;
        };
        let Some(alternative) = alternatives.choose(rng) else {
            continue;
        };

        trace.push(format!("{} -> {}", symbol, alternative.join(" ")));

        // Reversed so the leftmost symbol is expanded first
        for token in alternative.iter().rev() {
            if token != EPSILON {
                pending.push((token.clone(), depth + 1));
            }
        }
    }

    return Derivation { expression, trace };
}

// Derives `count` cases from the start symbol, with ids 1..=count scoped
// to this batch
pub fn generate_valid(
    grammar: &Grammar,
    count: usize,
    max_depth: usize,
    rng: &mut impl Rng,
) -> Vec<TestCase> {
    (1..=count)
        .map(|id| {
            let derived = derive_from(grammar, &grammar.start, max_depth, rng);
            TestCase {
                id,
                kind: CaseKind::Valid,
                expression: derived.expression,
                derivation: Some(derived.trace),
                mutation: None,
            }
        })
        .collect()
}
