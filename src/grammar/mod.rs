/*
    This module stores grammars and parses them from text
*/

use std::collections::{HashMap, HashSet};

// The literal token for an empty-producing alternative element. It is
// elided during derivation and never classified.
pub const EPSILON: &str = "ε";

// The symbols in a single alternative
pub type Alternative = Vec<String>;

// The alternatives of a rewrite rule
pub type Rewrite = Vec<Alternative>;

#[derive(Debug, PartialEq)]
pub struct Grammar {
    pub start: String,
    pub productions: HashMap<String, Rewrite>,
    pub terminals: HashSet<String>,
    pub nonterminals: HashSet<String>,
}

// Builds a grammar from line-oriented text of the shape
// `LHS -> ALT1 | ALT2`. Blank lines and `#` comments are ignored and
// malformed lines are skipped; nothing here fails.
pub fn parse(text: &str) -> Grammar {
    let mut start = String::new();
    let mut productions: HashMap<String, Rewrite> = HashMap::new();
    let mut terminals = HashSet::new();
    let mut nonterminals = HashSet::new();

    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    for line in lines {
        // Only the first two arrow-separated segments are honored; a line
        // with extra arrows loses everything past the second segment
        let mut segments = line.split("->");
        let lhs = segments.next().map(str::trim).unwrap_or("");
        let rhs = segments.next().map(str::trim).unwrap_or("");
        if lhs.is_empty() || rhs.is_empty() {
            continue;
        }

        if start.is_empty() {
            start = lhs.to_string();
        }
        nonterminals.insert(lhs.to_string());

        let alternatives: Rewrite = rhs
            .split('|')
            .map(|alternative| alternative.split_whitespace().map(str::to_string).collect())
            .collect();

        // Redefining a nonterminal replaces its earlier alternatives
        productions.insert(lhs.to_string(), alternatives);

        // Classification is incremental: a symbol referenced before its own
        // defining line stays in `terminals` for good
        for alternative in &productions[lhs] {
            for symbol in alternative {
                if symbol != EPSILON && !productions.contains_key(symbol) {
                    terminals.insert(symbol.clone());
                }
            }
        }
    }

    return Grammar {
        start,
        productions,
        terminals,
        nonterminals,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(text: &str) -> Alternative {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn parse_arithmetic_grammar() {
        let text = "
        S -> E
        E -> E + T | T
        T -> T * F | F
        F -> ( E ) | id
        ";
        let grammar = parse(text);

        assert_eq!(grammar.start, "S");
        for nonterminal in ["S", "E", "T", "F"] {
            assert!(grammar.nonterminals.contains(nonterminal));
        }
        for terminal in ["id", "(", ")", "+", "*"] {
            assert!(grammar.terminals.contains(terminal));
        }
        assert_eq!(grammar.productions["S"], vec![symbols("E")]);
        assert_eq!(grammar.productions["E"], vec![symbols("E + T"), symbols("T")]);
        assert_eq!(grammar.productions["T"], vec![symbols("T * F"), symbols("F")]);
        assert_eq!(grammar.productions["F"], vec![symbols("( E )"), symbols("id")]);
    }

    #[test]
    fn parse_comments_and_blank_lines() {
        let text = "
        # This is a comment
        S -> a

        E -> b
        ";
        let grammar = parse(text);

        assert_eq!(grammar.start, "S");
        assert_eq!(grammar.productions["S"], vec![symbols("a")]);
        assert_eq!(grammar.productions["E"], vec![symbols("b")]);
    }

    #[test]
    fn parse_keeps_first_start_symbol() {
        let grammar = parse("A -> x\nB -> y");
        assert_eq!(grammar.start, "A");
    }

    #[test]
    fn redefinition_replaces_alternatives() {
        let grammar = parse("S -> a | b\nS -> c");
        assert_eq!(grammar.productions["S"], vec![symbols("c")]);
    }

    #[test]
    fn extra_arrows_are_discarded() {
        let grammar = parse("S -> a -> b");
        assert_eq!(grammar.productions["S"], vec![symbols("a")]);
        assert!(!grammar.terminals.contains("b"));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let text = "
        ->
        S ->
        -> a
        no arrow here
        S -> a
        ";
        let grammar = parse(text);

        assert_eq!(grammar.start, "S");
        assert_eq!(grammar.productions.len(), 1);
        assert_eq!(grammar.productions["S"], vec![symbols("a")]);
    }

    #[test]
    fn parse_without_rules_yields_empty_grammar() {
        let grammar = parse("# nothing but comments\n\n");
        assert_eq!(grammar.start, "");
        assert!(grammar.productions.is_empty());
        assert!(grammar.terminals.is_empty());
        assert!(grammar.nonterminals.is_empty());
    }

    #[test]
    fn epsilon_is_stored_but_never_classified() {
        let grammar = parse("S -> a | ε");
        assert_eq!(grammar.productions["S"], vec![symbols("a"), symbols("ε")]);
        assert!(!grammar.terminals.contains(EPSILON));
        assert!(!grammar.nonterminals.contains(EPSILON));
    }

    #[test]
    fn forward_references_stay_terminals() {
        // E is referenced on the first line and only defined on the second,
        // so it is recorded as a terminal and stays one
        let grammar = parse("S -> E\nE -> x");
        assert!(grammar.terminals.contains("E"));
        assert!(grammar.nonterminals.contains("E"));
        assert!(grammar.productions.contains_key("E"));
    }

    #[test]
    fn self_reference_is_not_a_terminal() {
        let grammar = parse("S -> a | S + S");
        assert!(!grammar.terminals.contains("S"));
        assert!(grammar.terminals.contains("a"));
        assert!(grammar.terminals.contains("+"));
    }
}
