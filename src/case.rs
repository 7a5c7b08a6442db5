/*
    This module holds the shapes shared by the generators, the metrics
    pass and the exporter
*/

use std::fmt::Display;

use serde::{Deserialize, Serialize};

// Which generator produced a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
    Valid,
    Invalid,
    Extreme,
}

// The single structural edit applied to a valid expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mutation {
    Delete,
    Insert,
    Swap,
    Duplicate,
}

impl Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mutation::Delete => write!(f, "delete"),
            Mutation::Insert => write!(f, "insert"),
            Mutation::Swap => write!(f, "swap"),
            Mutation::Duplicate => write!(f, "duplicate"),
        }
    }
}

// One generated input for the parser under test. Ids are only unique
// within the batch that produced the case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: CaseKind,
    pub expression: String,
    // Preorder production trace, valid cases only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivation: Option<Vec<String>>,
    // The edit that produced the case, invalid cases only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutation: Option<Mutation>,
}
