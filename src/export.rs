/*
    This module serializes a batch and its metrics to JSON
*/

use serde::{Deserialize, Serialize};

use crate::case::TestCase;
use crate::metrics::Metrics;

// The document shape consumers read back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub cases: Vec<TestCase>,
    pub metrics: Metrics,
}

pub fn to_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{CaseKind, Mutation};
    use std::collections::BTreeMap;

    fn sample_report() -> Report {
        let cases = vec![
            TestCase {
                id: 1,
                kind: CaseKind::Valid,
                expression: "test".to_string(),
                derivation: Some(vec!["S -> test".to_string()]),
                mutation: None,
            },
            TestCase {
                id: 2,
                kind: CaseKind::Invalid,
                expression: "tes".to_string(),
                derivation: None,
                mutation: Some(Mutation::Delete),
            },
        ];
        let metrics = Metrics {
            total_generated: 2,
            valid_count: 1,
            invalid_count: 1,
            extreme_count: 0,
            valid_percentage: 50.0,
            invalid_percentage: 50.0,
            extreme_percentage: 0.0,
            avg_length: 3.5,
            max_depth: 1,
            operator_counts: BTreeMap::from([("+".to_string(), 0)]),
            mutation_levels: BTreeMap::from([("delete".to_string(), 1)]),
            avg_execution_time: 5.0,
        };
        Report { cases, metrics }
    }

    #[test]
    fn round_trips_through_json() {
        let report = sample_report();
        let json = to_json(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.cases.len(), report.cases.len());
        assert_eq!(parsed.metrics.total_generated, report.metrics.total_generated);
        assert_eq!(parsed, report);
    }

    #[test]
    fn uses_wire_format_field_names() {
        let json = to_json(&sample_report()).unwrap();

        assert!(json.contains("\"type\": \"valid\""));
        assert!(json.contains("\"mutation\": \"delete\""));
        assert!(json.contains("\"totalGenerated\""));
        assert!(json.contains("\"avgExecutionTime\""));
        assert!(json.contains("\"mutationLevels\""));
    }

    #[test]
    fn omits_absent_optional_fields() {
        let report = Report {
            cases: vec![TestCase {
                id: 1,
                kind: CaseKind::Extreme,
                expression: "aaaa".to_string(),
                derivation: None,
                mutation: None,
            }],
            metrics: crate::metrics::calculate(&[]),
        };
        let json = to_json(&report).unwrap();

        assert!(!json.contains("\"derivation\""));
        assert!(!json.contains("\"mutation\""));
    }

    #[test]
    fn output_is_pretty_printed() {
        let json = to_json(&sample_report()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.starts_with('{'));
    }
}
