//! Runs the rule catalog and the payment check over normalized text

use shared_types::Flag;

use crate::catalog::{RuleGroup, RULE_CATALOG};
use crate::rules::payment::{check_payment_terms, PAYMENT_WEIGHT};

/// Highest possible risk score
pub const MAX_RISK_SCORE: u32 = 100;

/// Flags and score for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub red_flags: Vec<Flag>,
    pub risk_score: u32,
}

/// Evaluates lowercased text against the shared catalog
pub fn evaluate(normalized: &str) -> Evaluation {
    evaluate_with(&RULE_CATALOG, normalized)
}

/// Evaluates lowercased text against an arbitrary ordered catalog
///
/// Catalog groups are reported in order, followed by the payment flag.
pub fn evaluate_with(catalog: &[RuleGroup], normalized: &str) -> Evaluation {
    let mut red_flags = Vec::new();
    let mut risk_points: u32 = 0;

    for group in catalog {
        if group.first_match(normalized).is_some() {
            red_flags.push(group.to_flag());
            risk_points += group.weight;
        }
    }

    if let Some(flag) = check_payment_terms(normalized) {
        red_flags.push(flag);
        risk_points += PAYMENT_WEIGHT;
    }

    Evaluation {
        red_flags,
        risk_score: risk_points.min(MAX_RISK_SCORE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Severity;

    fn titles(evaluation: &Evaluation) -> Vec<&str> {
        evaluation
            .red_flags
            .iter()
            .map(|f| f.title.as_str())
            .collect()
    }

    #[test]
    fn test_clean_text_scores_zero() {
        let evaluation = evaluate("the parties agree to cooperate in good faith.");
        assert!(evaluation.red_flags.is_empty());
        assert_eq!(evaluation.risk_score, 0);
    }

    #[test]
    fn test_indemnity_scenario() {
        let evaluation = evaluate(
            "the contractor shall indemnify and hold harmless the client against all claims.",
        );
        assert_eq!(titles(&evaluation), vec!["Broad Indemnity Clause"]);
        assert_eq!(evaluation.red_flags[0].severity, Severity::High);
        assert_eq!(evaluation.risk_score, 25);
    }

    #[test]
    fn test_group_fires_once_even_with_many_matches() {
        let evaluation = evaluate("non-compete. non compete. shall not compete. restrictive covenant.");
        assert_eq!(titles(&evaluation), vec!["Non-Compete Clause"]);
        assert_eq!(evaluation.risk_score, 20);
    }

    #[test]
    fn test_flags_follow_catalog_order() {
        let evaluation =
            evaluate("contractor signs a non-compete and accepts unlimited liability.");
        assert_eq!(
            titles(&evaluation),
            vec!["Unlimited Liability", "Non-Compete Clause"]
        );
        assert_eq!(evaluation.risk_score, 45);
    }

    #[test]
    fn test_payment_flag_comes_last() {
        let evaluation = evaluate("payable net 60.\nthis agreement shall automatically renew.");
        assert_eq!(
            titles(&evaluation),
            vec!["Automatic Renewal", "Unfavorable Payment Terms"]
        );
        assert_eq!(evaluation.risk_score, 20);
    }

    #[test]
    fn test_score_is_capped() {
        let text = "unlimited liability\nhold harmless\nnon-compete\nwork for hire\n\
                    automatic renewal\nclient may terminate without cause\nnet 90";
        let evaluation = evaluate(text);
        assert_eq!(evaluation.red_flags.len(), 7);
        // 25 + 25 + 20 + 15 + 10 + 15 + 10 = 120
        assert_eq!(evaluation.risk_score, MAX_RISK_SCORE);
    }

    #[test]
    fn test_custom_catalog_is_respected() {
        let evaluation = evaluate_with(&RULE_CATALOG[4..5], "hold harmless, automatic renewal");
        assert_eq!(titles(&evaluation), vec!["Automatic Renewal"]);
        assert_eq!(evaluation.risk_score, 10);
    }
}
