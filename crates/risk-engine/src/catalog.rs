//! The fixed rule catalog
//!
//! Groups are listed in the order their flags appear in a report. Each group
//! fires at most once per document: its patterns are tried in order and the
//! first one that matches anywhere in the lowercased text decides it.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Flag, Severity};

/// A named category of contract risk with equivalent detection patterns
#[derive(Debug)]
pub struct RuleGroup {
    pub name: &'static str,
    pub severity: Severity,
    pub patterns: Vec<Regex>,
    pub explanation: &'static str,
    pub negotiation_tip: &'static str,
    pub weight: u32,
}

impl RuleGroup {
    fn new(
        name: &'static str,
        severity: Severity,
        patterns: &[&str],
        explanation: &'static str,
        negotiation_tip: &'static str,
        weight: u32,
    ) -> Self {
        Self {
            name,
            severity,
            patterns: patterns.iter().map(|p| Regex::new(p).unwrap()).collect(),
            explanation,
            negotiation_tip,
            weight,
        }
    }

    /// First pattern (in catalog order) found in `text`
    pub fn first_match(&self, text: &str) -> Option<&Regex> {
        self.patterns.iter().find(|pattern| pattern.is_match(text))
    }

    pub fn to_flag(&self) -> Flag {
        Flag {
            title: self.name.to_string(),
            severity: self.severity,
            explanation: self.explanation.to_string(),
            negotiation_tip: self.negotiation_tip.to_string(),
        }
    }
}

lazy_static! {
    /// Shared, read-only catalog compiled once per process
    pub static ref RULE_CATALOG: Vec<RuleGroup> = vec![
        RuleGroup::new(
            "Unlimited Liability",
            Severity::High,
            &[
                r"unlimited liability",
                r"without limitation",
                r"shall be liable for all",
                r"indemnify.*without limit",
                r"liability shall not be capped",
            ],
            "This contract contains clauses that expose you to unlimited financial liability. \
             This means there's no cap on the amount you could be required to pay in case of \
             disputes or damages.",
            "Request a liability cap that's reasonable for the project scope, typically 1-2x \
             the contract value.",
            25,
        ),
        RuleGroup::new(
            "Broad Indemnity Clause",
            Severity::High,
            &[
                r"indemnify.*harmless",
                r"hold harmless",
                r"indemnify.*against all claims",
                r"indemnification.*any and all",
                r"defend.*indemnify.*hold harmless",
            ],
            "You're required to protect the client from all claims, damages, and losses - even \
             those not caused by you. This could make you responsible for the client's own \
             mistakes.",
            "Limit indemnification to claims directly arising from your negligence or breach \
             of contract. Request mutual indemnification.",
            25,
        ),
        RuleGroup::new(
            "Non-Compete Clause",
            Severity::Medium,
            &[
                r"non-compete",
                r"non compete",
                r"shall not compete",
                r"agree not to.*compete",
                r"competitive.*business",
                r"restrictive covenant",
            ],
            "This contract restricts your ability to work with competitors or in similar \
             industries, potentially limiting your future income opportunities.",
            "Narrow the scope to specific direct competitors, limit the duration (e.g., 6 \
             months), and restrict geographical area.",
            20,
        ),
        RuleGroup::new(
            "Broad IP Assignment",
            Severity::Medium,
            &[
                r"intellectual property.*assigned",
                r"all rights.*assigned",
                r"work for hire",
                r"work-for-hire",
                r"transfer.*all rights",
            ],
            "You may be assigning all intellectual property rights, including pre-existing \
             work and general knowledge gained during the project.",
            "Clarify that only work specifically created for this project is assigned. Retain \
             rights to pre-existing IP and general skills.",
            15,
        ),
        RuleGroup::new(
            "Automatic Renewal",
            Severity::Low,
            &[
                r"automatic renewal",
                r"automatically renew",
                r"auto-renew",
                r"unless.*notice.*terminate",
            ],
            "The contract automatically renews unless you actively cancel it, which could \
             lock you into unwanted terms.",
            "Request explicit approval for renewals or shorten the notice period for \
             termination.",
            10,
        ),
        RuleGroup::new(
            "At-Will Termination",
            Severity::Medium,
            &[
                r"terminate.*at will",
                r"terminate.*without cause",
                r"terminate.*any time.*without",
            ],
            "The client can terminate the contract at any time without cause, leaving you \
             without guaranteed income.",
            "Request a notice period (e.g., 30 days) and payment for work completed plus a \
             kill fee.",
            15,
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_order_and_weights() {
        let summary: Vec<(&str, u32)> = RULE_CATALOG.iter().map(|g| (g.name, g.weight)).collect();
        assert_eq!(
            summary,
            vec![
                ("Unlimited Liability", 25),
                ("Broad Indemnity Clause", 25),
                ("Non-Compete Clause", 20),
                ("Broad IP Assignment", 15),
                ("Automatic Renewal", 10),
                ("At-Will Termination", 15),
            ]
        );
    }

    #[test]
    fn test_every_group_has_patterns() {
        for group in RULE_CATALOG.iter() {
            assert!(!group.patterns.is_empty(), "{} has no patterns", group.name);
        }
    }

    #[test]
    fn test_explanations_are_single_spaced() {
        for group in RULE_CATALOG.iter() {
            assert!(!group.explanation.contains("  "), "{}", group.name);
            assert!(!group.negotiation_tip.contains("  "), "{}", group.name);
        }
    }

    #[test]
    fn test_first_match_respects_pattern_order() {
        let indemnity = &RULE_CATALOG[1];
        let text = "contractor shall defend, indemnify and hold harmless the client";
        let hit = indemnity.first_match(text).unwrap();
        assert_eq!(hit.as_str(), r"indemnify.*harmless");
    }

    #[test]
    fn test_dot_does_not_cross_lines() {
        let termination = &RULE_CATALOG[5];
        assert!(termination.first_match("client may terminate\nat will").is_none());
        assert!(termination.first_match("client may terminate at will").is_some());
    }

    #[test]
    fn test_to_flag_copies_fixed_text() {
        let group = &RULE_CATALOG[4];
        let flag = group.to_flag();
        assert_eq!(flag.title, "Automatic Renewal");
        assert_eq!(flag.severity, Severity::Low);
        assert_eq!(flag.negotiation_tip, group.negotiation_tip);
    }
}
