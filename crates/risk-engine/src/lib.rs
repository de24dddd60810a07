pub mod catalog;
pub mod email;
pub mod evaluator;
pub mod extractors;
pub mod patterns;
pub mod rules;
pub mod summary;

use shared_types::AnalysisResult;

pub use catalog::{RuleGroup, RULE_CATALOG};
pub use evaluator::{evaluate, Evaluation, MAX_RISK_SCORE};
pub use summary::DEFAULT_SUMMARY_CHARS;

/// RiskEngine entry point
#[derive(Debug, Clone)]
pub struct RiskEngine {
    summary_chars: usize,
}

impl RiskEngine {
    pub fn new() -> Self {
        Self {
            summary_chars: DEFAULT_SUMMARY_CHARS,
        }
    }

    /// Overrides the summary budget (in characters)
    pub fn with_summary_chars(mut self, summary_chars: usize) -> Self {
        self.summary_chars = summary_chars;
        self
    }

    /// Analyze extracted contract text
    ///
    /// Pure function of `text`: the same input always yields the same result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let normalized = patterns::normalize_for_matching(text);
        let Evaluation {
            red_flags,
            risk_score,
        } = evaluator::evaluate(&normalized);

        let negotiation_tips = red_flags
            .iter()
            .map(|f| f.negotiation_tip.clone())
            .collect();
        let draft_email = email::draft_email(&red_flags, risk_score);
        let summary = summary::create_summary(text, self.summary_chars);

        AnalysisResult {
            risk_score,
            red_flags,
            negotiation_tips,
            draft_email,
            summary,
            text_length: text.chars().count(),
        }
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze text with the default engine settings
pub fn analyze_contract(text: &str) -> AnalysisResult {
    RiskEngine::new().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Severity;

    #[test]
    fn test_engine_accepts_clean_contract() {
        let text = "This Services Agreement is made between Acme Corp and the Consultant. \
                    The Consultant will deliver a website design. Fees are due Net 15.";
        let result = analyze_contract(text);

        assert_eq!(result.risk_score, 0);
        assert!(result.red_flags.is_empty());
        assert!(result.negotiation_tips.is_empty());
        assert!(result
            .draft_email
            .starts_with("Subject: Contract Review - Ready to Proceed"));
        assert_eq!(result.summary, text);
    }

    #[test]
    fn test_engine_matches_regardless_of_case() {
        let result = analyze_contract(
            "The Contractor shall INDEMNIFY and Hold Harmless the Client against all claims.",
        );
        assert_eq!(result.red_flags.len(), 1);
        assert_eq!(result.red_flags[0].title, "Broad Indemnity Clause");
        assert_eq!(result.red_flags[0].severity, Severity::High);
        assert_eq!(result.risk_score, 25);
    }

    #[test]
    fn test_engine_payment_scenario() {
        let result = analyze_contract(
            "Invoices are payable Net 45 days. The remaining balance is paid upon completion.",
        );
        assert_eq!(result.red_flags.len(), 1);
        let flag = &result.red_flags[0];
        assert_eq!(flag.title, "Unfavorable Payment Terms");
        assert!(flag.explanation.contains("Payment terms of Net 45 days"));
        assert!(flag.explanation.contains("Full payment only upon completion"));
        assert_eq!(result.risk_score, 10);
        assert!(result
            .draft_email
            .starts_with("Subject: Contract Review - Minor Clarifications Needed"));
    }

    #[test]
    fn test_tips_follow_flags() {
        let result = analyze_contract(
            "Unlimited liability applies. Contractor agrees to a non-compete. Work for hire.",
        );
        let tips: Vec<String> = result
            .red_flags
            .iter()
            .map(|f| f.negotiation_tip.clone())
            .collect();
        assert_eq!(result.negotiation_tips, tips);
        assert_eq!(result.risk_score, 60);
    }

    #[test]
    fn test_text_length_counts_original_characters() {
        let text = "  Café agreement\n\n";
        let result = analyze_contract(text);
        assert_eq!(result.text_length, 18);
        assert_eq!(result.summary, "Café agreement");
    }

    #[test]
    fn test_custom_summary_budget() {
        let engine = RiskEngine::new().with_summary_chars(10);
        let result = engine.analyze("Short contract text that runs past ten characters.");
        assert_eq!(result.summary, "Short cont...");
    }
}
