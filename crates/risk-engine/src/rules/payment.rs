// Payment term review: long net terms and completion-only payment
use crate::extractors::numeric::extract_net_terms;
use shared_types::{Flag, Severity};

pub const PAYMENT_FLAG_TITLE: &str = "Unfavorable Payment Terms";

/// Risk points added when the payment flag fires
pub const PAYMENT_WEIGHT: u32 = 10;

/// Longest net term accepted without a concern
const MAX_NET_DAYS: u64 = 30;

const PAYMENT_TIP: &str = "Request milestone-based payments (e.g., 30% upfront, 40% midway, 30% \
                           on completion) and Net 15 or Net 30 terms.";

/// Collects payment concerns from lowercased text, in reporting order
pub fn payment_concerns(text: &str) -> Vec<String> {
    let mut concerns = Vec::new();

    if let Some(terms) = extract_net_terms(text) {
        if terms.exceeds(MAX_NET_DAYS) {
            concerns.push(format!("Payment terms of Net {} days", terms.digits));
        }
    }

    if text.contains("upon completion") && !text.contains("milestone") {
        concerns.push("Full payment only upon completion".to_string());
    }

    concerns
}

/// Checks payment terms, folding every concern into one low-severity flag
pub fn check_payment_terms(text: &str) -> Option<Flag> {
    let concerns = payment_concerns(text);
    if concerns.is_empty() {
        return None;
    }

    Some(Flag {
        title: PAYMENT_FLAG_TITLE.to_string(),
        severity: Severity::Low,
        explanation: format!(
            "Payment terms may impact your cash flow: {}.",
            concerns.join(", ")
        ),
        negotiation_tip: PAYMENT_TIP.to_string(),
    })
}
