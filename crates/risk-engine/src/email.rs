//! Draft email to the counterparty
//!
//! Placeholders such as `[Client Name]` are left literal for the user.

use shared_types::{Flag, Severity};

/// Most concerns listed in one email
pub const MAX_EMAIL_CONCERNS: usize = 3;

const READY_TO_PROCEED_EMAIL: &str = "Subject: Contract Review - Ready to Proceed

Hi [Client Name],

I've reviewed the contract and I'm excited to move forward with this project. The terms look fair and I'm ready to sign.

Please let me know if you need any additional information.

Best regards,
[Your Name]";

const CONCERNED_SUBJECT: &str = "Contract Review - Important Concerns to Discuss";
const CONCERNED_OPENING: &str = "I've reviewed the contract and I'm interested in working together, but I have some concerns about certain terms that I'd like to discuss before signing.";

const MINOR_SUBJECT: &str = "Contract Review - Minor Clarifications Needed";
const MINOR_OPENING: &str = "I've reviewed the contract and I'm looking forward to working together. I have a few minor points I'd like to clarify.";

/// Drafts the negotiation email for a set of flags in report order
///
/// `_risk_score` is accepted for callers that have it at hand; the tone is
/// chosen from flag severities alone.
pub fn draft_email(red_flags: &[Flag], _risk_score: u32) -> String {
    if red_flags.is_empty() {
        return READY_TO_PROCEED_EMAIL.to_string();
    }

    let has_high = red_flags.iter().any(|f| f.severity == Severity::High);
    let (subject, opening) = if has_high {
        (CONCERNED_SUBJECT, CONCERNED_OPENING)
    } else {
        (MINOR_SUBJECT, MINOR_OPENING)
    };

    let concerns = red_flags
        .iter()
        .take(MAX_EMAIL_CONCERNS)
        .enumerate()
        .map(|(i, flag)| format!("{}. {}: {}", i + 1, flag.title, flag.negotiation_tip))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Subject: {subject}

Hi [Client Name],

{opening}

Here are the items I'd like to discuss:

{concerns}

I believe these modifications will make the agreement more balanced while still protecting both our interests. I'm happy to discuss these points at your convenience.

Looking forward to hearing from you.

Best regards,
[Your Name]"
    )
}
