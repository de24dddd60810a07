#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

/// A risky clause detected in a contract
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Flag {
    pub title: String,
    pub severity: Severity,
    pub explanation: String,
    pub negotiation_tip: String,
}

/// Everything returned to the caller for one analyzed document
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub risk_score: u32, // 0..=100
    pub red_flags: Vec<Flag>,
    pub negotiation_tips: Vec<String>, // One per red flag, same order
    pub draft_email: String,
    pub summary: String,
    pub text_length: usize, // Character count of the extracted text
}
