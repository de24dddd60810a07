pub mod types;

pub use types::{AnalysisResult, Flag, Severity};
