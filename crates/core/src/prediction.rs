//! Typed prediction result and its presentation helpers.

use serde::{Deserialize, Serialize};

/// Verdict label shown when the model predicts churn.
pub const LABEL_CHURN: &str = "Likely to Churn";

/// Verdict label shown when the model predicts retention.
pub const LABEL_STAY: &str = "Likely to Stay";

/// A churn prediction returned by the `/predict` endpoint.
///
/// `churn_probability` and `confidence` are both in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Echo of the submitted customer identifier.
    pub customer_id: String,
    /// Model probability that the customer churns.
    pub churn_probability: f64,
    /// True when the model predicts churn.
    pub prediction: bool,
    /// Model confidence in the verdict.
    pub confidence: f64,
}

impl PredictionResult {
    /// Human-readable verdict for the result panel.
    pub fn verdict_label(&self) -> &'static str {
        if self.prediction {
            LABEL_CHURN
        } else {
            LABEL_STAY
        }
    }

    /// Churn probability rendered as a percentage, e.g. `73.00%`.
    pub fn probability_percent(&self) -> String {
        percent(self.churn_probability)
    }

    /// Confidence rendered as a percentage, e.g. `91.00%`.
    pub fn confidence_percent(&self) -> String {
        percent(self.confidence)
    }
}

/// Render a `[0, 1]` value as a two-decimal percentage string.
fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
