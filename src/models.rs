// src/models.rs
use serde::{Deserialize, Serialize};

/// Body of the analysis request. The portfolio text is sent exactly as the
/// user typed it; the service treats it as opaque.
#[derive(Serialize)]
pub struct AnalyzeRequest<'a> {
    pub portfolio_str: &'a str,
}

/// Advice returned by the analysis service. Field names on the wire follow
/// the service's camelCase contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub message: String,
    #[serde(rename = "riskLevel")]
    pub risk_level: String,
    #[serde(rename = "suggestedStocks")]
    pub suggested_stocks: Vec<String>,
}
