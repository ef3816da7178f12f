use serde::Serialize;

/// Risk classification shared by every impact report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Elevated,
    Low,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "CRITICAL",
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Elevated => "ELEVATED",
            RiskLevel::Low => "LOW",
        }
    }

    pub fn sort_key(&self) -> u8 {
        match self {
            RiskLevel::Critical => 0,
            RiskLevel::High => 1,
            RiskLevel::Medium => 2,
            RiskLevel::Elevated => 3,
            RiskLevel::Low => 4,
        }
    }
}

/// Fraction of `values` that are `<= value`; 0 for an empty slice.
pub fn percentile_rank<T: PartialOrd>(values: &[T], value: &T) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let at_or_below = values.iter().filter(|v| *v <= value).count();
    at_or_below as f64 / values.len() as f64
}

#[cfg(test)]
#[path = "risk_test.rs"]
mod tests;
