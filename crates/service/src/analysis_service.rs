use chrono::{NaiveDate, Utc};
use xinzhi_core::{AnalysisInput, AnalysisResult, Report, analyze, generate_report, mock_analysis};

use crate::ServiceError;

/// Computed analysis together with its textual report.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub report: Report,
}

pub struct AnalysisService {
    today: fn() -> NaiveDate,
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

impl AnalysisService {
    #[must_use]
    pub const fn new() -> Self {
        Self { today: utc_today }
    }

    /// Uses `today` for report dates instead of the system clock.
    #[must_use]
    pub const fn with_clock(today: fn() -> NaiveDate) -> Self {
        Self { today }
    }

    /// Runs the decision table and renders the report.
    ///
    /// Fails with `Internal` if the computed counts disagree with the risk
    /// list; callers substitute [`AnalysisService::fallback_result`].
    pub fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisReport, ServiceError> {
        let result = analyze(input);
        if !result.counts_match_risks() {
            return Err(ServiceError::Internal(format!(
                "risk counts {}/{}/{} do not match {} listed risks",
                result.high_risk_count,
                result.medium_risk_count,
                result.low_risk_count,
                result.risks.len()
            )));
        }
        let report = generate_report(&result, (self.today)());
        tracing::debug!(
            high = result.high_risk_count,
            medium = result.medium_risk_count,
            low = result.low_risk_count,
            "analysis complete"
        );
        Ok(AnalysisReport { result, report })
    }

    /// Canned result served when analysis fails.
    #[must_use]
    pub fn fallback_result(&self) -> AnalysisResult {
        mock_analysis()
    }
}
