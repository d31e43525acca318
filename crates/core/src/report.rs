//! Textual risk report derived from an [`AnalysisResult`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::analysis::AnalysisResult;

pub const REPORT_TITLE: &str = "新国标电池研发方案风险分析报告";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub summary: String,
    pub sections: Vec<ReportSection>,
}

/// Builds the four-section report: level overview, per-risk lines,
/// compliance lines and recommendations.
#[must_use]
pub fn generate_report(result: &AnalysisResult, date: NaiveDate) -> Report {
    let overview = format!(
        "高风险：{}项，中风险：{}项，低风险：{}项",
        result.high_risk_count, result.medium_risk_count, result.low_risk_count
    );

    let risk_lines = result
        .risks
        .iter()
        .map(|risk| {
            format!("{} {}（专利号：{}）", risk.level.marker(), risk.description, risk.patent_number)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let compliance_lines = result
        .compliance
        .iter()
        .map(|(key, status)| format!("{key}: {status}"))
        .collect::<Vec<_>>()
        .join("\n");

    Report {
        title: REPORT_TITLE.to_owned(),
        date: date.format("%Y-%m-%d").to_string(),
        summary: result.summary.clone(),
        sections: vec![
            section("风险等级概览", overview),
            section("专利侵权风险详情", risk_lines),
            section("新国标合规性检查", compliance_lines),
            section("优化建议", result.recommendations.join("\n")),
        ],
    }
}

fn section(title: &str, content: String) -> ReportSection {
    ReportSection { title: title.to_owned(), content }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalysisInput, analyze, mock_analysis};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()
    }

    #[test]
    fn report_has_four_sections_in_order() {
        let report = generate_report(&analyze(&AnalysisInput::default()), date());
        let titles: Vec<&str> = report.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["风险等级概览", "专利侵权风险详情", "新国标合规性检查", "优化建议"]);
        assert_eq!(report.title, REPORT_TITLE);
        assert_eq!(report.date, "2026-07-01");
    }

    #[test]
    fn risk_lines_carry_severity_markers() {
        let input = AnalysisInput {
            material: Some("NCM811".to_owned()),
            process: Some("dry-electrode".to_owned()),
            ..AnalysisInput::default()
        };
        let report = generate_report(&analyze(&input), date());
        let lines: Vec<&str> = report.sections[1].content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "🔴 NCM811材料中Ni含量≥85%的配方涉及松下专利（专利号：CN201810123456.7）");
        assert!(lines[1].starts_with("🟡 "));
        assert!(lines[2].starts_with("🟢 "));
        assert!(lines[3].starts_with("🟢 "));
    }

    #[test]
    fn overview_and_compliance_follow_result() {
        let report = generate_report(&mock_analysis(), date());
        assert_eq!(report.sections[0].content, "高风险：1项，中风险：2项，低风险：3项");
        assert_eq!(report.sections[2].content.lines().next(), Some("thermalDiffusion: 待测试"));
        assert_eq!(report.sections[3].content, "进行详细专利检索\n咨询专业律师\n进行预测试验证");
        assert_eq!(report.summary, mock_analysis().summary);
    }
}
