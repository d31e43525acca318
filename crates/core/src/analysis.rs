//! Patent risk analysis for a battery design proposal.
//!
//! The analysis is a fixed decision table: a handful of material/process
//! values each contribute one pre-written risk entry, two low-risk entries are
//! always present, and the compliance mapping is derived from two simple
//! predicates on energy density and cell design.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::THERMAL_DIFFUSION_THRESHOLD_WH_KG;

/// Ordinal severity of a detected patent concern.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Emoji severity marker used in report lines.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match *self {
            Self::High => "🔴",
            Self::Medium => "🟡",
            Self::Low => "🟢",
        }
    }
}

/// A single patent concern attached to the proposal.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskEntry {
    pub level: RiskLevel,
    pub description: String,
    pub patent_number: String,
    pub patent_title: String,
    pub assignee: String,
    pub suggestion: String,
}

impl RiskEntry {
    fn new(
        level: RiskLevel,
        description: &str,
        patent_number: &str,
        patent_title: &str,
        assignee: &str,
        suggestion: &str,
    ) -> Self {
        Self {
            level,
            description: description.to_owned(),
            patent_number: patent_number.to_owned(),
            patent_title: patent_title.to_owned(),
            assignee: assignee.to_owned(),
            suggestion: suggestion.to_owned(),
        }
    }
}

/// Design proposal submitted for analysis. Every field is optional, and a
/// value of the wrong JSON type reads as absent instead of rejecting the body.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub process: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub design: Option<String>,
    /// Wh/kg. Accepts a JSON number or a numeric string.
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub energy_density: Option<f64>,
    /// Accepted for forward compatibility; no rule depends on it yet.
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub cycle_life: Option<f64>,
}

/// String values only; numbers, booleans, arrays and objects read as absent.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Number-or-numeric-string. Anything else reads as absent.
fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Regulatory test category → status, in insertion order.
///
/// Serialized as a JSON object whose keys keep the order they were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplianceMap {
    entries: Vec<(&'static str, &'static str)>,
}

impl ComplianceMap {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Sets the status for `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: &'static str, status: &'static str) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = status,
            None => self.entries.push((key, status)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

impl Serialize for ComplianceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, status) in &self.entries {
            map.serialize_entry(key, status)?;
        }
        map.end()
    }
}

/// Outcome of analysing one proposal.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
    pub risks: Vec<RiskEntry>,
    pub compliance: ComplianceMap,
    pub recommendations: Vec<String>,
    pub summary: String,
}

impl AnalysisResult {
    /// Builds a result whose per-level counts are derived from `risks`.
    #[must_use]
    pub fn from_risks(
        risks: Vec<RiskEntry>,
        compliance: ComplianceMap,
        recommendations: Vec<String>,
    ) -> Self {
        let count = |level: RiskLevel| risks.iter().filter(|r| r.level == level).count();
        let high_risk_count = count(RiskLevel::High);
        let medium_risk_count = count(RiskLevel::Medium);
        let low_risk_count = count(RiskLevel::Low);
        let summary = format!(
            "您的方案包含{high_risk_count}个高风险、{medium_risk_count}个中风险和{low_risk_count}个低风险。建议重点关注高风险项并进行优化。"
        );
        Self {
            high_risk_count,
            medium_risk_count,
            low_risk_count,
            risks,
            compliance,
            recommendations,
            summary,
        }
    }

    /// Whether the per-level counts add up to the number of listed risks.
    #[must_use]
    pub fn counts_match_risks(&self) -> bool {
        self.high_risk_count + self.medium_risk_count + self.low_risk_count == self.risks.len()
    }
}

const RECOMMENDATIONS: [&str; 5] = [
    "调整材料配方避开专利保护范围",
    "考虑使用公开的替代方案降低风险",
    "进行小批量验证测试确保性能",
    "咨询专业知识产权律师进行FTO分析",
    "提前进行新国标预测试验证合规性",
];

const COMPLIANT: &str = "符合要求";

/// Runs the decision table against a proposal.
#[must_use]
pub fn analyze(input: &AnalysisInput) -> AnalysisResult {
    let material = input.material.as_deref();
    let process = input.process.as_deref();
    let mut risks = Vec::with_capacity(5);

    if material == Some("NCM811") {
        risks.push(RiskEntry::new(
            RiskLevel::High,
            "NCM811材料中Ni含量≥85%的配方涉及松下专利",
            "CN201810123456.7",
            "高镍三元正极材料及其制备方法",
            "松下电器产业株式会社",
            "调整Ni含量至78-82%区间，或考虑NCM622替代方案",
        ));
    }

    if material == Some("silicon-carbon") {
        risks.push(RiskEntry::new(
            RiskLevel::Medium,
            "硅含量>30%的硅碳复合材料可能涉及三星专利",
            "CN201910987654.3",
            "硅碳复合负极材料及其制备方法",
            "三星SDI株式会社",
            "控制硅含量<20%，或使用公开的包覆工艺",
        ));
    }

    if process == Some("dry-electrode") {
        risks.push(RiskEntry::new(
            RiskLevel::Medium,
            "特定干法电极工艺参数可能涉及专利",
            "US2020123456A1",
            "干法电极制造工艺及设备",
            "Maxwell Technologies Inc.",
            "调整工艺参数，或寻求技术许可",
        ));
    }

    risks.push(RiskEntry::new(
        RiskLevel::Low,
        "常规电解液配方可能有专利限制",
        "CN202010123456.7",
        "锂离子电池电解液添加剂组合",
        "比亚迪股份有限公司",
        "使用公开的替代添加剂组合",
    ));
    risks.push(RiskEntry::new(
        RiskLevel::Low,
        "标准化成工艺可能有改进专利",
        "CN201911234567.8",
        "锂离子电池化成方法",
        "宁德时代新能源科技股份有限公司",
        "采用公开的标准化成工艺",
    ));

    let recommendations = RECOMMENDATIONS.iter().map(|s| (*s).to_owned()).collect();
    AnalysisResult::from_risks(risks, compliance_for(input), recommendations)
}

fn compliance_for(input: &AnalysisInput) -> ComplianceMap {
    let hot = input.energy_density.is_some_and(|wh_kg| wh_kg > THERMAL_DIFFUSION_THRESHOLD_WH_KG);
    let cylindrical = input.design.as_deref() == Some("cylindrical");

    let mut compliance = ComplianceMap::new();
    compliance.insert("thermalDiffusion", if hot { "需加强热管理设计" } else { COMPLIANT });
    compliance.insert("overcharge", "需验证BMS保护功能");
    compliance.insert("shortCircuit", COMPLIANT);
    compliance.insert("mechanicalCrush", if cylindrical { "需验证底部防护" } else { COMPLIANT });
    compliance.insert("bottomImpact", "需按GB38031-2025新增要求进行测试");
    compliance.insert("overall", "基本符合，建议优化");
    compliance
}

/// Canned result returned in place of a computed one when analysis fails.
///
/// Its counts (1/2/3) do not match its single listed risk; clients render the
/// counts and the list independently.
#[must_use]
pub fn mock_analysis() -> AnalysisResult {
    let mut compliance = ComplianceMap::new();
    compliance.insert("thermalDiffusion", "待测试");
    compliance.insert("overcharge", "符合");
    compliance.insert("mechanicalCrush", "待改进");
    compliance.insert("bottomImpact", "需验证");
    compliance.insert("overall", "需要进一步测试");

    AnalysisResult {
        high_risk_count: 1,
        medium_risk_count: 2,
        low_risk_count: 3,
        risks: vec![RiskEntry::new(
            RiskLevel::High,
            "NCM材料高镍配方专利风险",
            "CN201810123456.7",
            "高镍三元正极材料",
            "松下电器",
            "调整配方参数",
        )],
        compliance,
        recommendations: ["进行详细专利检索", "咨询专业律师", "进行预测试验证"]
            .iter()
            .map(|s| (*s).to_owned())
            .collect(),
        summary: "初步分析发现1个高风险项，建议进行深入分析。".to_owned(),
    }
}
