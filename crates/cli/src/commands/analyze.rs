use anyhow::Result;
use serde::Serialize;
use xinzhi_core::{AnalysisInput, AnalysisResult, Report};
use xinzhi_service::AnalysisService;

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    data: &'a AnalysisResult,
    report: &'a Report,
}

pub(crate) fn run(
    material: Option<String>,
    process: Option<String>,
    design: Option<String>,
    energy_density: Option<f64>,
    cycle_life: Option<f64>,
) -> Result<()> {
    let input = AnalysisInput { material, process, design, energy_density, cycle_life };
    let analysis = AnalysisService::new().analyze(&input)?;
    let output = AnalyzeOutput { data: &analysis.result, report: &analysis.report };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
