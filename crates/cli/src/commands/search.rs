use anyhow::Result;
use xinzhi_service::KnowledgeService;

pub(crate) fn run(query: &str, category: Option<&str>) -> Result<()> {
    let results = KnowledgeService::default().search(Some(query), category)?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
