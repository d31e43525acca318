//! Battery knowledge base types and search.
//!
//! The dataset itself lives in [`crate::KNOWLEDGE_BASE`]; this module defines
//! the record shapes and a case-insensitive substring search over a fixed
//! subset of fields per record type.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Electrode material entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    /// Cathode materials quote energy density...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_density: Option<&'static str>,
    /// ...anode materials quote specific capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<&'static str>,
    pub cycle_life: &'static str,
    pub patent_status: &'static str,
    pub alternatives: &'static [&'static str],
    pub standards: &'static [&'static str],
}

/// Manufacturing process entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
    pub patent_status: &'static str,
    pub alternatives: &'static [&'static str],
}

/// National standard entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Standard {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub effective_date: &'static str,
    pub key_requirements: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testing_methods: Option<&'static [&'static str]>,
}

/// Patent entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Patent {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub assignee: &'static str,
    pub filing_date: &'static str,
    pub expiration_date: &'static str,
    pub status: &'static str,
    pub risk_level: &'static str,
    pub claims: &'static str,
}

/// The complete, read-only dataset.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KnowledgeBase {
    pub materials: &'static [Material],
    pub processes: &'static [Process],
    pub standards: &'static [Standard],
    pub patents: &'static [Patent],
}

/// One of the four dataset arrays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeCategory {
    Materials,
    Processes,
    Standards,
    Patents,
}

impl KnowledgeCategory {
    /// Scan order when no category is given.
    pub const ALL: [Self; 4] = [Self::Materials, Self::Processes, Self::Standards, Self::Patents];
}

impl FromStr for KnowledgeCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "materials" => Ok(Self::Materials),
            "processes" => Ok(Self::Processes),
            "standards" => Ok(Self::Standards),
            "patents" => Ok(Self::Patents),
            other => Err(CoreError::UnknownCategory(other.to_owned())),
        }
    }
}

/// A matched record tagged with its record type.
///
/// Serializes as `{"type": "material", "data": {...}}`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum KnowledgeHit {
    Material(&'static Material),
    Process(&'static Process),
    Standard(&'static Standard),
    Patent(&'static Patent),
}

fn any_field_contains(fields: &[&str], needle: &str) -> bool {
    fields.iter().any(|field| field.to_lowercase().contains(needle))
}

impl Material {
    fn matches(&self, needle: &str) -> bool {
        any_field_contains(&[self.name, self.full_name, self.description], needle)
    }
}

impl Process {
    fn matches(&self, needle: &str) -> bool {
        any_field_contains(&[self.name, self.description], needle)
    }
}

impl Standard {
    fn matches(&self, needle: &str) -> bool {
        any_field_contains(&[self.name, self.full_name], needle)
    }
}

impl Patent {
    fn matches(&self, needle: &str) -> bool {
        any_field_contains(&[self.number, self.title, self.assignee], needle)
    }
}

impl KnowledgeBase {
    /// Case-insensitive substring search.
    ///
    /// With `category` set only that array is scanned; otherwise arrays are
    /// scanned materials → processes → standards → patents. Hits keep each
    /// array's order. An empty query matches every record.
    #[must_use]
    pub fn search(&self, query: &str, category: Option<KnowledgeCategory>) -> Vec<KnowledgeHit> {
        let needle = query.to_lowercase();
        let mut hits = Vec::new();
        for scanned in KnowledgeCategory::ALL {
            if category.is_some_and(|c| c != scanned) {
                continue;
            }
            match scanned {
                KnowledgeCategory::Materials => hits.extend(
                    self.materials.iter().filter(|m| m.matches(&needle)).map(KnowledgeHit::Material),
                ),
                KnowledgeCategory::Processes => hits.extend(
                    self.processes.iter().filter(|p| p.matches(&needle)).map(KnowledgeHit::Process),
                ),
                KnowledgeCategory::Standards => hits.extend(
                    self.standards.iter().filter(|s| s.matches(&needle)).map(KnowledgeHit::Standard),
                ),
                KnowledgeCategory::Patents => hits.extend(
                    self.patents.iter().filter(|p| p.matches(&needle)).map(KnowledgeHit::Patent),
                ),
            }
        }
        hits
    }

    /// Total number of records across all four arrays.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.materials.len() + self.processes.len() + self.standards.len() + self.patents.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
