//! OCEL 2.0 JSON log handling

use anyhow::Result;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;

/// A reference from an object or event to another object
#[derive(Debug, Clone, Deserialize)]
pub struct OcelRelationship {
    /// Id of the referenced object
    #[serde(rename = "objectId")]
    pub object_id: String,

    /// Role of the reference (unused by the analysis, kept for completeness)
    #[serde(default)]
    pub qualifier: String,
}

/// An object instance in the log
#[derive(Debug, Clone, Deserialize)]
pub struct OcelObject {
    pub id: String,

    /// Object type name
    #[serde(rename = "type")]
    pub object_type: String,

    /// Object-to-object relationship references
    #[serde(default)]
    pub relationships: Vec<OcelRelationship>,
}

/// An event in the log with its object references
#[derive(Debug, Clone, Deserialize)]
pub struct OcelEvent {
    pub id: String,

    /// Event type name
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event-to-object relationship references
    #[serde(default)]
    pub relationships: Vec<OcelRelationship>,
}

/// An object-centric event log in OCEL 2.0 JSON form
#[derive(Debug, Clone, Deserialize)]
pub struct OcelLog {
    #[serde(default)]
    pub objects: Vec<OcelObject>,

    #[serde(default)]
    pub events: Vec<OcelEvent>,
}

impl OcelLog {
    /// Distinct object types in first-appearance order over the objects table
    pub fn object_types(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut types = Vec::new();
        for object in &self.objects {
            if seen.insert(object.object_type.as_str()) {
                types.push(object.object_type.clone());
            }
        }
        types
    }

    /// Lookup table from object id to object type
    pub fn type_by_object_id(&self) -> HashMap<&str, &str> {
        self.objects
            .iter()
            .map(|o| (o.id.as_str(), o.object_type.as_str()))
            .collect()
    }
}

/// Load an OCEL 2.0 JSON log from disk
pub fn load_ocel(path: &str) -> Result<OcelLog> {
    log::info!("Reading OCEL log: {}", path);

    if !std::path::Path::new(path).exists() {
        return Err(anyhow::anyhow!("File not found: {}", path));
    }

    let file = File::open(path)?;
    let log: OcelLog = serde_json::from_reader(BufReader::new(file))?;

    log::info!(
        "Loaded log with {} objects and {} events",
        log.objects.len(),
        log.events.len()
    );

    Ok(log)
}
