use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::TfdocError;

/// Terraform state parser.
///
/// Decodes the subset of a tfstate file needed for reporting: the Terraform
/// version and, per resource, the attribute maps of its instances. Unknown
/// fields are ignored so newer state-file revisions still decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateDocument {
    #[serde(default)]
    pub terraform_version: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Instance {
    #[serde(default)]
    pub attributes: IndexMap<String, AttributeValue>,
}

/// One attribute value, classified at decode time.
///
/// Attribute maps keep source-document key order (`IndexMap`), so rendering
/// the same state file twice yields identical output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Sequence(Vec<AttributeValue>),
    Object(IndexMap<String, AttributeValue>),
}

impl StateDocument {
    /// Decode a state document from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TfdocError> {
        serde_json::from_slice(bytes).map_err(TfdocError::Decode)
    }

    /// Read and decode a state file from disk.
    pub fn load(path: &Path) -> Result<Self, TfdocError> {
        let bytes = std::fs::read(path).map_err(|source| TfdocError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "state file read");
        Self::from_slice(&bytes)
    }
}

impl AttributeValue {
    pub fn as_object(&self) -> Option<&IndexMap<String, AttributeValue>> {
        match self {
            AttributeValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Generic display conversion used wherever a value lands in a plain
    /// table cell. Scalars print bare; containers flatten to compact JSON.
    pub fn display(&self) -> String {
        match self {
            AttributeValue::String(s) => s.clone(),
            other => other.json_fragment(),
        }
    }

    fn json_fragment(&self) -> String {
        match self {
            AttributeValue::Null => "null".to_string(),
            AttributeValue::Bool(b) => b.to_string(),
            AttributeValue::Number(n) => n.to_string(),
            AttributeValue::String(s) => format!("{s:?}"),
            AttributeValue::Sequence(items) => {
                let inner: Vec<String> = items.iter().map(|v| v.json_fragment()).collect();
                format!("[{}]", inner.join(","))
            }
            AttributeValue::Object(map) => {
                let inner: Vec<String> = map
                    .iter()
                    .map(|(k, v)| format!("{k:?}:{}", v.json_fragment()))
                    .collect();
                format!("{{{}}}", inner.join(","))
            }
        }
    }
}
