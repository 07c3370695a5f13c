//! Payload shapes for the structured block embedded in model output.
//!
//! The model is prompted to emit `{"architecture": {...}}` but is not trusted
//! to do so cleanly: every field is optional, and numeric fields tolerate
//! being sent as strings. Deserialization therefore never fails on a sparse
//! or sloppily-typed document, only on one that is not JSON at all or is
//! missing the top-level `architecture` key.

use serde::de::Deserializer;
use serde::Deserialize;
use serde_json::Value;

/// Top-level document wrapper the model is asked to produce
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ArchitectureDocument {
    /// The embedded architecture payload
    pub architecture: ArchitecturePayload,
}

/// Architecture description extracted from model output
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArchitecturePayload {
    /// Project title; absent titles get a display default downstream
    pub title: Option<String>,
    pub description: String,
    /// Provider as the model wrote it; not validated against the enum
    pub provider: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_cost: f64,
    /// Ordered; index drives default layout downstream
    pub services: Vec<ServiceEntry>,
    pub connections: Vec<ConnectionEntry>,
    pub alternatives: Vec<AlternativeEntry>,
}

/// A single recommended service
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceEntry {
    /// Caller-supplied id; uniqueness is not validated
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub service_type: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub cost: f64,
    pub description: String,
    pub icon: Option<String>,
    pub position: Option<Position>,
}

/// Diagram coordinates supplied by the model
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Position {
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub x: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub y: Option<f64>,
}

/// A connection between two services.
///
/// Referential integrity of `from`/`to` against service ids is not enforced;
/// dangling references pass through to the diagram unchanged.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConnectionEntry {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub connection_type: Option<String>,
}

/// A cost/performance alternative for one service
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlternativeEntry {
    pub service_id: String,
    pub alternative_name: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub cost: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub savings: f64,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub performance: Option<f64>,
    pub description: String,
}

/// Accept a JSON number or a numeric string; anything else coerces to 0.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_f64(&Value::deserialize(deserializer)?).unwrap_or(0.0))
}

/// Accept a JSON number or a numeric string; anything else is treated as absent.
fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_f64(&Value::deserialize(deserializer)?))
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
