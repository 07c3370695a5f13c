//! Presentation graph consumed by the diagram front end.
//!
//! Field names and casing here are a wire contract with a fixed front end;
//! changing them breaks rendering, so the camelCase renames are deliberate.

use serde::{Deserialize, Serialize};

use crate::types::CloudProvider;

/// A service rendered in the component list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub icon: String,
    pub provider: CloudProvider,
}

/// A node on the diagram canvas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
    pub sub_label: String,
    pub icon: String,
    pub cost: f64,
    pub description: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub is_dragging: bool,
    #[serde(rename = "type")]
    pub node_type: String,
    pub provider: CloudProvider,
}

/// A rendered connection between two nodes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub edge_type: String,
}

/// An alternative shown next to its original component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AltComponent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub icon: String,
    pub performance: f64,
    pub original_component_id: String,
}

/// Canvas pan offset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pan {
    pub x: f64,
    pub y: f64,
}

/// Visible canvas bounds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Viewport state; fixed defaults independent of payload content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan: Pan,
    pub bounds: Bounds,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Pan { x: 0.0, y: 0.0 },
            bounds: Bounds {
                x: 0.0,
                y: 0.0,
                width: 1200.0,
                height: 800.0,
            },
        }
    }
}

/// Canvas grid settings; fixed defaults independent of payload content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridSettings {
    pub size: u32,
    pub enabled: bool,
    pub snap_enabled: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: 20,
            enabled: true,
            snap_enabled: false,
        }
    }
}

/// The diagram portion of the presentation graph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
    pub viewport: Viewport,
    pub grid: GridSettings,
}

/// Complete presentation graph for one recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresentationGraph {
    pub id: String,
    pub name: String,
    pub description: String,
    pub provider: CloudProvider,
    pub optimization_preference: String,
    pub components: Vec<Component>,
    pub alternatives: Vec<AltComponent>,
    pub diagram: Diagram,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_serializes_front_end_field_names() {
        let node = DiagramNode {
            id: "node-1".into(),
            label: "EC2".into(),
            sub_label: "Compute".into(),
            icon: "server".into(),
            cost: 29.2,
            description: String::new(),
            x: 300.0,
            y: 200.0,
            width: 200.0,
            height: 100.0,
            is_dragging: false,
            node_type: "compute".into(),
            provider: CloudProvider::Aws,
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["subLabel"], "Compute");
        assert_eq!(value["isDragging"], false);
        assert_eq!(value["type"], "compute");
        assert_eq!(value["provider"], "aws");
    }

    #[test]
    fn grid_defaults_match_front_end_contract() {
        let value = serde_json::to_value(GridSettings::default()).unwrap();
        assert_eq!(value["size"], 20);
        assert_eq!(value["enabled"], true);
        assert_eq!(value["snapEnabled"], false);
    }

    #[test]
    fn viewport_defaults_match_front_end_contract() {
        let viewport = Viewport::default();
        assert_eq!(viewport.zoom, 1.0);
        assert_eq!(viewport.bounds.width, 1200.0);
        assert_eq!(viewport.bounds.height, 800.0);
    }
}
