//! Transformation of an extracted payload into the presentation graph.
//!
//! The transform is total: it never fails on a syntactically valid but
//! semantically sparse payload. Every field read has a named default, and ids
//! are synthesized from the array index whenever the payload omits them.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::graph::{
    AltComponent, Component, Diagram, DiagramEdge, DiagramNode, GridSettings, PresentationGraph,
    Viewport,
};
use crate::payload::ArchitecturePayload;
use crate::types::CloudProvider;

const UNKNOWN_SERVICE: &str = "Unknown Service";
const DEFAULT_SERVICE_TYPE: &str = "service";
const DEFAULT_NODE_ICON: &str = "server";
const DEFAULT_EDGE_TYPE: &str = "Connection";
const DEFAULT_GRAPH_NAME: &str = "Cloud Architecture";
const DEFAULT_ALTERNATIVE_NAME: &str = "Alternative";
const DEFAULT_PERFORMANCE: f64 = 80.0;

const NODE_WIDTH: f64 = 200.0;
const NODE_HEIGHT: f64 = 100.0;

/// Map a payload onto the presentation graph for the given provider.
pub fn transform(payload: &ArchitecturePayload, provider: CloudProvider) -> PresentationGraph {
    let components = payload
        .services
        .iter()
        .enumerate()
        .map(|(idx, service)| Component {
            id: synthesize_id(service.id.as_deref(), "comp", idx),
            name: display_name(service.name.as_deref()),
            description: service.description.clone(),
            cost: service.cost,
            icon: service_icon(service_type(service.service_type.as_deref())).to_string(),
            provider,
        })
        .collect();

    let nodes = payload
        .services
        .iter()
        .enumerate()
        .map(|(idx, service)| {
            let (grid_x, grid_y) = grid_position(idx);
            let position = service.position.as_ref();
            let type_tag = service_type(service.service_type.as_deref());

            DiagramNode {
                id: synthesize_id(service.id.as_deref(), "node", idx),
                label: display_name(service.name.as_deref()),
                sub_label: capitalize(type_tag),
                icon: service
                    .icon
                    .clone()
                    .unwrap_or_else(|| DEFAULT_NODE_ICON.to_string()),
                cost: service.cost,
                description: service.description.clone(),
                x: position.and_then(|p| p.x).unwrap_or(grid_x),
                y: position.and_then(|p| p.y).unwrap_or(grid_y),
                width: NODE_WIDTH,
                height: NODE_HEIGHT,
                is_dragging: false,
                node_type: type_tag.to_string(),
                provider,
            }
        })
        .collect();

    let edges = payload
        .connections
        .iter()
        .enumerate()
        .map(|(idx, conn)| DiagramEdge {
            id: format!("edge-{}", idx + 1),
            from: conn.from.clone(),
            to: conn.to.clone(),
            edge_type: conn
                .connection_type
                .clone()
                .unwrap_or_else(|| DEFAULT_EDGE_TYPE.to_string()),
        })
        .collect();

    let alternatives = payload
        .alternatives
        .iter()
        .enumerate()
        .map(|(idx, alt)| AltComponent {
            id: format!("alt-{}", idx + 1),
            name: alt
                .alternative_name
                .clone()
                .unwrap_or_else(|| DEFAULT_ALTERNATIVE_NAME.to_string()),
            description: alt.description.clone(),
            cost: alt.cost,
            icon: DEFAULT_NODE_ICON.to_string(),
            performance: alt.performance.unwrap_or(DEFAULT_PERFORMANCE),
            original_component_id: alt.service_id.clone(),
        })
        .collect();

    PresentationGraph {
        id: format!(
            "arch-{}",
            title_hash(payload.title.as_deref().unwrap_or("architecture"))
        ),
        name: payload
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_GRAPH_NAME.to_string()),
        description: payload.description.clone(),
        provider,
        optimization_preference: "balanced".to_string(),
        components,
        alternatives,
        diagram: Diagram {
            nodes,
            edges,
            viewport: Viewport::default(),
            grid: GridSettings::default(),
        },
    }
}

/// Symbol for a service-type tag. Case-insensitive over a closed set;
/// unknown tags map to the generic fallback symbol.
pub fn service_icon(service_type: &str) -> &'static str {
    match service_type.to_lowercase().as_str() {
        "compute" => "\u{1F4BB}",
        "storage" => "\u{1F4BE}",
        "database" => "\u{1F5C4}\u{FE0F}",
        "serverless" => "\u{3BB}",
        "network" => "\u{1F310}",
        "security" => "\u{1F512}",
        "analytics" => "\u{1F4CA}",
        "ml" => "\u{1F916}",
        "monitoring" => "\u{1F4C8}",
        "cdn" => "\u{1F680}",
        _ => "\u{2699}\u{FE0F}",
    }
}

/// Default 2-column grid used when a service carries no position.
fn grid_position(index: usize) -> (f64, f64) {
    let x = 300.0 + (index % 2) as f64 * 300.0;
    let y = 200.0 + (index / 2) as f64 * 200.0;
    (x, y)
}

// Empty ids count as absent so the never-empty-id invariant holds.
fn synthesize_id(supplied: Option<&str>, namespace: &str, index: usize) -> String {
    match supplied.filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => format!("{}-{}", namespace, index + 1),
    }
}

fn display_name(name: Option<&str>) -> String {
    match name {
        Some(name) => name.to_string(),
        None => UNKNOWN_SERVICE.to_string(),
    }
}

fn service_type(tag: Option<&str>) -> &str {
    tag.unwrap_or(DEFAULT_SERVICE_TYPE)
}

// First character uppercased, the rest lowercased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// Display-only identifier; collisions are acceptable because the graph is
// never persisted.
fn title_hash(title: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    title.hash(&mut hasher);
    hasher.finish() % 10_000
}
