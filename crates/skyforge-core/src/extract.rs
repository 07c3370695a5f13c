//! Extraction of the structured architecture payload from hybrid model text.
//!
//! Model responses mix one fenced JSON block with free-form markdown, in no
//! particular order, and neither part is guaranteed to be present or well
//! formed. Extraction is total: absence of a payload is an expected outcome,
//! never an error, and the caller is responsible for the fallback path.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::payload::{ArchitectureDocument, ArchitecturePayload};

lazy_static! {
    // First ```json fence, non-greedy across lines. Later fences are prose.
    static ref FENCED_JSON_REGEX: Regex =
        Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").unwrap();

    // Balance-free scan from the first `{` to the last `}` with the
    // architecture key somewhere in between. Can over- or under-capture.
    static ref RAW_OBJECT_REGEX: Regex =
        Regex::new(r#"(?s)\{.*"architecture".*\}"#).unwrap();
}

/// Result of splitting a raw model response
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Parsed architecture payload, when one was found
    pub payload: Option<ArchitecturePayload>,
    /// Markdown commentary with the matched fenced block removed
    pub prose: String,
}

/// Split raw model output into a structured payload and prose commentary.
///
/// The first ```json fence is tried first; if it is missing or does not parse
/// as an architecture document, the whole text is scanned for a raw object
/// carrying the `architecture` key. Prose is the input with the matched fence
/// removed; when no fence matched, the input passes through unmodified (the
/// raw-object match is not stripped).
pub fn extract(raw: &str) -> Extraction {
    let mut payload = None;
    let mut fence_span = None;

    if let Some(caps) = FENCED_JSON_REGEX.captures(raw) {
        let whole = caps.get(0).expect("regex match has a group 0");
        fence_span = Some(whole.range());

        let body = caps.get(1).expect("fence regex has one capture").as_str();
        match serde_json::from_str::<ArchitectureDocument>(body) {
            Ok(doc) => payload = Some(doc.architecture),
            Err(err) => {
                warn!("fenced block did not parse as an architecture document: {}", err);
            }
        }
    }

    if payload.is_none() {
        if let Some(m) = RAW_OBJECT_REGEX.find(raw) {
            match serde_json::from_str::<ArchitectureDocument>(m.as_str()) {
                Ok(doc) => payload = Some(doc.architecture),
                Err(err) => {
                    debug!("raw object scan did not yield a parsable document: {}", err);
                }
            }
        }
    }

    let prose = match fence_span {
        Some(span) => {
            let mut stripped = String::with_capacity(raw.len());
            stripped.push_str(&raw[..span.start]);
            stripped.push_str(&raw[span.end..]);
            stripped.trim().to_string()
        }
        None => raw.to_string(),
    };

    Extraction { payload, prose }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WELL_FORMED: &str = concat!(
        "Here is the design.\n\n",
        "```json\n",
        r#"{"architecture": {"title": "T", "services": [{"id": "s1", "name": "EC2", "type": "compute", "cost": 29.2}], "connections": [], "alternatives": []}}"#,
        "\n```\n\n## Notes\nScale out behind a load balancer.",
    );

    #[test]
    fn extracts_payload_from_fenced_block() {
        let extraction = extract(WELL_FORMED);
        let payload = extraction.payload.expect("payload present");
        assert_eq!(payload.title.as_deref(), Some("T"));
        assert_eq!(payload.services.len(), 1);
        assert_eq!(payload.services[0].name.as_deref(), Some("EC2"));
        assert_eq!(payload.services[0].cost, 29.2);
    }

    #[test]
    fn prose_is_text_around_the_fence() {
        let extraction = extract(WELL_FORMED);
        assert!(extraction.prose.starts_with("Here is the design."));
        assert!(extraction.prose.ends_with("Scale out behind a load balancer."));
        assert!(!extraction.prose.contains("```"));
    }

    #[test]
    fn empty_input_yields_absent_payload() {
        let extraction = extract("");
        assert_eq!(extraction.payload, None);
        assert_eq!(extraction.prose, "");
    }

    #[test]
    fn plain_markdown_passes_through_unmodified() {
        let raw = "## Thoughts\nNothing structured here, just advice.";
        let extraction = extract(raw);
        assert_eq!(extraction.payload, None);
        assert_eq!(extraction.prose, raw);
    }

    #[test]
    fn only_first_fenced_block_is_considered() {
        let raw = concat!(
            "```json\n{\"architecture\": {\"title\": \"first\"}}\n```\n",
            "```json\n{\"architecture\": {\"title\": \"second\"}}\n```\n",
        );
        let extraction = extract(raw);
        assert_eq!(
            extraction.payload.unwrap().title.as_deref(),
            Some("first")
        );
        // The second fence survives as prose.
        assert!(extraction.prose.contains("second"));
    }

    #[test]
    fn malformed_fence_is_stripped_but_yields_no_payload() {
        // The raw scan starts at the *first* `{`, which here is the broken
        // fence body, so it over-captures and parsing fails. That imprecision
        // is part of the contract.
        let raw = concat!(
            "```json\n{not json at all}\n```\n",
            "Meanwhile the real thing: {\"architecture\": {\"title\": \"raw\"}}",
        );
        let extraction = extract(raw);
        assert_eq!(extraction.payload, None);
        // Fence was matched, so it is stripped from prose even though it
        // failed to parse.
        assert!(!extraction.prose.contains("not json"));
        assert!(extraction.prose.contains("the real thing"));
    }

    #[test]
    fn fence_without_architecture_key_falls_through() {
        let raw = "```json\n{\"weather\": \"sunny\"}\n```\nNo design today.";
        let extraction = extract(raw);
        assert_eq!(extraction.payload, None);
        assert_eq!(extraction.prose, "No design today.");
    }

    #[test]
    fn raw_object_without_fence_keeps_prose_intact() {
        let raw = "Take {\"architecture\": {\"title\": \"inline\"}} as a start.";
        let extraction = extract(raw);
        assert_eq!(extraction.payload.unwrap().title.as_deref(), Some("inline"));
        assert_eq!(extraction.prose, raw);
    }

    #[test]
    fn text_without_architecture_key_returns_raw_unmodified() {
        let raw = "{ \"something\": \"else\" } and some trailing words";
        let extraction = extract(raw);
        assert_eq!(extraction.payload, None);
        assert_eq!(extraction.prose, raw);
    }

    #[test]
    fn never_panics_on_adversarial_input() {
        for raw in [
            "```json",
            "```json\n```",
            "{{{{}}}}",
            "```json\n{\"architecture\":}\n```",
            "{\"architecture\"",
            "}{",
        ] {
            assert!(extract(raw).payload.is_none());
        }
    }
}
