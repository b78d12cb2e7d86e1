use cadalytics_relay::config::{Config, LlmConfig};
use serde_json::{Value, json};

pub const TEST_API_KEY: &str = "test-api-key";

/// Sample question used by the end-to-end scenarios.
pub const OFFSET_QUERY: &str = "how do I offset a polyline by 10 feet";

/// LLM config pointed at a mock upstream.
pub fn create_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: Some(TEST_API_KEY.to_string()),
        ..LlmConfig::default()
    }
}

pub fn create_test_config(base_url: &str) -> Config {
    Config {
        llm: create_llm_config(base_url),
        ..Config::default()
    }
}

/// A well-formed answer following the output schema.
pub fn offset_reference() -> Value {
    json!({
        "commands": [{
            "name": "OFFSET",
            "aliases": ["O"],
            "platform": "AutoCAD / Civil 3D",
            "description": "Creates a parallel copy of a polyline at a set distance.",
            "steps": [
                "Type `O` and press Enter.",
                "Enter `10` for the offset distance.",
                "Select the polyline, then click the side to offset toward."
            ],
            "relatedCommands": [
                { "name": "PEDIT", "desc": "Join segments into one polyline before offsetting" }
            ]
        }],
        "platformNotes": {
            "civil3d": "Drawing units must be feet for a 10 unit offset to mean 10 feet.",
            "microstation": null
        },
        "tip": "Set OFFSETGAPTYPE before offsetting closed polylines with arcs.",
        "warning": null
    })
}

/// Anthropic Messages API success body wrapping `text` in one text block.
pub fn messages_response(text: &str) -> Value {
    json!({
        "id": "msg_01XFDUDYJgAACzvnptvVoYEL",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-6",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 2095, "output_tokens": 503 }
    })
}
