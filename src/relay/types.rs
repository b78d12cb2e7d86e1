use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Shape the model is instructed to answer in. The relay passes answers
/// through untouched; this type is for consumers that want typed access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandReference {
    #[serde(default)]
    pub commands: Vec<CommandEntry>,
    #[serde(default)]
    pub platform_notes: PlatformNotes,
    #[serde(default)]
    pub tip: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub platform: String,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub related_commands: Vec<RelatedCommand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCommand {
    pub name: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformNotes {
    #[serde(default)]
    pub civil3d: Option<String>,
    #[serde(default)]
    pub microstation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_command_reference_field_names() {
        let reference: CommandReference = serde_json::from_value(json!({
            "commands": [{
                "name": "OFFSET",
                "aliases": ["O"],
                "platform": "AutoCAD",
                "description": "Creates concentric copies.",
                "steps": ["Type `O`."],
                "relatedCommands": [{ "name": "PEDIT", "desc": "Join segments first." }]
            }],
            "platformNotes": { "civil3d": null, "microstation": "Use Move Parallel." },
            "tip": null,
            "warning": "Offset of a spline is approximate."
        }))
        .unwrap();

        assert_eq!(reference.commands[0].related_commands[0].name, "PEDIT");
        assert_eq!(
            reference.platform_notes.microstation.as_deref(),
            Some("Use Move Parallel.")
        );
        assert_eq!(reference.tip, None);

        let round = serde_json::to_value(&reference).unwrap();
        assert!(round["commands"][0].get("relatedCommands").is_some());
        assert!(round.get("platformNotes").is_some());
    }
}
