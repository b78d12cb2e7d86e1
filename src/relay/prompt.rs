/// The CADalytics reference-manual instruction sent with every upstream call.
/// Ends with the exact JSON output schema the web client renders.
pub const SYSTEM_PROMPT: &str = include_str!("../../prompts/system_prompt.txt");
