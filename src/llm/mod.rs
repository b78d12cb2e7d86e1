mod client;
mod types;

pub use client::{AnthropicClient, LlmClient, check_status};
pub use types::*;
