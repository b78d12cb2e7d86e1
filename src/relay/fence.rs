const FENCE: &str = "```";

/// Removes code fences (an opening ```` ``` ```` with an optional language
/// tag, and a closing ```` ``` ````) from the ends of `text`, then trims it.
///
/// Fences are peeled off the start and end until none remain, so nested or
/// doubled fences are fully removed and a second call is a no-op. Backticks
/// anywhere else, such as inside string values, are left alone.
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();
    loop {
        let next = strip_one_layer(body);
        if next.len() == body.len() {
            return body;
        }
        body = next;
    }
}

fn strip_one_layer(text: &str) -> &str {
    let mut body = text;

    if let Some(rest) = body.strip_prefix(FENCE) {
        body = skip_language_tag(rest);
    }

    let body = body.trim_end();
    body.strip_suffix(FENCE).unwrap_or(body).trim()
}

// The tag is the run of identifier characters right after the fence
// (`json`, `JSON`, `json5`, `c++`) and must start with a letter. It ends at
// the first other character, so `json{` and `json\n` both lose the tag.
// A bare literal such as ```` ```true``` ```` is kept as the body.
fn skip_language_tag(rest: &str) -> &str {
    if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return rest;
    }

    let tag_end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.')))
        .unwrap_or(rest.len());
    let after = &rest[tag_end..];

    if after.trim().trim_start_matches('`').trim().is_empty() {
        rest
    } else {
        after
    }
}
