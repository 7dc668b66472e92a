// Cross-cutting prompt fragments shared by every prompt the service sends.
// Feature-specific prompts live next to the feature (see recommendation/prompts.rs).

/// Appended to system instructions to enforce JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with valid JSON only. \
    Do NOT include any text outside the JSON document. \
    Do NOT use markdown code fences.";

/// Fills `{name}` placeholders in a template in a single pass.
/// Values are inserted verbatim and are never themselves re-expanded.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let replacement = tail.find('}').and_then(|close| {
            let key = &tail[1..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close + 1))
        });

        match replacement {
            Some((value, consumed)) => {
                out.push_str(value);
                rest = &tail[consumed..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
