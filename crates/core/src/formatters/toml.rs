use crate::SlideRecord;

/// Convert slides to TOML as an array of `[[slides]]` tables
///
/// Manual TOML serialization to avoid adding the toml crate dependency
pub fn slides_to_toml(slides: &[SlideRecord]) -> String {
    let mut toml = String::new();

    for (index, slide) in slides.iter().enumerate() {
        if index > 0 {
            toml.push('\n');
        }
        toml.push_str("[[slides]]\n");
        toml.push_str(&format!("title = {}\n", toml_escape_string(&slide.title)));
        toml.push_str(&format!("description = {}\n", toml_escape_string(&slide.description)));
        if let Some(image) = &slide.image_url {
            toml.push_str(&format!("image_url = {}\n", toml_escape_string(image)));
        }
        toml.push_str(&format!("link_url = {}\n", toml_escape_string(&slide.link_url)));
    }

    toml
}

/// Escape a string as a TOML basic string
///
/// Control characters TOML forbids in basic strings become escapes.
fn toml_escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 2);
    escaped.push('"');
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c <= '\u{1f}' || c == '\u{7f}' => {
                escaped.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}
