//! Text repair stage: turns a stream of back-to-back JSON objects into a JSON array literal

/// Remove every line break and trim the result.
///
/// Raw line breaks are never valid inside a JSON string, so dropping them
/// cannot alter string content.
pub fn strip_newlines(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Insert a comma between every `}{` adjacency that sits outside a string
/// literal. Returns the repaired text and the number of separators inserted.
pub fn repair_adjacent_objects(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len() + 16);
    let mut repairs = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);

        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '}' if chars.peek() == Some(&'{') => {
                out.push(',');
                repairs += 1;
            }
            _ => {}
        }
    }

    (out, repairs)
}

/// Wrap the text in `[` `]` unless it already opens an array.
pub fn wrap_array(text: &str) -> String {
    if text.starts_with('[') {
        text.to_string()
    } else {
        format!("[{}]", text)
    }
}

/// Full repair stage: strip newlines, separate adjacent objects, wrap.
pub fn sanitize(raw: &str) -> String {
    let stripped = strip_newlines(raw);
    let (repaired, repairs) = repair_adjacent_objects(&stripped);
    if repairs > 0 {
        log::debug!("Inserted {} missing object separators", repairs);
    }
    wrap_array(&repaired)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_newlines() {
        assert_eq!(strip_newlines("\n {\"a\":1}\r\n{\"b\":2} \n"), "{\"a\":1}{\"b\":2}");
        assert_eq!(strip_newlines("  \n\n "), "");
    }

    #[test]
    fn test_repair_adjacent_objects() {
        let (text, repairs) = repair_adjacent_objects("{\"a\":1}{\"b\":2}{\"c\":3}");
        assert_eq!(text, "{\"a\":1},{\"b\":2},{\"c\":3}");
        assert_eq!(repairs, 2);
    }

    #[test]
    fn test_repair_nested_adjacency() {
        let (text, repairs) = repair_adjacent_objects("{\"a\":{\"x\":1}}{\"b\":2}");
        assert_eq!(text, "{\"a\":{\"x\":1}},{\"b\":2}");
        assert_eq!(repairs, 1);
    }

    #[test]
    fn test_repair_leaves_string_content_alone() {
        let input = r#"{"Go":{"semantic_similarity":{"score":0.5,"evidence":"fmt: }{ braces"}}}"#;
        let (text, repairs) = repair_adjacent_objects(input);
        assert_eq!(text, input);
        assert_eq!(repairs, 0);
    }

    #[test]
    fn test_repair_handles_escaped_quotes() {
        let input = r#"{"a":"say \"}{\" now"}{"b":1}"#;
        let (text, repairs) = repair_adjacent_objects(input);
        assert_eq!(text, r#"{"a":"say \"}{\" now"},{"b":1}"#);
        assert_eq!(repairs, 1);
    }

    #[test]
    fn test_repair_handles_escaped_backslash_before_quote() {
        let input = r#"{"path":"C:\\"}{"b":1}"#;
        let (text, repairs) = repair_adjacent_objects(input);
        assert_eq!(text, r#"{"path":"C:\\"},{"b":1}"#);
        assert_eq!(repairs, 1);
    }

    #[test]
    fn test_wrap_array() {
        assert_eq!(wrap_array("{\"a\":1}"), "[{\"a\":1}]");
        assert_eq!(wrap_array("[{\"a\":1}]"), "[{\"a\":1}]");
    }

    #[test]
    fn test_sanitize_pipeline() {
        let raw = "{\"status\":\"parsing\"}\n{\"Rust\":{\"semantic_similarity\":{\"score\":0.9}}}\n";
        assert_eq!(
            sanitize(raw),
            "[{\"status\":\"parsing\"},{\"Rust\":{\"semantic_similarity\":{\"score\":0.9}}}]"
        );
    }
}
