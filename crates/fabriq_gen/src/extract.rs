//! Markdown fence stripping for model output.
//!
//! Models routinely wrap file content in a triple-backtick fence, often with
//! a language tag. The extractor returns the enclosed body when such a fence
//! is present and the input unchanged otherwise.

const FENCE_PATTERN: &str = r"(?sm)^```[^\n]*\n(.*?)\n?^```[ \t]*$";

/// Strip one outer fenced code block from `text` if present.
///
/// Fence markers are recognized only at the start of a line; the body may
/// span multiple lines. Applying the function to an already-unfenced body is
/// the identity.
pub fn extract_code(text: &str) -> String {
    let Some(re) = regex::Regex::new(FENCE_PATTERN).ok() else {
        return text.to_string();
    };

    match re.captures(text).and_then(|caps| caps.get(1)) {
        Some(body) => body.as_str().to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfenced_text_is_unchanged() {
        let text = "print('hello')\nprint('world')";
        assert_eq!(extract_code(text), text);
    }

    #[test]
    fn test_fences_are_stripped() {
        let text = "```python\nprint('hello')\nprint('world')\n```";
        assert_eq!(extract_code(text), "print('hello')\nprint('world')");
    }

    #[test]
    fn test_fence_without_language_tag() {
        let text = "```\nbody\n```";
        assert_eq!(extract_code(text), "body");
    }

    #[test]
    fn test_surrounding_prose_is_dropped() {
        let text = "Here is the file:\n```js\nconsole.log(1);\n```\nLet me know!";
        assert_eq!(extract_code(text), "console.log(1);");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "```python\nx = 1\n```";
        let once = extract_code(text);
        assert_eq!(extract_code(&once), once);
    }

    #[test]
    fn test_multiline_body_is_preserved() {
        let body = "def main():\n    pass\n\n\nmain()";
        let fenced = format!("```python\n{}\n```", body);
        assert_eq!(extract_code(&fenced), body);
    }

    #[test]
    fn test_backticks_mid_line_are_not_fences() {
        let text = "use `foo` and ```bar``` inline";
        assert_eq!(extract_code(text), text);
    }

    #[test]
    fn test_empty_fenced_body() {
        assert_eq!(extract_code("```\n\n```"), "");
    }
}
