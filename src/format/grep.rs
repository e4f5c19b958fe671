//! Case-insensitive line filtering for `grep`.

/// Text to filter: either one newline-joined string or pre-split lines.
#[derive(Debug, Clone)]
pub enum GrepSource<'a> {
    Text(&'a str),
    Lines(Vec<&'a str>),
}

impl<'a> From<&'a str> for GrepSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for GrepSource<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<Option<&'a str>> for GrepSource<'a> {
    fn from(text: Option<&'a str>) -> Self {
        Self::Text(text.unwrap_or(""))
    }
}

impl<'a, S: AsRef<str>> From<&'a [S]> for GrepSource<'a> {
    fn from(lines: &'a [S]) -> Self {
        Self::Lines(lines.iter().map(AsRef::as_ref).collect())
    }
}

impl<'a, S: AsRef<str>> From<&'a Vec<S>> for GrepSource<'a> {
    fn from(lines: &'a Vec<S>) -> Self {
        Self::from(lines.as_slice())
    }
}

/// Returns the lines containing `pattern`, ignoring case, in input order.
///
/// Empty text or an empty pattern matches nothing.
pub fn grep_filter<'a>(source: impl Into<GrepSource<'a>>, pattern: &str) -> Vec<&'a str> {
    if pattern.is_empty() {
        return Vec::new();
    }
    let lines = match source.into() {
        GrepSource::Text("") => return Vec::new(),
        GrepSource::Text(text) => text.split('\n').collect(),
        GrepSource::Lines(lines) => lines,
    };

    let needle = pattern.to_lowercase();
    lines
        .into_iter()
        .filter(|line| line.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs() {
        assert!(grep_filter("", "foo").is_empty());
        assert!(grep_filter("hello\nworld", "").is_empty());
        assert!(grep_filter(None::<&str>, "pattern").is_empty());
    }

    #[test]
    fn test_filters_lines() {
        assert_eq!(
            grep_filter("hello\nworld\nhello world", "hello"),
            vec!["hello", "hello world"]
        );
        assert!(grep_filter("hello\nworld", "xyz").is_empty());
        assert_eq!(grep_filter("single line", "single"), vec!["single line"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(grep_filter("Hello\nWORLD", "hello"), vec!["Hello"]);
        assert_eq!(grep_filter("Hello\nWORLD", "World"), vec!["WORLD"]);
    }

    #[test]
    fn test_line_sequence_input() {
        let lines = vec!["abc".to_string(), "def".to_string(), "abcdef".to_string()];
        assert_eq!(grep_filter(&lines, "abc"), vec!["abc", "abcdef"]);

        let borrowed = ["abc", "def"];
        assert_eq!(grep_filter(&borrowed[..], "DEF"), vec!["def"]);
    }
}
