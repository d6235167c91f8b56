//! Relative API paths

use std::fmt;

/// Path relative to the API endpoint, built segment by segment.
///
/// Rendered without a leading separator and always with a trailing one, so
/// that joining it onto the endpoint keeps every segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a path at a static literal, e.g. `"stacks"`.
    pub fn root(segment: &str) -> Self {
        Self::new().segment(segment)
    }

    /// Append one segment. Identifiers are percent-encoded, so slugs
    /// containing separators stay a single segment.
    pub fn segment(mut self, segment: impl fmt::Display) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}/", urlencoding::encode(segment))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_always_end_with_separator() {
        assert_eq!(ApiPath::root("stacks").to_string(), "stacks/");
        assert_eq!(
            ApiPath::root("connection-types")
                .segment(3)
                .segment("connections")
                .segment(42)
                .to_string(),
            "connection-types/3/connections/42/"
        );
    }

    #[test]
    fn identifiers_are_encoded_as_single_segments() {
        let path = ApiPath::root("stacks").segment("a/b c");
        assert_eq!(path.to_string(), "stacks/a%2Fb%20c/");
        assert_eq!(path.segments().len(), 2);
    }

    #[test]
    fn empty_path_renders_empty() {
        assert_eq!(ApiPath::new().to_string(), "");
    }
}
