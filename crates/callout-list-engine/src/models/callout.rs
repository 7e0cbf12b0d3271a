use regex::Regex;
use std::sync::OnceLock;

/// A single callout block: a run of `>`-prefixed lines whose first line
/// carries a `[!type]` tag.
///
/// All callout syntax knowledge lives here; the line scanner in
/// `parsing::callouts` only consults these constants and the header parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutBlock {
    lines: Vec<String>,
    kind: Option<String>,
    title: Option<String>,
}

impl CalloutBlock {
    /// The blockquote prefix a callout line must start with.
    pub const QUOTE_PREFIX: char = '>';

    /// The exact prefix that opens a new callout block.
    pub const OPENING_PREFIX: &'static str = ">[!";

    /// Build a block from the buffered lines of one quoted run.
    ///
    /// Returns `None` for an empty buffer; a block always has length >= 1.
    /// The kind and title are extracted from the first line; a first line
    /// that does not match the header pattern yields a block with no kind.
    pub fn from_lines(lines: Vec<String>) -> Option<Self> {
        let first = lines.first()?;
        let (kind, title) = Self::parse_header(first);
        Some(Self { lines, kind, title })
    }

    /// The raw lines of the block, in source order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The declared callout type, exactly as written (case-sensitive,
    /// untrimmed). `None` when the header line is malformed.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// The trailing title text after the `[!type]` tag, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Parse `>[!kind] title` out of a header line.
    fn parse_header(line: &str) -> (Option<String>, Option<String>) {
        static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
        let header_regex = HEADER_REGEX
            .get_or_init(|| Regex::new(r"^>\[!([^\]]+)\](.*)?$").expect("Invalid header regex"));

        match header_regex.captures(line) {
            Some(caps) => {
                let kind = caps.get(1).map(|m| m.as_str().to_string());
                let title = caps
                    .get(2)
                    .map(|m| m.as_str().trim())
                    .filter(|t| !t.is_empty())
                    .map(|t| t.to_string());
                (kind, title)
            }
            None => (None, None),
        }
    }
}
