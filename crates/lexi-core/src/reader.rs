//! Tag line reader — splits raw SFM text into trimmed lines and classifies
//! each one by its leading backslash tag.
//!
//! A line is classified by its first whitespace-delimited token, looked up in
//! a static [`phf`] table. Lines whose token is not in the table (including
//! lines that do not start with `\` at all) classify as `None` and are dropped
//! by the parser without complaint.

use phf::phf_map;

/// Every SFM marker the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `\lx` — starts a new entry.
    Lexeme,
    /// `\va`
    Variant,
    /// `\pdl`
    DialectLabel,
    /// `\pdv`
    DialectVariant,
    /// `\sn` — starts a new sense.
    SenseNumber,
    /// `\ps`
    PartOfSpeech,
    /// `\ge`
    Gloss,
    /// `\so`
    Source,
    /// `\sd`
    SemanticDomain,
    /// `\de`
    Definition,
}

static TAGS: phf::Map<&'static str, Tag> = phf_map! {
    "\\lx" => Tag::Lexeme,
    "\\va" => Tag::Variant,
    "\\pdl" => Tag::DialectLabel,
    "\\pdv" => Tag::DialectVariant,
    "\\sn" => Tag::SenseNumber,
    "\\ps" => Tag::PartOfSpeech,
    "\\ge" => Tag::Gloss,
    "\\so" => Tag::Source,
    "\\sd" => Tag::SemanticDomain,
    "\\de" => Tag::Definition,
};

impl Tag {
    /// The marker as it appears in the file, backslash included.
    pub fn token(self) -> &'static str {
        match self {
            Tag::Lexeme => "\\lx",
            Tag::Variant => "\\va",
            Tag::DialectLabel => "\\pdl",
            Tag::DialectVariant => "\\pdv",
            Tag::SenseNumber => "\\sn",
            Tag::PartOfSpeech => "\\ps",
            Tag::Gloss => "\\ge",
            Tag::Source => "\\so",
            Tag::SemanticDomain => "\\sd",
            Tag::Definition => "\\de",
        }
    }

    /// Number of leading characters removed before the value is trimmed:
    /// the token plus its single separator character.
    pub fn prefix_len(self) -> usize {
        self.token().chars().count() + 1
    }

    /// Look a marker token up in the tag table.
    pub fn from_token(token: &str) -> Option<Tag> {
        TAGS.get(token).copied()
    }

    /// Extract this tag's value from a line that starts with its token.
    ///
    /// Removes [`prefix_len`](Tag::prefix_len) characters and trims the rest.
    /// A bare marker with nothing after it yields `""`.
    pub fn value(self, line: &str) -> &str {
        let start = line
            .char_indices()
            .nth(self.prefix_len())
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        line[start..].trim()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// A recognised tag line, borrowing its value from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLine<'a> {
    pub tag: Tag,
    pub value: &'a str,
}

/// Trimmed, non-blank lines of `text`, in order. Lazy.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Classify one trimmed line. Returns `None` for unrecognised markers.
pub fn classify(line: &str) -> Option<TagLine<'_>> {
    let token = line.split_whitespace().next()?;
    let tag = Tag::from_token(token)?;
    Some(TagLine {
        tag,
        value: tag.value(line),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
