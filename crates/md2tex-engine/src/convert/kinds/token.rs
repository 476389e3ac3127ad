use std::fmt;

/// Placeholder token types that own the reserved delimiter characters.
///
/// Every placeholder the pipeline writes into the buffer is wrapped in
/// [`Token::OPEN`] and [`Token::CLOSE`], two private-use code points. Any
/// occurrence of those characters in the source is itself protected as a
/// [`SpanKind::Reserved`] span before other tokens are written, so a token in
/// the buffer is always one the pipeline created.
pub struct Token;

impl Token {
    pub const OPEN: char = '\u{E000}';
    pub const CLOSE: char = '\u{E001}';
}

/// What a protected span holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// A fenced code block, delimiters included.
    Block,
    /// An inline code span, backticks included.
    Inline,
    /// A pipe table awaiting conversion.
    Table,
    /// A source character that collides with [`Token::OPEN`] or [`Token::CLOSE`].
    Reserved,
}

impl SpanKind {
    pub const fn tag(self) -> char {
        match self {
            SpanKind::Block => 'B',
            SpanKind::Inline => 'I',
            SpanKind::Table => 'T',
            SpanKind::Reserved => 'R',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'B' => Some(SpanKind::Block),
            'I' => Some(SpanKind::Inline),
            'T' => Some(SpanKind::Table),
            'R' => Some(SpanKind::Reserved),
            _ => None,
        }
    }
}

/// Typed reference to a protected span, rendered into the buffer as a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanRef {
    pub kind: SpanKind,
    pub index: usize,
}

impl SpanRef {
    pub fn new(kind: SpanKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Parses a complete token, e.g. the text matched by the token pattern.
    pub fn parse(token: &str) -> Option<Self> {
        let inner = token
            .strip_prefix(Token::OPEN)?
            .strip_suffix(Token::CLOSE)?;
        let mut chars = inner.chars();
        let kind = SpanKind::from_tag(chars.next()?)?;
        let index = chars.as_str().parse().ok()?;
        Some(Self { kind, index })
    }
}

impl fmt::Display for SpanRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            Token::OPEN,
            self.kind.tag(),
            self.index,
            Token::CLOSE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_back_display() {
        let r = SpanRef::new(SpanKind::Inline, 12);
        assert_eq!(SpanRef::parse(&r.to_string()), Some(r));
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let token = format!("{}X3{}", Token::OPEN, Token::CLOSE);
        assert_eq!(SpanRef::parse(&token), None);
    }

    #[test]
    fn parse_rejects_missing_delimiters() {
        assert_eq!(SpanRef::parse("B3"), None);
    }
}
