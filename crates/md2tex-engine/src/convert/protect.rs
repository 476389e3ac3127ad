use regex::Captures;

use super::{
    kinds::{SpanKind, SpanRef},
    patterns::patterns,
};

/// Originals of every span lifted out of the buffer for one conversion.
///
/// Populated by [`ProtectedSpans::protect`], read back only by the restore
/// functions, and dropped with the conversion that owns it.
#[derive(Debug, Default)]
pub struct ProtectedSpans {
    blocks: Vec<String>,
    inlines: Vec<String>,
    reserved: Vec<String>,
}

impl ProtectedSpans {
    /// Replaces fenced code blocks and inline code spans with tokens.
    ///
    /// Source characters that collide with the token delimiters are lifted
    /// first, so every token left in the returned buffer is one of ours.
    /// Blocks are taken before inline spans so a backtick pair inside a fence
    /// never becomes an inline span.
    pub fn protect(text: &str) -> (String, Self) {
        let p = patterns();
        let mut spans = Self::default();

        let text = p
            .reserved_char
            .replace_all(text, |c: &Captures| {
                Self::push(&mut spans.reserved, SpanKind::Reserved, &c[0]).to_string()
            })
            .into_owned();
        let text = p
            .code_block
            .replace_all(&text, |c: &Captures| {
                Self::push(&mut spans.blocks, SpanKind::Block, &c[0]).to_string()
            })
            .into_owned();
        let text = p
            .inline_code
            .replace_all(&text, |c: &Captures| {
                Self::push(&mut spans.inlines, SpanKind::Inline, &c[0]).to_string()
            })
            .into_owned();

        log::trace!(
            "protected {} code blocks, {} inline spans, {} reserved characters",
            spans.blocks.len(),
            spans.inlines.len(),
            spans.reserved.len()
        );
        (text, spans)
    }

    fn push(list: &mut Vec<String>, kind: SpanKind, original: &str) -> SpanRef {
        list.push(original.to_string());
        SpanRef::new(kind, list.len() - 1)
    }

    pub fn get(&self, r: SpanRef) -> Option<&str> {
        let list = match r.kind {
            SpanKind::Block => &self.blocks,
            SpanKind::Inline => &self.inlines,
            SpanKind::Reserved => &self.reserved,
            SpanKind::Table => return None,
        };
        list.get(r.index).map(String::as_str)
    }

    #[cfg(test)]
    fn blocks(&self) -> &[String] {
        &self.blocks
    }

    #[cfg(test)]
    fn inlines(&self) -> &[String] {
        &self.inlines
    }

    /// Puts code blocks and inline spans back, passing each original through
    /// `render`. Reserved characters stay protected.
    pub fn restore_code<F>(&self, text: &str, mut render: F) -> String
    where
        F: FnMut(SpanKind, &str) -> String,
    {
        replace_tokens(text, |r| match r.kind {
            SpanKind::Block | SpanKind::Inline => self.get(r).map(|s| render(r.kind, s)),
            _ => None,
        })
    }

    /// Puts the lifted delimiter characters back.
    pub fn release_reserved(&self, text: &str) -> String {
        replace_tokens(text, |r| match r.kind {
            SpanKind::Reserved => self.get(r).map(str::to_string),
            _ => None,
        })
    }

    /// Undoes [`ProtectedSpans::protect`] without styling anything.
    pub fn restore(&self, text: &str) -> String {
        let text = self.restore_code(text, |_, s| s.to_string());
        self.release_reserved(&text)
    }
}

/// Replaces every token for which `lookup` returns text; other tokens are
/// left in place.
pub fn replace_tokens<F>(text: &str, mut lookup: F) -> String
where
    F: FnMut(SpanRef) -> Option<String>,
{
    patterns()
        .token
        .replace_all(text, |c: &Captures| {
            SpanRef::parse(&c[0])
                .and_then(&mut lookup)
                .unwrap_or_else(|| c[0].to_string())
        })
        .into_owned()
}
