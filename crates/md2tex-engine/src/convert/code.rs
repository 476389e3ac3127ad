use super::{kinds::SpanKind, latex, options::Options};

/// Styles one restored code span.
///
/// Fenced blocks become `lstlisting` environments holding everything between
/// the fences verbatim; the info string stays on the `\begin` line, where
/// listings ignores it. Inline spans become `\texttt` with LaTeX specials
/// escaped.
pub fn render_span(kind: SpanKind, original: &str, options: &Options) -> String {
    match kind {
        SpanKind::Block => {
            let inner = strip_delimiters(original, "```");
            format!(
                "\\begin{{lstlisting}}[{}]{inner}\\end{{lstlisting}}",
                options.listing_options
            )
        }
        SpanKind::Inline => {
            let inner = strip_delimiters(original, "`");
            format!("\\texttt{{{}}}", latex::escape_text(inner))
        }
        SpanKind::Table | SpanKind::Reserved => original.to_string(),
    }
}

fn strip_delimiters<'a>(s: &'a str, delim: &str) -> &'a str {
    s.strip_prefix(delim)
        .and_then(|rest| rest.strip_suffix(delim))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inline_code_is_escaped() {
        let out = render_span(SpanKind::Inline, "`a_b{c}`", &Options::default());
        assert_eq!(out, r"\texttt{a\_b\{c\}}");
    }

    #[test]
    fn block_keeps_content_verbatim() {
        let options = Options {
            listing_options: "style=py".to_string(),
            ..Options::default()
        };
        let out = render_span(SpanKind::Block, "```python\nx_1 = {}\n```", &options);
        assert_eq!(
            out,
            "\\begin{lstlisting}[style=py]python\nx_1 = {}\n\\end{lstlisting}"
        );
    }
}
