//! The pattern table shared by every rewrite pass.
//!
//! Patterns never change at runtime, so they are compiled once per process
//! and handed out as a read-only [`Patterns`] value.

use std::sync::OnceLock;

use regex::Regex;

use super::kinds::{CalloutForm, CalloutKind, MathSymbol, SpanKind, Token};

/// A directive callout pattern and what it produces.
#[derive(Debug)]
pub struct CalloutPattern {
    pub kind: CalloutKind,
    pub form: CalloutForm,
    pub regex: Regex,
}

#[derive(Debug)]
pub struct Patterns {
    // protection
    pub token: Regex,
    pub reserved_char: Regex,
    pub code_block: Regex,
    pub inline_code: Regex,
    pub inline_math: Regex,
    pub display_math: Regex,
    pub math_marker: Regex,
    pub display_math_env: Regex,

    // embeds
    pub image: Regex,
    pub code_ref: Regex,

    // inline and headings
    pub warning_tag: Regex,
    pub underline: Regex,
    pub red_text: Regex,
    /// `####`, `###`, `##`, `#` in that order, with the section command each
    /// one becomes.
    pub headings: Vec<(Regex, &'static str)>,
    /// Cheat-sheet headings: one sectioning level per `#`.
    pub outline_headings: Vec<(Regex, &'static str)>,
    pub bold: Regex,
    pub italic: Regex,
    pub rule: Regex,
    pub fullwidth_rule: Regex,

    // callouts, in application order
    pub callouts: Vec<CalloutPattern>,
    pub fine: Regex,
    pub fine_with_num: Regex,
    pub fine_with_percent: Regex,
    pub href: Regex,
    pub qed: Regex,
    pub quote: Regex,
    pub fullwidth_block: Regex,

    // cheat sheets
    pub sheet_box: Regex,

    // line classifiers
    pub list_item: Regex,
    pub table_separator: Regex,
}

/// Returns the process-wide pattern table.
pub fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(Patterns::build)
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid built-in pattern")
}

fn token_char(c: char) -> String {
    format!(r"\x{{{:X}}}", c as u32)
}

impl Patterns {
    fn build() -> Self {
        let open = token_char(Token::OPEN);
        let close = token_char(Token::CLOSE);
        let tags: String = [
            SpanKind::Block,
            SpanKind::Inline,
            SpanKind::Table,
            SpanKind::Reserved,
        ]
        .iter()
        .map(|k| k.tag())
        .collect();
        let codes: String = MathSymbol::ALL.iter().map(|s| s.code()).collect();

        Self {
            token: compile(&format!("{open}[{tags}][0-9]+{close}")),
            reserved_char: compile(&format!("[{open}{close}]")),
            code_block: compile(r"(?s)```.*?```"),
            inline_code: compile(r"`[^`\n]+?`"),
            inline_math: compile(r"\$(.*?)\$"),
            display_math: compile(r"(?s)\$\$(.*?)\$\$"),
            math_marker: compile(&format!(
                "{open}{}([{codes}]){close}",
                MathSymbol::PREFIX
            )),
            display_math_env: compile(r"(?s)\n?\$\$(.*?)\$\$"),

            image: compile(r"!\[\[([^|\]]+)(?:\|([^\]]+))?\]\]"),
            code_ref: compile(r"\[\[([^|\]\n]+)\|([^|\]\n]+)(?:\|(\d+):(\d+))?\]\]"),

            warning_tag: compile(r"#Warning"),
            underline: compile(r"<u>(.*?)</u>"),
            red_text: compile(r##"<font color="#ff0000">(.*?)</font>"##),
            headings: vec![
                (compile(r"(?m)^####[ \t]*(.+)$"), "subsubsection"),
                (compile(r"(?m)^###[ \t]*(.+)$"), "subsection"),
                (compile(r"(?m)^##[ \t]*(.+)$"), "section"),
                (compile(r"(?m)^#[ \t]*(.+)$"), "section"),
            ],
            outline_headings: vec![
                (compile(r"(?m)^###[ \t]*(.+)$"), "subsubsection"),
                (compile(r"(?m)^##[ \t]*(.+)$"), "subsection"),
                (compile(r"(?m)^#[ \t]*(.+)$"), "section"),
            ],
            bold: compile(r"\*\*(.+?)\*\*"),
            // A star right before `}` closes a LaTeX name such as `figure*`.
            italic: compile(r"\*([^*}\n][^*\n]*?)\*"),
            // Blank lines touching a rule are absorbed into the rule's own spacing.
            rule: compile(r"(?m)^\s*---\s*$"),
            fullwidth_rule: compile(r"(?m)^\s*!---\s*$"),

            callouts: callout_patterns(),
            fine: compile(r"\[fine\](.+?)\[fine\]"),
            fine_with_num: compile(r"%%[ \t]*\[(-?\d*\.?\d+)\][ \t]*(.+?)[ \t]*%%"),
            fine_with_percent: compile(r"%%(.+?)%%"),
            href: compile(r"\[([^\]]+)\]\(([^)]+)\)"),
            qed: compile(r"(?m)\bQ\.?E\.?D\.?[.!?\s]*$"),
            quote: compile(r"(?m)^(?:>.*(?:\n|$))+"),
            sheet_box: compile(r"(?m)^---[ \t]*\n([^\n]*)\n((?s:.*?))\n---[ \t]*$"),
            fullwidth_block: compile(r"(?s)~~(?:u\n|\n)(.*?)~~(?:d\n|\n)"),

            // A bare `-` is an empty item; `-1` and `---` are not items.
            list_item: compile(r"^([ \t]*)-(?:[ \t]+(.*))?$"),
            table_separator: compile(r"^\|[-:| ]+\|$"),
        }
    }
}

fn callout_patterns() -> Vec<CalloutPattern> {
    let mut out = Vec::new();
    for form in CalloutForm::PRECEDENCE {
        for kind in CalloutKind::DIRECTIVES {
            let Some(keyword) = kind.keyword() else {
                continue;
            };
            if !kind.forms().contains(&form) {
                continue;
            }
            let head = format!(r"(?m)^[ \t]*>[ \t]*\[!{}\][ \t]*", regex::escape(keyword));
            let pattern = match form {
                CalloutForm::Titled => format!(r"{head}(?P<title>.+?)[ \t]*@[ \t]*(?P<body>.*)$"),
                CalloutForm::Block => {
                    format!(r"{head}(?P<title>.*?)[ \t]*\n(?P<body>(?:[ \t]*>.*(?:\n|$))+)")
                }
                CalloutForm::Plain => format!(r"{head}(?P<body>.+)$"),
            };
            out.push(CalloutPattern {
                kind,
                form,
                regex: compile(&pattern),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        let p = patterns();
        assert_eq!(p.headings.len(), 4);
        assert_eq!(p.outline_headings.len(), 3);
        assert!(!p.callouts.is_empty());
    }

    #[test]
    fn titled_callouts_precede_plain_ones() {
        let p = patterns();
        let first_plain = p
            .callouts
            .iter()
            .position(|c| c.form == CalloutForm::Plain)
            .unwrap();
        let last_titled = p
            .callouts
            .iter()
            .rposition(|c| c.form == CalloutForm::Titled)
            .unwrap();
        assert!(last_titled < first_plain);
    }

    #[test]
    fn token_pattern_matches_rendered_refs() {
        let token = crate::convert::kinds::SpanRef::new(SpanKind::Table, 7).to_string();
        assert!(patterns().token.is_match(&token));
        assert!(!patterns().token.is_match(&MathSymbol::Minus.marker()));
    }

    #[test]
    fn math_marker_pattern_matches_every_marker() {
        for s in MathSymbol::ALL {
            assert!(patterns().math_marker.is_match(&s.marker()));
        }
    }
}
