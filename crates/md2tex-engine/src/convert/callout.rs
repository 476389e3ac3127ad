use regex::Captures;

use super::{
    kinds::{CalloutForm, CalloutKind, Construct},
    latex,
    options::Options,
    patterns::patterns,
};

/// A recognized callout. Title and body are raw dialect text; the passes that
/// run later still see and convert whatever they contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callout {
    pub kind: CalloutKind,
    pub title: Option<String>,
    pub body: String,
}

impl Callout {
    pub fn new(kind: CalloutKind, title: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.filter(|t| !t.is_empty()).map(str::to_string),
            body: body.into(),
        }
    }

    pub fn to_latex(&self, options: &Options) -> String {
        match self.kind.construct() {
            Construct::Environment(name) => latex::environment(
                name,
                &self.body,
                self.title.as_deref(),
                Some(options.block_spacing.as_str()),
            ),
            Construct::Command(name) => latex::command(name, self.title.as_deref(), &self.body),
        }
    }
}

/// Strips the quote marker and one following space from every body line.
pub fn strip_quote_markers(body: &str) -> String {
    body.lines()
        .map(|line| {
            let line = line.trim_start();
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Converts directive callouts, fine print, links, proof ends, plain quotes
/// and full-width blocks.
///
/// Expects math symbols to be masked already; a `[` or `-` inside math would
/// otherwise read as link syntax.
pub fn convert_callouts(text: &str, options: &Options) -> String {
    let p = patterns();
    let mut text = text.to_string();

    for cp in &p.callouts {
        text = cp
            .regex
            .replace_all(&text, |c: &Captures| {
                let title = c.name("title").map(|m| m.as_str().trim());
                let body = c.name("body").map_or("", |m| m.as_str());
                let callout = match (cp.kind, cp.form) {
                    // The hint's text is its body, never a title.
                    (CalloutKind::Hint, _) => Callout::new(CalloutKind::Hint, None, body.trim()),
                    (kind, CalloutForm::Plain) => Callout::new(kind, None, body),
                    (kind, _) => Callout::new(kind, title, strip_quote_markers(body)),
                };
                callout.to_latex(options)
            })
            .into_owned();
    }

    text = convert_fine_print(&text, options);
    text = convert_links(&text);
    // The proof-end marker closes its paragraph.
    text = p.qed.replace_all(&text, "\\qedz\n").into_owned();
    text = convert_quotes(&text, options);
    p.fullwidth_block
        .replace_all(&text, |c: &Captures| {
            Callout::new(CalloutKind::FullWidth, None, c[1].trim()).to_latex(options)
        })
        .into_owned()
}

/// `[fine]x[fine]`, then `%%[n] x %%`, then `%%x%%`.
fn convert_fine_print(text: &str, options: &Options) -> String {
    let p = patterns();
    let fine = |param: Option<&str>, body: &str| {
        Callout::new(CalloutKind::FinePrint, param, body).to_latex(options)
    };
    let text = p
        .fine
        .replace_all(text, |c: &Captures| fine(None, &c[1]));
    let text = p
        .fine_with_num
        .replace_all(&text, |c: &Captures| fine(Some(&c[1]), &c[2]));
    p.fine_with_percent
        .replace_all(&text, |c: &Captures| fine(None, &c[1]))
        .into_owned()
}

/// `[label](target)` to `\href`, with `#` and `%` escaped in the target.
fn convert_links(text: &str) -> String {
    patterns()
        .href
        .replace_all(text, |c: &Captures| {
            format!("\\href{{{}}}{{{}}}", latex::escape_url(&c[2]), &c[1])
        })
        .into_owned()
}

/// Any remaining run of `>` lines becomes a `zoe` block.
fn convert_quotes(text: &str, options: &Options) -> String {
    patterns()
        .quote
        .replace_all(text, |c: &Captures| {
            let body = c[0]
                .lines()
                .map(|line| line.trim_start_matches(['>', ' ']).trim())
                .collect::<Vec<_>>()
                .join("\n");
            Callout::new(CalloutKind::Quote, None, body).to_latex(options)
        })
        .into_owned()
}
