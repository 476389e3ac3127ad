//! One-to-one inline and line-level substitutions.

use regex::{Captures, Regex};

use super::{latex, patterns::patterns};

fn wrap_with(re: &Regex, text: &str, command: &str) -> String {
    re.replace_all(text, |c: &Captures| latex::command(command, None, &c[1]))
        .into_owned()
}

/// `#Warning` tags become the `!!` marker.
pub fn convert_tags(text: &str) -> String {
    patterns().warning_tag.replace_all(text, "!!").into_owned()
}

/// `<u>` and the red `<font>` tag.
pub fn convert_markup(text: &str) -> String {
    let p = patterns();
    let text = wrap_with(&p.underline, text, "underline");
    p.red_text
        .replace_all(&text, |c: &Captures| format!("\\textcolor{{red}}{{{}}}", &c[1]))
        .into_owned()
}

/// `####` down to `#`. Both `#` and `##` produce `\section`.
pub fn convert_headings(text: &str) -> String {
    apply_headings(&patterns().headings, text)
}

/// Cheat-sheet headings: `#`, `##`, `###` to section, subsection,
/// subsubsection.
pub fn convert_outline_headings(text: &str) -> String {
    apply_headings(&patterns().outline_headings, text)
}

fn apply_headings(table: &[(Regex, &str)], text: &str) -> String {
    table
        .iter()
        .fold(text.to_string(), |acc, (re, command)| wrap_with(re, &acc, command))
}

/// Bold before italic: `*x*` also matches inside `**x**`.
pub fn convert_emphasis(text: &str) -> String {
    let p = patterns();
    let text = wrap_with(&p.bold, text, "textbf");
    wrap_with(&p.italic, &text, "textit")
}

/// `---` and `!---` lines.
pub fn convert_rules(text: &str) -> String {
    let p = patterns();
    let text = p
        .rule
        .replace_all(text, "\n\\noindent\\rule{\\textwidth}{1pt}\n");
    p.fullwidth_rule
        .replace_all(
            &text,
            "\n\\begin{fullwidth}\\noindent\\rule{0.75\\linewidth}{1pt}\\end{fullwidth}\n",
        )
        .into_owned()
}
