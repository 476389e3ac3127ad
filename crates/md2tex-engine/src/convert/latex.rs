//! Small builders for the LaTeX constructs the passes emit.

/// Wraps `content` in `\begin{name}[options] ... \end{name}`.
///
/// With `spacing`, the environment is surrounded by `\vspace{spacing}` lines
/// and ends with a newline; without it the result has no trailing newline.
pub fn environment(name: &str, content: &str, options: Option<&str>, spacing: Option<&str>) -> String {
    let begin = match options {
        Some(opts) if !opts.is_empty() => format!("\\begin{{{name}}}[{opts}]"),
        _ => format!("\\begin{{{name}}}"),
    };
    let end = format!("\\end{{{name}}}");

    match spacing {
        Some(space) => {
            format!("\\vspace{{{space}}}\n{begin}\n{content}\n{end}\n\\vspace{{{space}}}\n")
        }
        None => format!("{begin}\n{content}\n{end}"),
    }
}

/// `\name[param]{arg}`, or `\name{arg}` without a parameter.
pub fn command(name: &str, param: Option<&str>, arg: &str) -> String {
    match param {
        Some(p) => format!("\\{name}[{p}]{{{arg}}}"),
        None => format!("\\{name}{{{arg}}}"),
    }
}

pub fn escape_underscores(s: &str) -> String {
    s.replace('_', r"\_")
}

/// Escapes every LaTeX special character for use in running text.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '#' | '$' | '%' | '&' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Escapes the characters of a URL that LaTeX would otherwise treat as
/// comment or parameter markers.
pub fn escape_url(s: &str) -> String {
    s.replace('#', r"\#").replace('%', r"\%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spaced_environment_with_title() {
        assert_eq!(
            environment("theorem", "body", Some("Title"), Some("5pt")),
            "\\vspace{5pt}\n\\begin{theorem}[Title]\nbody\n\\end{theorem}\n\\vspace{5pt}\n"
        );
    }

    #[test]
    fn bare_environment_has_no_trailing_newline() {
        assert_eq!(
            environment("fullwidth", "x", None, None),
            "\\begin{fullwidth}\nx\n\\end{fullwidth}"
        );
    }

    #[test]
    fn empty_options_are_dropped() {
        assert!(environment("algo", "x", Some(""), None).starts_with("\\begin{algo}\n"));
    }

    #[test]
    fn command_with_param() {
        assert_eq!(command("fine", Some("2"), "x"), "\\fine[2]{x}");
        assert_eq!(command("fine", None, "x"), "\\fine{x}");
    }

    #[test]
    fn escape_text_handles_every_special() {
        assert_eq!(
            escape_text(r"a_b & {c} #1 $5 %x ~ ^ \"),
            r"a\_b \& \{c\} \#1 \$5 \%x \textasciitilde{} \textasciicircum{} \textbackslash{}"
        );
    }

    #[test]
    fn escape_url_keeps_other_characters() {
        assert_eq!(
            escape_url("https://x.org/a%20b#frag"),
            r"https://x.org/a\%20b\#frag"
        );
    }
}
