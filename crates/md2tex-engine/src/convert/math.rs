use regex::Captures;

use super::{kinds::MathSymbol, patterns::patterns};

/// Masks `* > [ ] -` inside `$...$` and `$$...$$` spans.
///
/// Single-dollar spans are handled first and never cross a line; display
/// spans may. The delimiters themselves are kept.
pub fn protect_math_symbols(text: &str) -> String {
    let p = patterns();
    let text = p.inline_math.replace_all(text, mask_span);
    p.display_math.replace_all(&text, mask_span).into_owned()
}

fn mask_span(c: &Captures) -> String {
    let whole = &c[0];
    let inner = c.get(1).map_or("", |m| m.as_str());
    let delim = &whole[..(whole.len() - inner.len()) / 2];

    let mut out = String::with_capacity(whole.len());
    out.push_str(delim);
    for ch in inner.chars() {
        match MathSymbol::from_literal(ch) {
            Some(symbol) => out.push_str(&symbol.marker()),
            None => out.push(ch),
        }
    }
    out.push_str(delim);
    out
}

/// Exact inverse of [`protect_math_symbols`].
pub fn restore_math_symbols(text: &str) -> String {
    patterns()
        .math_marker
        .replace_all(text, |c: &Captures| {
            c[1].chars()
                .next()
                .and_then(MathSymbol::from_code)
                .map_or_else(|| c[0].to_string(), |s| s.literal().to_string())
        })
        .into_owned()
}

/// Turns `$$...$$` display math into `equation*` environments, swallowing one
/// preceding newline.
pub fn finalize_math(text: &str) -> String {
    patterns()
        .display_math_env
        .replace_all(text, |c: &Captures| {
            format!("\\begin{{equation*}}{}\\end{{equation*}}", &c[1])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("no math at all - just * text > [x]")]
    #[case("inline $a - b > c$ and $[x]*$")]
    #[case("$$\na_{n} - 1 > [0, 1]\n$$")]
    #[case("$$x-y$$ then $z$")]
    #[case("price $5 - $6")]
    fn protect_then_restore_is_identity(#[case] input: &str) {
        assert_eq!(restore_math_symbols(&protect_math_symbols(input)), input);
    }

    #[test]
    fn masks_symbols_inside_inline_math_only() {
        let out = protect_math_symbols("- item $a-b$");
        assert!(out.starts_with("- item $a"));
        assert!(!out["- item ".len()..].contains('-'));
    }

    #[test]
    fn masks_multiline_display_math() {
        let out = protect_math_symbols("$$\n- x\n> y\n$$");
        assert!(!out.contains("- x"));
        assert!(!out.contains("> y"));
        assert!(out.starts_with("$$") && out.ends_with("$$"));
    }

    #[test]
    fn finalize_wraps_display_math() {
        assert_eq!(
            finalize_math("before\n$$x^2$$ after"),
            "before\\begin{equation*}x^2\\end{equation*} after"
        );
    }

    #[test]
    fn finalize_leaves_inline_math() {
        assert_eq!(finalize_math("$x$"), "$x$");
    }
}
