//! Boxed sections for cheat sheets.
//!
//! A box is a `---` line, a title line, one or more body lines and a closing
//! `---` line. It becomes a `subbox` environment titled by the first line.

use regex::Captures;

use super::patterns::patterns;

pub fn convert_boxes(text: &str) -> String {
    patterns()
        .sheet_box
        .replace_all(text, |c: &Captures| {
            format!(
                "\\begin{{subbox}}{{{}}}\n{}\n\\end{{subbox}}",
                c[1].trim(),
                c[2].trim()
            )
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn box_takes_title_from_first_line() {
        assert_eq!(
            convert_boxes("---\n Derivatives \nd/dx x^n = n x^{n-1}\nchain rule\n---\nafter"),
            "\\begin{subbox}{Derivatives}\nd/dx x^n = n x^{n-1}\nchain rule\n\\end{subbox}\nafter"
        );
    }

    #[test]
    fn consecutive_boxes_stay_separate() {
        let out = convert_boxes("---\nA\na\n---\n\n---\nB\nb\n---");
        assert_eq!(
            out,
            "\\begin{subbox}{A}\na\n\\end{subbox}\n\n\\begin{subbox}{B}\nb\n\\end{subbox}"
        );
    }

    #[test]
    fn unclosed_box_passes_through() {
        let input = "---\nTitle\nbody never closed";
        assert_eq!(convert_boxes(input), input);
    }
}
