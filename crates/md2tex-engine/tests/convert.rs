use md2tex_engine::{Options, Pipeline, PipelineError, Stage, convert_cheatsheet, convert_markdown};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn convert(text: &str) -> String {
    convert_markdown(text, &Options::default())
}

#[test]
fn fixture_groups() {
    assert_fixture("groups");
}

fn assert_fixture(name: &str) {
    let dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{dir}/{name}.md")).unwrap();
    let tex = std::fs::read_to_string(format!("{dir}/{name}.tex")).unwrap();
    assert_eq!(convert(&md), tex);
}

#[rstest]
#[case("`> [!note] x`", r"\texttt{> [!note] x}")]
#[case("`**not bold** and *not italic*`", r"\texttt{**not bold** and *not italic*}")]
#[case("`# not a heading`", r"\texttt{\# not a heading}")]
#[case("`- not an item`", r"\texttt{- not an item}")]
fn inline_code_is_opaque(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(convert(input), expected);
}

#[test]
fn fenced_code_is_verbatim() {
    let out = convert("```\n# h\n- a\n**b** $x*y$ [l](u)\n```");
    let listing = Options::default().listing_options;
    assert_eq!(
        out,
        format!("\\begin{{lstlisting}}[{listing}]\n# h\n- a\n**b** $x*y$ [l](u)\n\\end{{lstlisting}}")
    );
}

#[rstest]
#[case("$a*b*c - [x] > y$")]
#[case("see $[0, 1]$ and $f(x) > 0$")]
fn math_symbols_survive_unchanged(#[case] input: &str) {
    assert_eq!(convert(input), input);
}

#[test]
fn multiline_display_math_is_not_a_list() {
    assert_eq!(
        convert("Let\n$$\n- x * y * z\n$$"),
        "Let\\begin{equation*}\n- x * y * z\n\\end{equation*}"
    );
}

#[rstest]
#[case("# Top", r"\section{Top}")]
#[case("## Second", r"\section{Second}")]
#[case("### Third", r"\subsection{Third}")]
#[case("#### Fourth", r"\subsubsection{Fourth}")]
fn heading_levels(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(convert(input), expected);
}

#[test]
fn warning_tag_is_never_a_heading() {
    assert_eq!(convert("#Warning check this"), "!! check this");
}

#[test]
fn lists_balance_across_callouts_and_text() {
    let input = "- a\n\t- b\n\t\t- c\ntext\n> [!algorithm] Steps\n> - one\n>     - two\n\n- z";
    let out = convert(input);
    assert_eq!(
        out.matches(r"\begin{enumerate}").count(),
        out.matches(r"\end{enumerate}").count()
    );
    assert_eq!(out.matches(r"\begin{enumerate}").count(), 6);
    assert!(out.contains("\\begin{algo}[Steps]\n\\begin{enumerate}[leftmargin=3.0em]\n\\item one"));
}

#[test]
fn table_has_rule_after_every_row() {
    let out = convert("| a | b | c |\n|---|---|---|\n| 1 | 2 | 3 |\n| 4 | 5 | 6 |");
    assert_eq!(out.matches(r"\hline").count(), 3);
    assert!(out.contains(r"\begin{tabular}{c|c|c}"));
    assert!(out.contains(r"4 & 5 & 6 \\"));
}

#[test]
fn table_without_rows_passes_through() {
    let input = "| a | b |\n|---|---|\n\nafter";
    assert_eq!(convert(input), input);
}

#[test]
fn embeds_and_code_refs() {
    assert_eq!(
        convert("![[cayley.png]]"),
        "\\begin{figure*}[h]\n\\centering\n\\includegraphics[width=0.5\\textwidth]{Assets/Images/cayley.png}\n\\end{figure*}\\par"
    );
    assert_eq!(
        convert("[[../Assets/Codes/my_sieve.py|Sieve_1|3:9]]"),
        r"\includecode[py]{Sieve\_1}{3}{9}{Assets/Codes/my\_sieve.py}"
    );
}

#[test]
fn delimiter_characters_in_source_survive() {
    let input = "odd \u{E000}B0\u{E001} text `code`";
    assert_eq!(convert(input), "odd \u{E000}B0\u{E001} text \\texttt{code}");
}

#[test]
fn empty_document() {
    assert_eq!(convert(""), "");
}

#[test]
fn custom_pipeline_must_respect_prerequisites() {
    let err = Pipeline::new(&[Stage::ProtectSpans, Stage::Lists]).unwrap_err();
    assert_eq!(
        err,
        PipelineError::MissingPrerequisite {
            stage: "lists",
            missing: "protect-math",
        }
    );
}

#[test]
fn standard_pipeline_matches_convert_markdown() {
    let text = "**x** and $y$";
    let pipeline = Pipeline::new(&Stage::STANDARD).unwrap();
    assert_eq!(pipeline.run(text, &Options::default()), convert(text));
}

#[test]
fn cheatsheet_boxes_nested_bullets() {
    let sheet = "# Groups\n---\nAxioms\n- closure\n    - $a * b$ in G\n- identity\n---\n## Notes\n-";
    assert_eq!(
        convert_cheatsheet(sheet, &Options::default()),
        [
            r"\section{Groups}",
            r"\begin{subbox}{Axioms}",
            r"\begin{itemize}",
            r"\item closure",
            r"\begin{itemize}",
            r"\item $a * b$ in G",
            r"\end{itemize}",
            r"\item identity",
            r"\end{itemize}",
            r"\end{subbox}",
            r"\subsection{Notes}",
            r"\begin{itemize}",
            r"\item",
            r"\end{itemize}",
        ]
        .join("\n")
    );
}
