use std::ops::Range;

use super::{
    kinds::{SpanKind, SpanRef},
    options::Options,
    patterns::patterns,
    protect::replace_tokens,
};

/// Converts every pipe table into a centered `tabular`.
///
/// All tables are located first and swapped for table tokens, then each one
/// is converted on its own and the tokens are substituted back, so no scan
/// ever sees a neighbouring table's rewritten text.
pub fn convert_tables(text: &str, options: &Options) -> String {
    let ranges = find_tables(text);
    if ranges.is_empty() {
        return text.to_string();
    }

    let mut swapped = String::with_capacity(text.len());
    let mut sources = Vec::with_capacity(ranges.len());
    let mut last = 0;
    for (i, range) in ranges.into_iter().enumerate() {
        swapped.push_str(&text[last..range.start]);
        swapped.push_str(&SpanRef::new(SpanKind::Table, i).to_string());
        sources.push(&text[range.clone()]);
        last = range.end;
    }
    swapped.push_str(&text[last..]);

    let converted: Vec<String> = sources
        .iter()
        .map(|table| to_tabular(table, options))
        .collect();

    replace_tokens(&swapped, |r| match r.kind {
        SpanKind::Table => converted.get(r.index).cloned(),
        _ => None,
    })
}

/// Byte ranges of every table: a header line, a separator line and one or
/// more following lines up to a blank line or the end of the text. The range
/// excludes the final newline.
fn find_tables(text: &str) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for line in text.split('\n') {
        lines.push((offset, line));
        offset += line.len() + 1;
    }

    let mut tables = Vec::new();
    let mut i = 0;
    while i + 2 < lines.len() {
        let (start, header) = lines[i];
        let separator = lines[i + 1].1;
        if !is_header(header) || !is_separator(separator) || is_blank(lines[i + 2].1) {
            i += 1;
            continue;
        }

        let mut last = i + 2;
        while last + 1 < lines.len() && !is_blank(lines[last + 1].1) {
            last += 1;
        }
        let (last_start, last_line) = lines[last];
        tables.push(start..last_start + last_line.len());
        i = last + 1;
    }
    tables
}

fn is_header(line: &str) -> bool {
    let t = line.trim();
    t.len() >= 2 && t.starts_with('|') && t.ends_with('|')
}

fn is_separator(line: &str) -> bool {
    patterns().table_separator.is_match(line.trim())
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Splits a table line into trimmed cells, dropping the outer pipes.
fn split_cells(line: &str) -> Vec<&str> {
    let mut s = line.trim();
    if let Some(stripped) = s.strip_prefix('|') {
        s = stripped;
    }
    if let Some(stripped) = s.strip_suffix('|') {
        s = stripped;
    }
    s.split('|').map(str::trim).collect()
}

/// Column count comes from the header; rows with a different cell count are
/// emitted as they are.
fn to_tabular(table: &str, options: &Options) -> String {
    let mut lines = table.lines();
    let header = split_cells(lines.next().unwrap_or_default());
    let rows: Vec<Vec<&str>> = lines.skip(1).map(split_cells).collect();

    let columns = header.len().max(1);
    let column_spec = format!("{}c", "c|".repeat(columns - 1));
    let space = &options.table_spacing;

    let mut out = format!("\\vspace{{{space}}}{{\\centering\n\\begin{{tabular}}{{{column_spec}}}\n");
    out.push_str(&header.join(" & "));
    out.push_str(" \\\\\n\\hline\n");
    for row in &rows {
        out.push_str(&row.join(" & "));
        out.push_str(" \\\\\n\\hline\n");
    }
    out.push_str(&format!("\\end{{tabular}}\\par}}\\vspace{{{space}}}"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    const TWO_BY_THREE: &str = "| Name | Score |\n|------|:-----:|\n| a | 1 |\n| b | 2 |\n| c | 3 |";

    #[test]
    fn two_column_table() {
        let out = convert_tables(TWO_BY_THREE, &Options::default());
        assert_snapshot!(out, @r"
        \vspace{10pt}{\centering
        \begin{tabular}{c|c}
        Name & Score \\
        \hline
        a & 1 \\
        \hline
        b & 2 \\
        \hline
        c & 3 \\
        \hline
        \end{tabular}\par}\vspace{10pt}
        ");
    }

    #[test]
    fn every_row_has_header_cell_count_and_a_rule() {
        let out = convert_tables(TWO_BY_THREE, &Options::default());
        let rows: Vec<&str> = out.lines().filter(|l| l.ends_with(r" \\")).collect();
        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert_eq!(row.matches(" & ").count(), 1, "row {row:?}");
        }
        let lines: Vec<&str> = out.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            if line.ends_with(r" \\") {
                assert_eq!(lines[i + 1], r"\hline");
            }
        }
    }

    #[test]
    fn table_is_bounded_by_blank_line() {
        let input = format!("intro\n\n{TWO_BY_THREE}\n\nafter");
        let out = convert_tables(&input, &Options::default());
        assert!(out.starts_with("intro\n\n\\vspace{10pt}"));
        assert!(out.ends_with("\\vspace{10pt}\n\nafter"));
    }

    #[test]
    fn neighbouring_tables_convert_independently() {
        let input = "| a | b | c |\n|---|---|---|\n| 1 | 2 | 3 |\n\n| x |\n|---|\n| y |";
        let out = convert_tables(input, &Options::default());
        assert!(out.contains(r"\begin{tabular}{c|c|c}"));
        assert!(out.contains(r"\begin{tabular}{c}"));
        assert!(out.contains(r"1 & 2 & 3 \\"));
        assert!(out.contains("y \\\\\n"));
    }

    #[test]
    fn header_without_data_rows_is_left_alone() {
        let input = "| a | b |\n|---|---|";
        assert_eq!(convert_tables(input, &Options::default()), input);
    }

    #[test]
    fn mismatched_row_is_emitted_as_is() {
        let input = "| a | b |\n|---|---|\n| 1 | 2 | 3 |";
        let out = convert_tables(input, &Options::default());
        assert!(out.contains(r"1 & 2 & 3 \\"));
        assert!(out.contains(r"{c|c}"));
    }

    #[test]
    fn split_cells_trims() {
        assert_eq!(split_cells("|  a |b  | |"), vec!["a", "b", ""]);
    }
}
