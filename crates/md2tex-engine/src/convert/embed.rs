//! Image embeds (`![[path|opts]]`) and code references (`[[file|label|a:b]]`).

use std::path::Path;

use regex::Captures;

use super::{latex, options::Options, patterns::patterns};

const FULLWIDTH: &str = "fullwidth";

pub fn convert_images(text: &str, options: &Options) -> String {
    patterns()
        .image
        .replace_all(text, |c: &Captures| {
            let path = image_path(c[1].trim(), options);
            let fullwidth = c.get(2).is_some_and(|m| m.as_str().contains(FULLWIDTH));
            figure(&path, fullwidth, options)
        })
        .into_owned()
}

fn image_path(raw: &str, options: &Options) -> String {
    if raw.starts_with(&options.parent_assets_prefix) {
        raw.strip_prefix("../").unwrap_or(raw).to_string()
    } else {
        format!("{}{raw}", options.images_dir)
    }
}

fn figure(path: &str, fullwidth: bool, options: &Options) -> String {
    let width = &options.figure_width;
    if fullwidth {
        format!(
            "{{\\centering\\begin{{figure*}}[h]\n\\includegraphics[width={width}]{{{path}}}\n\\end{{figure*}}}}"
        )
    } else {
        format!(
            "\\begin{{figure*}}[h]\n\\centering\n\\includegraphics[width={width}]{{{path}}}\n\\end{{figure*}}\\par"
        )
    }
}

pub fn convert_code_refs(text: &str, options: &Options) -> String {
    patterns()
        .code_ref
        .replace_all(text, |c: &Captures| {
            let file = &c[1];
            let label = latex::escape_underscores(&c[2]);
            let start = c
                .get(3)
                .map_or_else(|| options.code_lines.start.to_string(), |m| m.as_str().to_string());
            let end = c
                .get(4)
                .map_or_else(|| options.code_lines.end.to_string(), |m| m.as_str().to_string());
            let path = code_path(&latex::escape_underscores(file), options);
            format!(
                "\\includecode[{}]{{{label}}}{{{start}}}{{{end}}}{{{path}}}",
                extension(file)
            )
        })
        .into_owned()
}

/// Extension of the final path segment, without the dot.
fn extension(file: &str) -> &str {
    let name = file.rsplit('/').next().unwrap_or(file);
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
}

fn code_path(path: &str, options: &Options) -> String {
    let mut rest = path;
    while let Some(stripped) = rest
        .strip_prefix("../")
        .or_else(|| rest.strip_prefix("./"))
    {
        rest = stripped;
    }
    if rest.starts_with(&options.codes_dir) {
        rest.to_string()
    } else {
        format!("{}{rest}", options.codes_dir)
    }
}
