use crate::convert::{Options, convert_cheatsheet, convert_markdown};
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

/// File name pattern of cheat sheets, which convert next to themselves.
pub const CHEATSHEET_PATTERN: &str = "*CheatSheet.md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidDir(String),
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}

/// Markdown files directly inside `dir`, sorted by name
pub fn scan_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    scan_files(dir, "*.md")
}

/// Files directly inside `dir` whose name matches the glob `file_pattern`,
/// sorted by name
pub fn scan_files(dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(dir)?;

    let pattern = dir.join(file_pattern);
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// `<output_dir>/<md_file with .tex extension>`
pub fn output_path(output_dir: &Path, md_file: &RelativePath) -> PathBuf {
    md_file.with_extension("tex").to_path(output_dir)
}

/// Convert a single file and write the result
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<(), IoError> {
    convert_file_with(input, output, |text| convert_markdown(text, options))
}

fn convert_file_with<F>(input: &Path, output: &Path, convert: F) -> Result<(), IoError>
where
    F: FnOnce(&str) -> String,
{
    let content = read_file(input)?;
    let latex = convert(&content);
    write_file(output, &latex)?;
    log::info!("Converted {} to {}", input.display(), output.display());
    Ok(())
}

/// Convert every markdown file in `dir` into `output_dir`, returning the
/// written paths
pub fn convert_directory(
    dir: &Path,
    output_dir: &Path,
    options: &Options,
) -> Result<Vec<PathBuf>, IoError> {
    let mut written = Vec::new();
    for input in scan_markdown_files(dir)? {
        let Some(name) = input.file_name().and_then(|n| n.to_str()) else {
            log::warn!("Skipping file with non UTF-8 name: {}", input.display());
            continue;
        };
        let output = output_path(output_dir, RelativePath::new(name));
        convert_file(&input, &output, options)?;
        written.push(output);
    }
    Ok(written)
}

/// Convert every cheat sheet in `dir` to a `.tex` file beside it, returning
/// the written paths
pub fn convert_cheatsheets(dir: &Path, options: &Options) -> Result<Vec<PathBuf>, IoError> {
    let mut written = Vec::new();
    for input in scan_files(dir, CHEATSHEET_PATTERN)? {
        let output = input.with_extension("tex");
        convert_file_with(&input, &output, |text| convert_cheatsheet(text, options))?;
        written.push(output);
    }
    Ok(written)
}

/// Sorted names of files directly in `dir` whose extension is one of
/// `extensions`. A missing directory yields no files.
pub fn list_files(dir: &Path, extensions: &[String]) -> Result<Vec<String>, IoError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(IoError::Io)? {
        let path = entry.map_err(IoError::Io)?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|e| e.to_str())
            && extensions.iter().any(|e| e == ext)
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Case-sensitive occurrences of `needle` in the file; an unreadable file
/// counts as zero.
pub fn count_occurrences(path: &Path, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    match fs::read_to_string(path) {
        Ok(content) => content.matches(needle).count(),
        Err(e) => {
            log::debug!("Counting in {} failed: {e}", path.display());
            0
        }
    }
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDir(format!(
            "{} does not exist",
            path.display()
        )));
    }

    Ok(())
}
