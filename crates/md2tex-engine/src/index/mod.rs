//! Vault content index: a Markdown page linking every note, code file and
//! image so the vault can be browsed from one place.

use crate::io::{self, IoError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the vault keeps each kind of file, relative to its root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexLayout {
    pub md_dir: String,
    pub code_dir: String,
    pub images_dir: String,
    pub code_extensions: Vec<String>,
    pub image_extensions: Vec<String>,
    /// Counted in every note and shown next to its link.
    pub marker: String,
    pub output: String,
}

impl Default for IndexLayout {
    fn default() -> Self {
        Self {
            md_dir: "MdFiles".to_string(),
            code_dir: "Assets/Codes".to_string(),
            images_dir: "Assets/Images".to_string(),
            code_extensions: vec!["py".to_string(), "cpp".to_string(), "wls".to_string()],
            image_extensions: vec!["png".to_string(), "svg".to_string()],
            marker: "ZN".to_string(),
            output: "Content.md".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub file_name: String,
    pub marker_count: usize,
}

/// Sorted file names found under each directory of an [`IndexLayout`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexListing {
    pub notes: Vec<NoteEntry>,
    pub codes: Vec<String>,
    pub images: Vec<String>,
}

pub fn build_listing(root: &Path, layout: &IndexLayout) -> Result<IndexListing, IoError> {
    let md_dir = root.join(&layout.md_dir);
    let notes = io::list_files(&md_dir, &["md".to_string()])?
        .into_iter()
        .map(|file_name| NoteEntry {
            marker_count: io::count_occurrences(&md_dir.join(&file_name), &layout.marker),
            file_name,
        })
        .collect();

    Ok(IndexListing {
        notes,
        codes: io::list_files(&root.join(&layout.code_dir), &layout.code_extensions)?,
        images: io::list_files(&root.join(&layout.images_dir), &layout.image_extensions)?,
    })
}

pub fn render_index(listing: &IndexListing, layout: &IndexLayout) -> String {
    let mut out = format!("# {}\n\n", layout.md_dir);
    for note in &listing.notes {
        out.push_str(&format!(
            "- {} ({} Count: {})\n",
            wiki_link(&layout.md_dir, &note.file_name),
            layout.marker,
            note.marker_count
        ));
    }

    out.push_str("\n\n# Codes\n\n");
    out.push_str(&link_lines(&layout.code_dir, &listing.codes));
    out.push_str("\n\n# Images\n\n");
    out.push_str(&link_lines(&layout.images_dir, &listing.images));
    out
}

/// Builds the listing for `root` and writes the rendered index to
/// `<root>/<layout.output>`.
pub fn write_index(root: &Path, layout: &IndexLayout) -> Result<IndexListing, IoError> {
    io::validate_dir(root)?;
    let listing = build_listing(root, layout)?;
    let path = root.join(&layout.output);
    io::write_file(&path, &render_index(&listing, layout))?;
    log::info!(
        "Indexed {} notes, {} code files, {} images into {}",
        listing.notes.len(),
        listing.codes.len(),
        listing.images.len(),
        path.display()
    );
    Ok(listing)
}

fn link_lines(dir: &str, files: &[String]) -> String {
    files
        .iter()
        .map(|f| format!("- {}", wiki_link(dir, f)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `[[dir/file|stem]]`
fn wiki_link(dir: &str, file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    format!("[[{dir}/{file_name}|{stem}]]")
}
