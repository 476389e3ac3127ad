use serde::{Deserialize, Serialize};

/// Inclusive line range used when a code reference gives none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

/// Per-conversion settings.
///
/// The asset prefixes are part of the contract with existing notes; the
/// defaults reproduce the layout those notes were written against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Embeds starting with this prefix already point into the asset tree.
    pub parent_assets_prefix: String,
    /// Prefix for embeds that name a bare image file.
    pub images_dir: String,
    /// Prefix for code references.
    pub codes_dir: String,
    pub figure_width: String,
    pub list_environment: String,
    pub list_options: Option<String>,
    pub listing_options: String,
    /// Vertical space around callout environments.
    pub block_spacing: String,
    /// Vertical space around tables.
    pub table_spacing: String,
    pub code_lines: LineRange,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            parent_assets_prefix: "../Assets/".to_string(),
            images_dir: "Assets/Images/".to_string(),
            codes_dir: "Assets/Codes/".to_string(),
            figure_width: r"0.5\textwidth".to_string(),
            list_environment: "enumerate".to_string(),
            list_options: Some("leftmargin=3.0em".to_string()),
            listing_options: "style=py,breaklines=true,breakatwhitespace=true,lineskip=-0.3ex,xleftmargin=2em,xrightmargin=2em".to_string(),
            block_spacing: "5pt".to_string(),
            table_spacing: "10pt".to_string(),
            code_lines: LineRange { start: 1, end: 500 },
        }
    }
}
