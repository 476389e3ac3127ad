pub mod convert;
pub mod index;
pub mod io;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{
    LineRange, Options, Pipeline, PipelineError, Stage, convert_cheatsheet, convert_markdown,
};
pub use index::{IndexLayout, IndexListing, NoteEntry, build_listing, render_index, write_index};
pub use io::*;
