//! # Conversion
//!
//! Markdown dialect → LaTeX as an ordered list of text rewrite passes over a
//! single buffer. There is no syntax tree; each pass is a total function from
//! buffer to buffer and ordering between passes is declared in [`Stage`].
//!
//! ## Stages
//!
//! 1. **protect-spans**: code blocks and inline code become opaque tokens
//! 2. **protect-math**: `* > [ ] -` inside `$...$` / `$$...$$` are masked
//! 3. **tags → rules**: embeds, code refs, tables, headings, inline style, rules
//! 4. **callouts**: `> [!kind]` directives, fine print, links, quotes
//! 5. **lists**: indented `-` bullets become nested list environments
//! 6. **restore-spans**: code comes back as `lstlisting` / `\texttt`
//! 7. **finalize-math**, **restore-math**, **release-reserved**
//!
//! ## Cheat Sheets
//!
//! [`Pipeline::cheatsheet`] runs a shorter list over `*CheatSheet.md` files:
//! one sectioning level per `#`, `itemize` bullets and `---` boxes, with the
//! same code and math protection around them.
//!
//! ## Raw Zones
//!
//! Code is lifted out before any other pass runs, so `` `> [!note] x` `` stays
//! literal text inside `\texttt{...}`. Tokens are delimited by private-use
//! characters that the protector lifts out of the source first; user text can
//! never produce a token.
//!
//! ## Failure Model
//!
//! Conversion does not fail. Anything a pass doesn't recognize is passed
//! through; malformed input (unterminated fences, ragged tables) gives
//! best-effort output.

pub mod callout;
pub mod cheatsheet;
pub mod code;
pub mod embed;
pub mod inline;
pub mod kinds;
pub mod latex;
pub mod list;
pub mod math;
pub mod options;
pub mod patterns;
pub mod pipeline;
pub mod protect;
pub mod table;

pub use options::{LineRange, Options};
pub use pipeline::{Pipeline, PipelineError, Stage};

/// Converts one document with the standard pipeline.
pub fn convert_markdown(text: &str, options: &Options) -> String {
    Pipeline::default().run(text, options)
}

/// Converts one cheat sheet.
pub fn convert_cheatsheet(text: &str, options: &Options) -> String {
    Pipeline::cheatsheet().run(text, options)
}
