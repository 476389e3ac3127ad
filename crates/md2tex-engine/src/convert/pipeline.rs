use super::{
    callout, cheatsheet, code, embed, inline, list, math,
    options::Options,
    protect::ProtectedSpans,
    table,
};

/// One rewrite pass over the document buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Lifts code blocks, inline code and reserved characters into tokens.
    ProtectSpans,
    /// Masks `* > [ ] -` inside math spans.
    ProtectMath,
    /// `#Warning` → `!!`.
    Tags,
    Images,
    CodeRefs,
    Tables,
    /// Underline and colour tags.
    Markup,
    Headings,
    /// Bold, then italic.
    Emphasis,
    Rules,
    Callouts,
    Lists,
    /// Cheat-sheet headings, one level per `#`.
    OutlineHeadings,
    /// Cheat-sheet bullets as `itemize`.
    Bullets,
    /// Cheat-sheet `---` boxes.
    Boxes,
    /// Puts code back and styles it.
    RestoreSpans,
    FinalizeMath,
    RestoreMath,
    /// Puts back source characters that collided with token delimiters.
    ReleaseReserved,
}

impl Stage {
    pub const STANDARD: [Stage; 16] = [
        Stage::ProtectSpans,
        Stage::ProtectMath,
        Stage::Tags,
        Stage::Images,
        Stage::CodeRefs,
        Stage::Tables,
        Stage::Markup,
        Stage::Headings,
        Stage::Emphasis,
        Stage::Rules,
        Stage::Callouts,
        Stage::Lists,
        Stage::RestoreSpans,
        Stage::FinalizeMath,
        Stage::RestoreMath,
        Stage::ReleaseReserved,
    ];

    /// Stage list for `*CheatSheet.md` files.
    pub const CHEATSHEET: [Stage; 8] = [
        Stage::ProtectSpans,
        Stage::ProtectMath,
        Stage::OutlineHeadings,
        Stage::Bullets,
        Stage::Boxes,
        Stage::RestoreSpans,
        Stage::RestoreMath,
        Stage::ReleaseReserved,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Stage::ProtectSpans => "protect-spans",
            Stage::ProtectMath => "protect-math",
            Stage::Tags => "tags",
            Stage::Images => "images",
            Stage::CodeRefs => "code-refs",
            Stage::Tables => "tables",
            Stage::Markup => "markup",
            Stage::Headings => "headings",
            Stage::Emphasis => "emphasis",
            Stage::Rules => "rules",
            Stage::Callouts => "callouts",
            Stage::Lists => "lists",
            Stage::OutlineHeadings => "outline-headings",
            Stage::Bullets => "bullets",
            Stage::Boxes => "boxes",
            Stage::RestoreSpans => "restore-spans",
            Stage::FinalizeMath => "finalize-math",
            Stage::RestoreMath => "restore-math",
            Stage::ReleaseReserved => "release-reserved",
        }
    }

    /// Stages that must already have run when this one starts.
    pub const fn requires(self) -> &'static [Stage] {
        match self {
            // Code content must not be masked as math.
            Stage::ProtectMath => &[Stage::ProtectSpans],
            // `#Warning` would otherwise become a section.
            Stage::Headings => &[Stage::Tags],
            // `[`, `-` and `>` inside math would read as links, bullets, quotes.
            Stage::Callouts => &[Stage::ProtectMath],
            // Callout bodies hold list items once their quote markers are gone.
            Stage::Lists => &[Stage::ProtectMath, Stage::Callouts],
            Stage::Bullets => &[Stage::ProtectMath],
            Stage::RestoreSpans => &[Stage::ProtectSpans],
            Stage::RestoreMath => &[Stage::ProtectMath],
            // Released characters must not be mistaken for tokens or markers.
            Stage::ReleaseReserved => &[Stage::RestoreSpans, Stage::RestoreMath],
            _ => &[],
        }
    }

    /// Stages that must run before this one whenever they are in the same
    /// pipeline.
    pub const fn runs_after(self) -> &'static [Stage] {
        match self {
            // These read `* > [ ] -`, which must still be masked inside math.
            Stage::RestoreMath => &[
                Stage::Emphasis,
                Stage::Callouts,
                Stage::Lists,
                Stage::Bullets,
                Stage::Boxes,
            ],
            _ => &[],
        }
    }

    fn apply(self, text: &str, cx: &mut Context<'_>) -> String {
        let o = cx.options;
        match self {
            Stage::ProtectSpans => {
                let (text, spans) = ProtectedSpans::protect(text);
                cx.spans = spans;
                text
            }
            Stage::ProtectMath => math::protect_math_symbols(text),
            Stage::Tags => inline::convert_tags(text),
            Stage::Images => embed::convert_images(text, o),
            Stage::CodeRefs => embed::convert_code_refs(text, o),
            Stage::Tables => table::convert_tables(text, o),
            Stage::Markup => inline::convert_markup(text),
            Stage::Headings => inline::convert_headings(text),
            Stage::Emphasis => inline::convert_emphasis(text),
            Stage::Rules => inline::convert_rules(text),
            Stage::Callouts => callout::convert_callouts(text, o),
            Stage::Lists => list::convert_lists(text, o),
            Stage::OutlineHeadings => inline::convert_outline_headings(text),
            Stage::Bullets => list::convert_bullets(text),
            Stage::Boxes => cheatsheet::convert_boxes(text),
            Stage::RestoreSpans => cx
                .spans
                .restore_code(text, |kind, original| code::render_span(kind, original, o)),
            Stage::FinalizeMath => math::finalize_math(text),
            Stage::RestoreMath => math::restore_math_symbols(text),
            Stage::ReleaseReserved => cx.spans.release_reserved(text),
        }
    }
}

/// State owned by one conversion call.
struct Context<'a> {
    options: &'a Options,
    spans: ProtectedSpans,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("stage {stage} requires {missing} to run before it")]
    MissingPrerequisite {
        stage: &'static str,
        missing: &'static str,
    },
    #[error("stage {0} is listed more than once")]
    Duplicate(&'static str),
    #[error("stage {stage} must run after {later}")]
    OutOfOrder {
        stage: &'static str,
        later: &'static str,
    },
}

/// An ordered, validated list of stages.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            stages: Stage::STANDARD.to_vec(),
        }
    }
}

impl Pipeline {
    /// Builds a pipeline, checking that every stage's prerequisites come
    /// earlier in the list.
    pub fn new(stages: &[Stage]) -> Result<Self, PipelineError> {
        for (i, stage) in stages.iter().enumerate() {
            if stages[..i].contains(stage) {
                return Err(PipelineError::Duplicate(stage.name()));
            }
            if let Some(missing) = stage.requires().iter().find(|r| !stages[..i].contains(r)) {
                return Err(PipelineError::MissingPrerequisite {
                    stage: stage.name(),
                    missing: missing.name(),
                });
            }
            if let Some(later) = stage.runs_after().iter().find(|r| stages[i + 1..].contains(r)) {
                return Err(PipelineError::OutOfOrder {
                    stage: stage.name(),
                    later: later.name(),
                });
            }
        }
        Ok(Self {
            stages: stages.to_vec(),
        })
    }

    pub fn cheatsheet() -> Self {
        Self {
            stages: Stage::CHEATSHEET.to_vec(),
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Runs every stage in order. Never fails: constructs that don't match
    /// pass through unchanged.
    pub fn run(&self, text: &str, options: &Options) -> String {
        let mut cx = Context {
            options,
            spans: ProtectedSpans::default(),
        };
        let mut buffer = text.to_string();
        for stage in &self.stages {
            buffer = stage.apply(&buffer, &mut cx);
            log::debug!("stage {}: {} bytes", stage.name(), buffer.len());
        }
        buffer
    }
}
