/// Semantic callout kinds and the LaTeX construct each one becomes.
///
/// Directive kinds are written `> [!keyword] ...`; the remaining kinds come
/// from other syntax (fine-print markers, plain quotes, `~~` blocks) but render
/// through the same [`Callout`] descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalloutKind {
    Note,
    Example,
    BigExample,
    Lemma,
    Corollary,
    Warning,
    Hint,
    Summary,
    Algorithm,
    Target,
    Concept,
    FinePrint,
    Quote,
    FullWidth,
}

/// Source shapes a directive callout can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutForm {
    /// `> [!kw] Title @ body` on one line.
    Titled,
    /// `> [!kw] Title` followed by contiguous `>` body lines.
    Block,
    /// `> [!kw] body` on one line.
    Plain,
}

impl CalloutForm {
    /// Application order. A titled callout is also a valid plain callout, and a
    /// block callout's first line is also a valid plain callout, so the
    /// superset forms are matched first.
    pub const PRECEDENCE: [CalloutForm; 3] =
        [CalloutForm::Titled, CalloutForm::Block, CalloutForm::Plain];
}

/// How a kind is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// `\begin{name}[title] ... \end{name}` with vertical spacing around it.
    Environment(&'static str),
    /// `\name[param]{body}` inline.
    Command(&'static str),
}

impl CalloutKind {
    /// Kinds written as `> [!keyword]` directives.
    pub const DIRECTIVES: [CalloutKind; 11] = [
        CalloutKind::Note,
        CalloutKind::Example,
        CalloutKind::BigExample,
        CalloutKind::Lemma,
        CalloutKind::Corollary,
        CalloutKind::Warning,
        CalloutKind::Hint,
        CalloutKind::Summary,
        CalloutKind::Algorithm,
        CalloutKind::Target,
        CalloutKind::Concept,
    ];

    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            CalloutKind::Note => Some("note"),
            CalloutKind::Example => Some("example"),
            CalloutKind::BigExample => Some("iexample"),
            CalloutKind::Lemma => Some("lemma"),
            CalloutKind::Corollary => Some("cor"),
            CalloutKind::Warning => Some("warning"),
            CalloutKind::Hint => Some("hint"),
            CalloutKind::Summary => Some("summary"),
            CalloutKind::Algorithm => Some("algorithm"),
            CalloutKind::Target => Some("target"),
            CalloutKind::Concept => Some("concept"),
            CalloutKind::FinePrint | CalloutKind::Quote | CalloutKind::FullWidth => None,
        }
    }

    pub const fn construct(self) -> Construct {
        match self {
            CalloutKind::Note => Construct::Environment("theorem"),
            CalloutKind::Example => Construct::Environment("eg"),
            CalloutKind::BigExample => Construct::Environment("xeg"),
            CalloutKind::Lemma => Construct::Environment("lemma"),
            CalloutKind::Corollary => Construct::Environment("corollary"),
            CalloutKind::Warning => Construct::Environment("warning"),
            CalloutKind::Summary => Construct::Environment("definition"),
            CalloutKind::Algorithm => Construct::Environment("algo"),
            CalloutKind::Target => Construct::Environment("target"),
            CalloutKind::Concept => Construct::Environment("concept"),
            CalloutKind::Quote => Construct::Environment("zoe"),
            CalloutKind::FullWidth => Construct::Environment("fullwidth"),
            CalloutKind::Hint | CalloutKind::FinePrint => Construct::Command("fine"),
        }
    }

    /// Source shapes accepted for this kind's directive.
    pub const fn forms(self) -> &'static [CalloutForm] {
        match self {
            CalloutKind::Note
            | CalloutKind::Example
            | CalloutKind::BigExample
            | CalloutKind::Lemma => &[CalloutForm::Titled, CalloutForm::Plain],
            CalloutKind::Corollary | CalloutKind::Warning | CalloutKind::Hint => {
                &[CalloutForm::Plain]
            }
            CalloutKind::Summary
            | CalloutKind::Algorithm
            | CalloutKind::Target
            | CalloutKind::Concept => &[CalloutForm::Block],
            CalloutKind::FinePrint | CalloutKind::Quote | CalloutKind::FullWidth => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_directive_has_a_keyword_and_a_form() {
        for kind in CalloutKind::DIRECTIVES {
            assert!(kind.keyword().is_some(), "{kind:?} has no keyword");
            assert!(!kind.forms().is_empty(), "{kind:?} has no form");
        }
    }

    #[test]
    fn summary_renders_as_definition() {
        assert_eq!(
            CalloutKind::Summary.construct(),
            Construct::Environment("definition")
        );
    }

    #[test]
    fn hint_is_inline() {
        assert_eq!(CalloutKind::Hint.construct(), Construct::Command("fine"));
    }
}
