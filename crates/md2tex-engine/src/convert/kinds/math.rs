use super::token::Token;

/// Characters masked inside math spans so structural passes leave them alone.
///
/// `-` would read as a list bullet, `>` as a quote marker, `[`/`]` as link or
/// embed syntax and `*` as emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathSymbol {
    Star,
    Angle,
    LeftBracket,
    RightBracket,
    Minus,
}

impl MathSymbol {
    pub const ALL: [MathSymbol; 5] = [
        MathSymbol::Star,
        MathSymbol::Angle,
        MathSymbol::LeftBracket,
        MathSymbol::RightBracket,
        MathSymbol::Minus,
    ];

    /// Tag written between the token delimiters, after the `M` prefix.
    pub const PREFIX: char = 'M';

    pub const fn literal(self) -> char {
        match self {
            MathSymbol::Star => '*',
            MathSymbol::Angle => '>',
            MathSymbol::LeftBracket => '[',
            MathSymbol::RightBracket => ']',
            MathSymbol::Minus => '-',
        }
    }

    pub const fn code(self) -> char {
        match self {
            MathSymbol::Star => 's',
            MathSymbol::Angle => 'a',
            MathSymbol::LeftBracket => 'l',
            MathSymbol::RightBracket => 'r',
            MathSymbol::Minus => 'm',
        }
    }

    pub fn from_literal(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.literal() == c)
    }

    pub fn from_code(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == c)
    }

    pub fn marker(self) -> String {
        format!(
            "{}{}{}{}",
            Token::OPEN,
            Self::PREFIX,
            self.code(),
            Token::CLOSE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_literals_are_a_bijection() {
        for s in MathSymbol::ALL {
            assert_eq!(MathSymbol::from_literal(s.literal()), Some(s));
            assert_eq!(MathSymbol::from_code(s.code()), Some(s));
        }
    }

    #[test]
    fn marker_never_contains_a_protected_literal() {
        for s in MathSymbol::ALL {
            let marker = s.marker();
            assert!(marker.chars().all(|c| MathSymbol::from_literal(c).is_none()));
        }
    }
}
