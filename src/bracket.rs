use serde::Serialize;

use crate::error::ScopeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketKind {
    Paren,
    Square,
    Curly,
}

impl BracketKind {
    /// Kind of an opening or closing bracket character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' | ')' => Some(BracketKind::Paren),
            '[' | ']' => Some(BracketKind::Square),
            '{' | '}' => Some(BracketKind::Curly),
            _ => None,
        }
    }

    pub fn open(self) -> char {
        match self {
            BracketKind::Paren => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            BracketKind::Paren => ')',
            BracketKind::Square => ']',
            BracketKind::Curly => '}',
        }
    }
}

pub fn is_open(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

pub fn is_close(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// Whether `a` and `b` close each other, in either order.
///
/// `a` must be one of the six bracket characters; `b` may be anything.
pub fn corresponds(a: char, b: char) -> Result<bool, ScopeError> {
    let kind = BracketKind::from_char(a).ok_or(ScopeError::InvalidBracket(a))?;
    let partner = if is_open(a) { kind.close() } else { kind.open() };
    Ok(b == partner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(BracketKind::from_char('('), Some(BracketKind::Paren));
        assert_eq!(BracketKind::from_char(')'), Some(BracketKind::Paren));
        assert_eq!(BracketKind::from_char('['), Some(BracketKind::Square));
        assert_eq!(BracketKind::from_char('}'), Some(BracketKind::Curly));
        assert_eq!(BracketKind::from_char('<'), None);
        assert_eq!(BracketKind::from_char('a'), None);
    }

    #[test]
    fn test_open_close_sets_are_disjoint() {
        for c in ['(', '[', '{'] {
            assert!(is_open(c));
            assert!(!is_close(c));
        }
        for c in [')', ']', '}'] {
            assert!(is_close(c));
            assert!(!is_open(c));
        }
        assert!(!is_open('x'));
        assert!(!is_close('x'));
    }

    #[test]
    fn test_corresponds_both_orders() {
        assert_eq!(corresponds('(', ')'), Ok(true));
        assert_eq!(corresponds(')', '('), Ok(true));
        assert_eq!(corresponds('[', ']'), Ok(true));
        assert_eq!(corresponds(']', '['), Ok(true));
        assert_eq!(corresponds('{', '}'), Ok(true));
        assert_eq!(corresponds('}', '{'), Ok(true));
    }

    #[test]
    fn test_corresponds_rejects_wrong_partner() {
        assert_eq!(corresponds('(', ']'), Ok(false));
        assert_eq!(corresponds('{', ')'), Ok(false));
        assert_eq!(corresponds('(', '('), Ok(false));
        assert_eq!(corresponds('[', 'x'), Ok(false));
    }

    #[test]
    fn test_corresponds_invalid_bracket() {
        assert_eq!(corresponds('x', ')'), Err(ScopeError::InvalidBracket('x')));
        assert_eq!(corresponds('<', '>'), Err(ScopeError::InvalidBracket('<')));
    }
}
