use crate::tokenizer::Token;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SyntaxError {
    MismatchedParens,
    ConsecutiveOperators(usize),
    FunctionWithoutParens(String),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyntaxError::MismatchedParens => write!(f, "Mismatched parentheses in equation"),
            SyntaxError::ConsecutiveOperators(pos) => {
                write!(f, "Consecutive operators at position {}", pos)
            }
            SyntaxError::FunctionWithoutParens(name) => {
                write!(f, "Function '{}' not followed by parentheses", name)
            }
        }
    }
}

/// Structural checks that must pass before postfix conversion: balanced
/// parentheses (the running depth may never go negative), no two adjacent
/// operators, and every function immediately followed by its `(`.
pub fn validate(tokens: &[Token]) -> Result<(), SyntaxError> {
    let mut depth = 0i32;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::OParen => depth += 1,
            Token::CParen => {
                depth -= 1;
                if depth < 0 {
                    return Err(SyntaxError::MismatchedParens);
                }
            }
            Token::Op(_) => {
                if i > 0 && matches!(tokens[i - 1], Token::Op(_)) {
                    return Err(SyntaxError::ConsecutiveOperators(i));
                }
            }
            Token::Function(name) => {
                if tokens.get(i + 1) != Some(&Token::OParen) {
                    return Err(SyntaxError::FunctionWithoutParens(name.clone()));
                }
            }
            _ => (),
        }
    }
    if depth != 0 {
        return Err(SyntaxError::MismatchedParens);
    }
    Ok(())
}

///////////////////////////////////////////////////////////////////////////////
