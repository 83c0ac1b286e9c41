use crate::tokenizer::{tokenize, LexError, Token, VarSet};
use crate::validate::{validate, SyntaxError};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ParseError {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(e: SyntaxError) -> Self {
        ParseError::Syntax(e)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "{}", e),
            ParseError::Syntax(e) => write!(f, "{}", e),
        }
    }
}

fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' => 2,
        '^' => 3,
        _ => 0,
    }
}

/// A parsed equation: an immutable postfix program plus the variable set
/// it was compiled against. Parsing always returns a fresh value, so any
/// number of parsed programs can be held and evaluated independently.
#[derive(Clone, PartialEq, Debug)]
pub struct Equation {
    postfix: Vec<Token>,
    vars: VarSet,
}

impl Equation {
    /// Compile an expression over the single variable `x`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, VarSet::X)
    }

    /// Compile a two-variable expression f(x, y), as used for ODE
    /// right-hand sides.
    pub fn parse_xy(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, VarSet::XY)
    }

    fn parse_with(text: &str, vars: VarSet) -> Result<Self, ParseError> {
        let tokens = tokenize(text, vars)?;
        validate(&tokens)?;
        let postfix = to_postfix(tokens)?;
        Ok(Equation { postfix, vars })
    }

    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    pub fn vars(&self) -> VarSet {
        self.vars
    }
}

// Shunting-yard. All binary operators are handled left-associatively,
// including '^' (a compatibility quirk: 2^2^3 is (2^2)^3 here).
fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Variable(_) | Token::Constant(_) => out.push(token),
            Token::Function(_) | Token::OParen => stack.push(token),
            Token::CParen => {
                while let Some(top) = stack.last() {
                    if *top == Token::OParen {
                        break;
                    }
                    out.push(stack.pop().unwrap());
                }
                if stack.pop().is_none() {
                    return Err(SyntaxError::MismatchedParens);
                }
                // a function applies to the group just closed, emit it
                // right after its argument
                if matches!(stack.last(), Some(Token::Function(_))) {
                    out.push(stack.pop().unwrap());
                }
            }
            Token::Op(op) => {
                while let Some(top) = stack.last() {
                    match top {
                        Token::Op(t) if precedence(*t) >= precedence(op) => (),
                        Token::Function(_) => (),
                        _ => break,
                    }
                    out.push(stack.pop().unwrap());
                }
                stack.push(Token::Op(op));
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::OParen {
            return Err(SyntaxError::MismatchedParens);
        }
        out.push(top);
    }
    Ok(out)
}
