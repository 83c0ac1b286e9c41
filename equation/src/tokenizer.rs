use std::f64::consts;
use std::fmt;

/// Unary functions the tokenizer recognizes. Fixed at compile time, an
/// `Equation` can never register new ones at runtime.
pub const FUNCTIONS: [&str; 13] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh", "sqrt", "exp", "log",
    "log10",
];

/// Named constants, also fixed at compile time.
pub const CONSTANTS: [(&str, f64); 2] = [("pi", consts::PI), ("e", consts::E)];

pub(crate) fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANTS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

fn is_function(name: &str) -> bool {
    FUNCTIONS.contains(&name)
}

fn is_operator(c: char) -> bool {
    c == '+' || c == '-' || c == '*' || c == '/' || c == '^'
}

/// The free variables an equation may reference: `x` alone, or `x` and `y`
/// for two-variable right-hand sides like an ODE's f(x, y).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VarSet {
    X,
    XY,
}

impl VarSet {
    fn contains(&self, name: char) -> bool {
        match self {
            VarSet::X => name == 'x',
            VarSet::XY => name == 'x' || name == 'y',
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Number(f64),
    Variable(char),
    Function(String),
    Constant(String),
    Op(char),
    OParen,
    CParen,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LexError {
    InvalidCharacter(char),
    MalformedNumber(String),
    UnknownIdentifier(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LexError::InvalidCharacter(c) => write!(f, "Invalid character: '{}'", c),
            LexError::MalformedNumber(n) => write!(f, "Invalid number format: '{}'", n),
            LexError::UnknownIdentifier(id) => write!(f, "Unknown identifier: {}", id),
        }
    }
}

// A minus is unary at the start of the stream, right after '(' or right
// after another operator.
fn makes_unary(tokens: &[Token]) -> bool {
    matches!(tokens.last(), None | Some(Token::OParen) | Some(Token::Op(_)))
}

/// Scan `text` into a token sequence. The unary-minus rewrite emits the
/// wrapper `( 0 - … )` in place of the sign; only a directly following
/// `(` or variable is pulled inside the wrapper, any other operand is
/// left for the next pass and ends up outside it. That lookahead-1 rule
/// is deliberate, see the crate tests for the shapes it produces.
pub fn tokenize(text: &str, vars: VarSet) -> Result<Vec<Token>, LexError> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // numbers, including scientific notation
        if c.is_ascii_digit() || c == '.' {
            let mut num = String::new();
            let mut has_decimal = false;
            let mut has_exponent = false;
            while i < chars.len() {
                let d = chars[i];
                let exponent_sign = (d == '+' || d == '-')
                    && i > 0
                    && (chars[i - 1] == 'e' || chars[i - 1] == 'E');
                if !(d.is_ascii_digit() || d == '.' || d == 'e' || d == 'E' || exponent_sign) {
                    break;
                }
                if d == '.' {
                    if has_decimal || has_exponent {
                        return Err(LexError::MalformedNumber(format!("{}{}", num, d)));
                    }
                    has_decimal = true;
                } else if d == 'e' || d == 'E' {
                    if has_exponent {
                        return Err(LexError::MalformedNumber(format!("{}{}", num, d)));
                    }
                    has_exponent = true;
                }
                num.push(d);
                i += 1;
            }
            let value = num
                .parse::<f64>()
                .map_err(|_| LexError::MalformedNumber(num.clone()))?;
            tokens.push(Token::Number(value));
            continue;
        }

        // functions, constants and the variable(s)
        if c.is_alphabetic() {
            let mut word = String::new();
            while i < chars.len() && chars[i].is_alphanumeric() {
                word.push(chars[i]);
                i += 1;
            }
            if is_function(&word) {
                tokens.push(Token::Function(word));
            } else if lookup_constant(&word).is_some() {
                tokens.push(Token::Constant(word));
            } else if word.eq_ignore_ascii_case("x") {
                tokens.push(Token::Variable('x'));
            } else if vars == VarSet::XY && word.eq_ignore_ascii_case("y") {
                tokens.push(Token::Variable('y'));
            } else {
                return Err(LexError::UnknownIdentifier(word));
            }
            continue;
        }

        if is_operator(c) || c == '(' || c == ')' {
            if c == '-' && makes_unary(&tokens) {
                tokens.push(Token::OParen);
                tokens.push(Token::Number(0.0));
                tokens.push(Token::Op('-'));
                match chars.get(i + 1) {
                    Some(&'(') => {
                        tokens.push(Token::OParen);
                        i += 1;
                    }
                    Some(&v) if vars.contains(v) => {
                        tokens.push(Token::Variable(v));
                        i += 1;
                    }
                    _ => {} // numbers get tokenized on the next pass
                }
                tokens.push(Token::CParen);
                i += 1;
            } else {
                tokens.push(match c {
                    '(' => Token::OParen,
                    ')' => Token::CParen,
                    op => Token::Op(op),
                });
                i += 1;
            }
            continue;
        }

        return Err(LexError::InvalidCharacter(c));
    }

    Ok(tokens)
}
