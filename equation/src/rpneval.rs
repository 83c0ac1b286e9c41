use crate::parser::Equation;
use crate::tokenizer::{lookup_constant, Token};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EvalError {
    NotEnoughOperands,
    DivisionByZero,
    NegativeSqrt,
    LogOfNonPositive,
    UnboundVariable(char),
    BadToken(String),
    InvalidExpression,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::NotEnoughOperands => write!(f, "Not enough operands"),
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::NegativeSqrt => write!(f, "Square root of negative number"),
            EvalError::LogOfNonPositive => write!(f, "Logarithm of non-positive number"),
            EvalError::UnboundVariable(v) => write!(f, "No value bound for variable '{}'", v),
            EvalError::BadToken(t) => write!(f, "Cannot evaluate token '{}'", t),
            EvalError::InvalidExpression => write!(f, "Invalid expression"),
        }
    }
}

impl Equation {
    /// Evaluate at `x`. Fails if the program references `y`.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.eval_bindings(x, None)
    }

    /// Evaluate a two-variable program at `(x, y)`.
    pub fn eval_xy(&self, x: f64, y: f64) -> Result<f64, EvalError> {
        self.eval_bindings(x, Some(y))
    }

    fn eval_bindings(&self, x: f64, y: Option<f64>) -> Result<f64, EvalError> {
        let mut stack: Vec<f64> = Vec::new();

        for token in self.postfix() {
            match token {
                Token::Number(n) => stack.push(*n),
                Token::Constant(name) => match lookup_constant(name) {
                    Some(value) => stack.push(value),
                    None => return Err(EvalError::BadToken(name.clone())),
                },
                Token::Variable(v) => match (*v, y) {
                    ('x', _) => stack.push(x),
                    ('y', Some(yv)) => stack.push(yv),
                    _ => return Err(EvalError::UnboundVariable(*v)),
                },
                Token::Op(op) => {
                    let b = stack.pop().ok_or(EvalError::NotEnoughOperands)?;
                    let a = stack.pop().ok_or(EvalError::NotEnoughOperands)?;
                    stack.push(match op {
                        '+' => a + b,
                        '-' => a - b,
                        '*' => a * b,
                        '/' => {
                            if b == 0.0 {
                                return Err(EvalError::DivisionByZero);
                            }
                            a / b
                        }
                        '^' => a.powf(b),
                        _ => return Err(EvalError::BadToken(op.to_string())),
                    });
                }
                Token::Function(name) => {
                    let a = stack.pop().ok_or(EvalError::NotEnoughOperands)?;
                    stack.push(apply_function(name, a)?);
                }
                Token::OParen | Token::CParen => {
                    return Err(EvalError::BadToken(token.to_string()))
                }
            }
        }

        let result = stack.pop().ok_or(EvalError::NotEnoughOperands)?;
        if !stack.is_empty() {
            return Err(EvalError::InvalidExpression);
        }
        Ok(result)
    }
}

fn apply_function(name: &str, a: f64) -> Result<f64, EvalError> {
    match name {
        "sin" => Ok(a.sin()),
        "cos" => Ok(a.cos()),
        "tan" => Ok(a.tan()),
        "asin" => Ok(a.asin()),
        "acos" => Ok(a.acos()),
        "atan" => Ok(a.atan()),
        "sinh" => Ok(a.sinh()),
        "cosh" => Ok(a.cosh()),
        "tanh" => Ok(a.tanh()),
        "sqrt" => {
            if a < 0.0 {
                Err(EvalError::NegativeSqrt)
            } else {
                Ok(a.sqrt())
            }
        }
        "exp" => Ok(a.exp()),
        "log" => {
            if a <= 0.0 {
                Err(EvalError::LogOfNonPositive)
            } else {
                Ok(a.ln())
            }
        }
        "log10" => {
            if a <= 0.0 {
                Err(EvalError::LogOfNonPositive)
            } else {
                Ok(a.log10())
            }
        }
        other => Err(EvalError::BadToken(other.to_string())),
    }
}
