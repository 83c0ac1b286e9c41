//! Parse a textual math expression once into a postfix program, then
//! evaluate it as many times as needed with different variable bindings.
//!
//! ```
//! use equation::Equation;
//! let f = Equation::parse("x^2 - 2").unwrap();
//! assert_eq!(f.eval(2.0).unwrap(), 2.0);
//! ```

mod tokenizer;
pub use tokenizer::{LexError, Token, VarSet, CONSTANTS, FUNCTIONS};

mod validate;
pub use validate::SyntaxError;

mod parser;
pub use parser::{Equation, ParseError};
#[cfg(test)]
mod parser_test;

mod rpneval;
pub use rpneval::EvalError;
#[cfg(test)]
mod rpneval_test;

mod rpnprint;
