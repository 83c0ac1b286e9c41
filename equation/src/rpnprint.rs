use crate::parser::Equation;
use crate::tokenizer::Token;
use std::fmt;

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Variable(v) => write!(f, "{}", v),
            Token::Function(name) => write!(f, "{}", name),
            Token::Constant(name) => write!(f, "{}", name),
            Token::Op(op) => write!(f, "{}", op),
            Token::OParen => write!(f, "("),
            Token::CParen => write!(f, ")"),
        }
    }
}

// Space-separated postfix order, handy for echoing the compiled program.
impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.postfix().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::Equation;

    #[test]
    fn postfix_display() {
        let eq = Equation::parse("3 + 4 * 2").unwrap();
        assert_eq!(format!("{}", eq), "3 4 2 * +");
        let eq = Equation::parse("sin(x)^2").unwrap();
        assert_eq!(format!("{}", eq), "x sin 2 ^");
    }
}
