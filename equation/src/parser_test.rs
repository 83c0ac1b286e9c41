use crate::parser::{Equation, ParseError};
use crate::tokenizer::{LexError, Token};
use crate::validate::SyntaxError;

fn postfix(text: &str) -> Vec<Token> {
    Equation::parse(text).unwrap().postfix().to_vec()
}

#[test]
fn precedence_ordering() {
    assert_eq!(
        postfix("3 + 4 * 2"),
        [
            Token::Number(3.0),
            Token::Number(4.0),
            Token::Number(2.0),
            Token::Op('*'),
            Token::Op('+'),
        ]
    );
    assert_eq!(
        postfix("(3 + 4) * 2"),
        [
            Token::Number(3.0),
            Token::Number(4.0),
            Token::Op('+'),
            Token::Number(2.0),
            Token::Op('*'),
        ]
    );
}

#[test]
fn left_associativity() {
    assert_eq!(
        postfix("8 - 3 - 2"),
        [
            Token::Number(8.0),
            Token::Number(3.0),
            Token::Op('-'),
            Token::Number(2.0),
            Token::Op('-'),
        ]
    );
    // '^' is left-associative too: 2^2^3 parses as (2^2)^3
    assert_eq!(
        postfix("2^2^3"),
        [
            Token::Number(2.0),
            Token::Number(2.0),
            Token::Op('^'),
            Token::Number(3.0),
            Token::Op('^'),
        ]
    );
}

#[test]
fn function_grouping() {
    assert_eq!(
        postfix("sin(x)"),
        [Token::Variable('x'), Token::Function("sin".to_string())]
    );
    // the function is emitted right after its argument subexpression
    assert_eq!(
        postfix("cos(x + 1) * 2"),
        [
            Token::Variable('x'),
            Token::Number(1.0),
            Token::Op('+'),
            Token::Function("cos".to_string()),
            Token::Number(2.0),
            Token::Op('*'),
        ]
    );
    assert_eq!(
        postfix("sin(cos(x))"),
        [
            Token::Variable('x'),
            Token::Function("cos".to_string()),
            Token::Function("sin".to_string()),
        ]
    );
}

#[test]
fn constants_pass_through() {
    assert_eq!(
        postfix("pi / 2"),
        [
            Token::Constant("pi".to_string()),
            Token::Number(2.0),
            Token::Op('/'),
        ]
    );
}

#[test]
fn parse_errors() {
    assert_eq!(
        Equation::parse("sin(x"),
        Err(ParseError::Syntax(SyntaxError::MismatchedParens))
    );
    assert_eq!(
        Equation::parse("(x))"),
        Err(ParseError::Syntax(SyntaxError::MismatchedParens))
    );
    assert_eq!(
        Equation::parse("2 ++ 3"),
        Err(ParseError::Syntax(SyntaxError::ConsecutiveOperators(2)))
    );
    assert_eq!(
        Equation::parse("tan x"),
        Err(ParseError::Syntax(SyntaxError::FunctionWithoutParens(
            "tan".to_string()
        )))
    );
    assert_eq!(
        Equation::parse("x + bogus"),
        Err(ParseError::Lex(LexError::UnknownIdentifier(
            "bogus".to_string()
        )))
    );
    assert_eq!(
        Equation::parse("1..2"),
        Err(ParseError::Lex(LexError::MalformedNumber("1..".to_string())))
    );
}

#[test]
fn reparse_is_identical() {
    let first = Equation::parse("sin(x)^2 + cos(x)^2").unwrap();
    let second = Equation::parse("sin(x)^2 + cos(x)^2").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.postfix(), second.postfix());
}

#[test]
fn two_variable_parse() {
    let eq = Equation::parse_xy("x + y").unwrap();
    assert_eq!(
        eq.postfix(),
        [Token::Variable('x'), Token::Variable('y'), Token::Op('+')]
    );
}
