use crate::parser::Equation;
use crate::rpneval::EvalError;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => {
        assert!(($lhs - $rhs).abs() < 1.0e-10, "{} != {}", $lhs, $rhs)
    };
}

fn eval(text: &str, x: f64) -> Result<f64, EvalError> {
    Equation::parse(text).unwrap().eval(x)
}

#[test]
fn arithmetic() {
    fuzzy_eq!(eval("3 + 4 * 2", 0.0).unwrap(), 11.0);
    fuzzy_eq!(eval("(3 + 4) * 2", 0.0).unwrap(), 14.0);
    fuzzy_eq!(eval("8 - 3 - 2", 0.0).unwrap(), 3.0);
    fuzzy_eq!(eval("3 / 2 / 4", 0.0).unwrap(), 0.375);
    fuzzy_eq!(eval("2^3", 0.0).unwrap(), 8.0);
    // left-associative power
    fuzzy_eq!(eval("2^2^3", 0.0).unwrap(), 64.0);
}

#[test]
fn variable_binding() {
    fuzzy_eq!(eval("x^2", 3.0).unwrap(), 9.0);
    fuzzy_eq!(eval("x^2", -3.0).unwrap(), 9.0);
    fuzzy_eq!(eval("3 + 4 * 2", 17.5).unwrap(), 11.0);
    // "-x^2" evaluates the rewritten form (0 - x)^2
    fuzzy_eq!(eval("-x^2", 3.0).unwrap(), 9.0);
}

#[test]
fn constants_and_functions() {
    fuzzy_eq!(eval("pi", 0.0).unwrap(), std::f64::consts::PI);
    fuzzy_eq!(eval("sin(pi/2)", 0.0).unwrap(), 1.0);
    fuzzy_eq!(eval("cos(0)", 0.0).unwrap(), 1.0);
    fuzzy_eq!(eval("sin(x)^2 + cos(x)^2", 0.345).unwrap(), 1.0);
    fuzzy_eq!(eval("e^2", 0.0).unwrap(), std::f64::consts::E.powi(2));
    fuzzy_eq!(eval("sqrt(x)", 16.0).unwrap(), 4.0);
    fuzzy_eq!(eval("log(e)", 0.0).unwrap(), 1.0);
    fuzzy_eq!(eval("log10(1000)", 0.0).unwrap(), 3.0);
    fuzzy_eq!(eval("exp(1)", 0.0).unwrap(), std::f64::consts::E);
    fuzzy_eq!(eval("tanh(0)", 0.0).unwrap(), 0.0);
}

#[test]
fn division_by_zero() {
    assert_eq!(eval("1/(x-1)", 1.0), Err(EvalError::DivisionByZero));
    fuzzy_eq!(eval("1/(x-1)", 2.0).unwrap(), 1.0);
}

#[test]
fn domain_errors() {
    assert_eq!(eval("sqrt(x)", -1.0), Err(EvalError::NegativeSqrt));
    assert_eq!(eval("log(x)", 0.0), Err(EvalError::LogOfNonPositive));
    assert_eq!(eval("log(x)", -2.0), Err(EvalError::LogOfNonPositive));
    assert_eq!(eval("log10(x)", 0.0), Err(EvalError::LogOfNonPositive));
}

#[test]
fn unary_minus_quirks() {
    // the wrapper closes before a numeric literal, leaving a malformed
    // program; this matches the lookahead-1 rewrite and is pinned here
    // as a known limitation
    assert_eq!(eval("-3", 0.0), Err(EvalError::NotEnoughOperands));
    // negating a parenthesized group shifts the grouping the same way
    fuzzy_eq!(eval("-(1-5)", 0.0).unwrap(), -6.0);
}

#[test]
fn two_variable_eval() {
    let f = Equation::parse_xy("x + y^2").unwrap();
    fuzzy_eq!(f.eval_xy(1.0, 3.0).unwrap(), 10.0);
    fuzzy_eq!(f.eval_xy(1.0, -3.0).unwrap(), 10.0);
    // an x-only binding cannot satisfy a program that references y
    assert_eq!(f.eval(1.0), Err(EvalError::UnboundVariable('y')));
    // but eval_xy works fine on an x-only program
    let g = Equation::parse_xy("x * 2").unwrap();
    fuzzy_eq!(g.eval_xy(4.0, 99.0).unwrap(), 8.0);
}

#[test]
fn reparse_evaluates_identically() {
    let text = "sin(x) * exp(-x^2) + 1";
    let first = Equation::parse(text).unwrap();
    let v1 = first.eval(0.7).unwrap();
    for _ in 0..3 {
        let again = Equation::parse(text).unwrap();
        fuzzy_eq!(again.eval(0.7).unwrap(), v1);
    }
    // parsed programs are independent values; evaluating one does not
    // disturb another
    let other = Equation::parse("x + 1").unwrap();
    fuzzy_eq!(other.eval(1.0).unwrap(), 2.0);
    fuzzy_eq!(first.eval(0.7).unwrap(), v1);
}
