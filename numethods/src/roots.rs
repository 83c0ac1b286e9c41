use equation::Equation;

/// One bisection iteration: the bracket before halving, the midpoint and
/// its function value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BisectionStep {
    pub iter: usize,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub fc: f64,
}

/// One secant iteration: the new iterate and its function value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SecantStep {
    pub iter: usize,
    pub x: f64,
    pub fx: f64,
}

/// Outcome of a root search. `root` is the best approximation found even
/// when the tolerance was not reached within the iteration budget.
#[derive(Clone, PartialEq, Debug)]
pub struct RootSearch<S> {
    pub steps: Vec<S>,
    pub root: f64,
    pub converged: bool,
}

/// Bisection on `[a, b]`. Requires a sign change over the bracket.
/// Converges when `|f(c)| < tol` at a midpoint `c`.
pub fn bisection(
    f: &Equation,
    mut a: f64,
    mut b: f64,
    tol: f64,
    max_iter: usize,
) -> Result<RootSearch<BisectionStep>, String> {
    let mut fa = f.eval(a).map_err(|e| e.to_string())?;
    let fb = f.eval(b).map_err(|e| e.to_string())?;
    if fa * fb >= 0.0 {
        return Err("No sign change: f(a) and f(b) must have opposite signs".to_string());
    }

    let mut steps = Vec::new();
    for iter in 1..=max_iter {
        let c = (a + b) / 2.0;
        let fc = f.eval(c).map_err(|e| e.to_string())?;
        steps.push(BisectionStep { iter, a, b, c, fc });

        if fc.abs() < tol {
            return Ok(RootSearch {
                steps,
                root: c,
                converged: true,
            });
        }
        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }
    Ok(RootSearch {
        steps,
        root: (a + b) / 2.0,
        converged: false,
    })
}

/// Secant iteration from the two starting guesses. Converges when two
/// successive iterates agree within `tol`; a flat secant (denominator
/// under 1e-12) stops the search early without convergence.
pub fn secant(
    f: &Equation,
    mut x0: f64,
    mut x1: f64,
    tol: f64,
    max_iter: usize,
) -> Result<RootSearch<SecantStep>, String> {
    let mut f0 = f.eval(x0).map_err(|e| e.to_string())?;
    let mut f1 = f.eval(x1).map_err(|e| e.to_string())?;

    let mut steps = Vec::new();
    let mut x2 = x1;
    for iter in 1..=max_iter {
        if (f1 - f0).abs() < 1e-12 {
            return Ok(RootSearch {
                steps,
                root: x1,
                converged: false,
            });
        }
        x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
        let f2 = f.eval(x2).map_err(|e| e.to_string())?;
        steps.push(SecantStep {
            iter,
            x: x2,
            fx: f2,
        });

        if (x2 - x1).abs() < tol {
            return Ok(RootSearch {
                steps,
                root: x2,
                converged: true,
            });
        }
        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = f2;
    }
    Ok(RootSearch {
        steps,
        root: x2,
        converged: false,
    })
}
