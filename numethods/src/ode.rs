use equation::Equation;

/// State after one explicit step.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OdeStep {
    pub step: usize,
    pub x: f64,
    pub y: f64,
}

/// Basic (forward) Euler for dy/dx = f(x, y). The right-hand side must be
/// parsed with [`Equation::parse_xy`].
pub fn euler(
    f: &Equation,
    x0: f64,
    y0: f64,
    h: f64,
    steps: usize,
) -> Result<Vec<OdeStep>, String> {
    let (mut x, mut y) = (x0, y0);
    let mut out = Vec::with_capacity(steps);
    for step in 1..=steps {
        let slope = f.eval_xy(x, y).map_err(|e| e.to_string())?;
        y += h * slope;
        x += h;
        out.push(OdeStep { step, x, y });
    }
    Ok(out)
}

/// Modified Euler (Heun): average the slopes at both ends of the step.
pub fn modified_euler(
    f: &Equation,
    x0: f64,
    y0: f64,
    h: f64,
    steps: usize,
) -> Result<Vec<OdeStep>, String> {
    let (mut x, mut y) = (x0, y0);
    let mut out = Vec::with_capacity(steps);
    for step in 1..=steps {
        let k1 = f.eval_xy(x, y).map_err(|e| e.to_string())?;
        let k2 = f.eval_xy(x + h, y + h * k1).map_err(|e| e.to_string())?;
        y += h * (k1 + k2) / 2.0;
        x += h;
        out.push(OdeStep { step, x, y });
    }
    Ok(out)
}
