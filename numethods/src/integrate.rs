use equation::Equation;

/// A function sampled at `n` uniform nodes over `[a, b]`, ready for the
/// composite quadrature rules. Parse once, sample once, integrate with
/// as many rules as needed.
#[derive(Clone, PartialEq, Debug)]
pub struct Samples {
    pub a: f64,
    pub b: f64,
    pub h: f64,
    pub x: Vec<f64>,
    pub fx: Vec<f64>,
}

impl Samples {
    pub fn generate(f: &Equation, a: f64, b: f64, n: usize) -> Result<Samples, String> {
        if n < 2 {
            return Err("Need at least two sample points".to_string());
        }
        if b <= a {
            return Err("Upper bound must be greater than lower bound".to_string());
        }
        let h = (b - a) / (n as f64 - 1.0);
        let mut x = Vec::with_capacity(n);
        let mut fx = Vec::with_capacity(n);
        for i in 0..n {
            let xi = a + i as f64 * h;
            let fi = f
                .eval(xi)
                .map_err(|e| format!("Error evaluating at x = {}: {}", xi, e))?;
            x.push(xi);
            fx.push(fi);
        }
        Ok(Samples { a, b, h, x, fx })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of subintervals between the sample nodes.
    pub fn intervals(&self) -> usize {
        self.x.len() - 1
    }

    pub fn trapezoidal(&self) -> f64 {
        let n = self.x.len();
        let mut sum = self.fx[0] + self.fx[n - 1];
        for i in 1..n - 1 {
            sum += 2.0 * self.fx[i];
        }
        self.h / 2.0 * sum
    }

    /// Simpson's 1/3 rule; the interval count must be even.
    pub fn simpson13(&self) -> Result<f64, String> {
        let n = self.x.len();
        if (n - 1) % 2 != 0 {
            return Err("Simpson's 1/3 needs an even number of intervals".to_string());
        }
        let mut sum = self.fx[0] + self.fx[n - 1];
        for i in 1..n - 1 {
            sum += if i % 2 == 0 { 2.0 } else { 4.0 } * self.fx[i];
        }
        Ok(self.h / 3.0 * sum)
    }

    /// Simpson's 3/8 rule; the interval count must be divisible by 3.
    pub fn simpson38(&self) -> Result<f64, String> {
        let n = self.x.len();
        if (n - 1) % 3 != 0 {
            return Err("Simpson's 3/8 needs an interval count divisible by 3".to_string());
        }
        let mut sum = self.fx[0] + self.fx[n - 1];
        for i in 1..n - 1 {
            sum += if i % 3 == 0 { 2.0 } else { 3.0 } * self.fx[i];
        }
        Ok(3.0 * self.h / 8.0 * sum)
    }
}
