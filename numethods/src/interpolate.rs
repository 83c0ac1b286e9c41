/// Lagrange interpolation of y at `at` through the points `(xs, ys)`.
pub fn lagrange(xs: &[f64], ys: &[f64], at: f64) -> f64 {
    let n = xs.len();
    let mut result = 0.0;
    for i in 0..n {
        let mut numerator = 1.0;
        let mut denominator = 1.0;
        for j in 0..n {
            if i != j {
                numerator *= at - xs[j];
                denominator *= xs[i] - xs[j];
            }
        }
        result += ys[i] * (numerator / denominator);
    }
    result
}

/// Inverse interpolation: x for a given y, with the roles of the two
/// coordinates swapped.
pub fn lagrange_inverse(xs: &[f64], ys: &[f64], at: f64) -> f64 {
    lagrange(ys, xs, at)
}

/// Newton divided differences over a set of distinct abscissas.
/// `table[i][j]` holds the order-i difference over `xs[j..=j + i]`;
/// row 0 is the y values themselves.
#[derive(Clone, PartialEq, Debug)]
pub struct DividedDifferences {
    xs: Vec<f64>,
    table: Vec<Vec<f64>>,
}

impl DividedDifferences {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, String> {
        let n = xs.len();
        if n < 2 || ys.len() != n {
            return Err("Need at least two points with matching x and y counts".to_string());
        }
        for i in 0..n {
            for j in 0..i {
                if (xs[i] - xs[j]).abs() < 1e-9 {
                    return Err(format!(
                        "Duplicate value {}: x values must be distinct",
                        xs[i]
                    ));
                }
            }
        }

        let mut table = vec![ys];
        for i in 1..n {
            let prev = &table[i - 1];
            let mut row = Vec::with_capacity(n - i);
            for j in 0..n - i {
                row.push((prev[j + 1] - prev[j]) / (xs[i + j] - xs[j]));
            }
            table.push(row);
        }
        Ok(DividedDifferences { xs, table })
    }

    /// Evaluate the interpolating polynomial. The form is anchored at the
    /// nearest end of the table: forward from the first node when the
    /// query sits closer to it, backward from the last node otherwise.
    pub fn eval(&self, at: f64) -> f64 {
        let n = self.xs.len();
        let mut p = 0.0;
        if self.forward(at) {
            for i in 0..n {
                let mut k = 1.0;
                for j in 0..i {
                    k *= at - self.xs[j];
                }
                p += k * self.table[i][0];
            }
        } else {
            for i in 0..n {
                let mut k = 1.0;
                for j in 0..i {
                    k *= at - self.xs[n - 1 - j];
                }
                p += k * self.table[i][n - 1 - i];
            }
        }
        p
    }

    /// Whether `eval(at)` uses the forward form anchored at the first node.
    pub fn forward(&self, at: f64) -> bool {
        let n = self.xs.len();
        (at - self.xs[0]).abs() < (at - self.xs[n - 1]).abs()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn table(&self) -> &[Vec<f64>] {
        &self.table
    }

    pub fn degree(&self) -> usize {
        self.xs.len() - 1
    }

    /// Smallest and largest abscissa; queries outside are extrapolation.
    pub fn range(&self) -> (f64, f64) {
        let mut lo = self.xs[0];
        let mut hi = self.xs[0];
        for &x in &self.xs[1..] {
            if x < lo {
                lo = x;
            }
            if x > hi {
                hi = x;
            }
        }
        (lo, hi)
    }
}
