//! The interactive flows. Each returns to the main menu on completion or
//! when the user cancels a prompt.

use crate::input;
use numethods::{bisection, euler, lagrange, lagrange_inverse, modified_euler, secant};
use numethods::{DividedDifferences, Samples};
use rustyline::DefaultEditor;

macro_rules! prompt {
    ($e:expr) => {
        match $e? {
            Some(v) => v,
            None => return Ok(()),
        }
    };
}

pub fn roots(rl: &mut DefaultEditor) -> Result<(), String> {
    println!("\n==== Root Finding ====");
    println!("1. Bisection method");
    println!("2. Secant method");
    let choice = prompt!(input::read_count(rl, "Enter choice: ", 1, Some(2)));

    let f = prompt!(input::read_equation(rl, "Enter function f(x): "));
    let x0 = prompt!(input::read_f64(rl, "Enter first guess x0: "));
    let x1 = prompt!(input::read_f64(rl, "Enter second guess x1: "));
    let tol = prompt!(input::read_f64(rl, "Enter tolerance: "));
    let max_iter = prompt!(input::read_count(rl, "Enter max iterations: ", 1, None));

    if choice == 1 {
        match bisection(&f, x0, x1, tol, max_iter) {
            Err(e) => println!("{}", e),
            Ok(search) => {
                println!(
                    "{:<8}{:<15}{:<15}{:<15}{:<15}",
                    "Iter", "a", "b", "c", "f(c)"
                );
                for s in &search.steps {
                    println!(
                        "{:<8}{:<15.6}{:<15.6}{:<15.6}{:<15.6}",
                        s.iter, s.a, s.b, s.c, s.fc
                    );
                }
                if search.converged {
                    println!("\nRoot found: {:.6}", search.root);
                } else {
                    println!(
                        "\nApproximate root after max iterations: {:.6}",
                        search.root
                    );
                }
            }
        }
    } else {
        match secant(&f, x0, x1, tol, max_iter) {
            Err(e) => println!("{}", e),
            Ok(search) => {
                for s in &search.steps {
                    println!("Iteration {}: x = {:.6}, f(x) = {:.6}", s.iter, s.x, s.fx);
                }
                if search.converged {
                    println!("Converged to root: {:.6}", search.root);
                } else {
                    println!(
                        "Did not converge within the maximum number of iterations. \
                         Last approximation: {:.6}",
                        search.root
                    );
                }
            }
        }
    }
    Ok(())
}

fn read_points(
    rl: &mut DefaultEditor,
    n: usize,
) -> Result<Option<(Vec<f64>, Vec<f64>)>, String> {
    let mut xs: Vec<f64> = Vec::with_capacity(n);
    for i in 0..n {
        loop {
            let Some(v) = input::read_f64(rl, &format!("Enter X[{}]: ", i))? else {
                return Ok(None);
            };
            if xs.iter().any(|&p| (p - v).abs() < 1e-9) {
                println!("Duplicate value found! X values must be distinct.");
            } else {
                xs.push(v);
                break;
            }
        }
    }
    println!();
    let mut ys = Vec::with_capacity(n);
    for i in 0..n {
        let Some(v) = input::read_f64(rl, &format!("Enter F[{}]: ", i))? else {
            return Ok(None);
        };
        ys.push(v);
    }
    println!();
    Ok(Some((xs, ys)))
}

pub fn interpolation(rl: &mut DefaultEditor) -> Result<(), String> {
    println!("\n==== Polynomial Interpolation ====");
    println!("1. Lagrange: y for a given x");
    println!("2. Lagrange: x for a given y (inverse interpolation)");
    println!("3. Newton divided differences");
    let choice = prompt!(input::read_count(rl, "Enter choice: ", 1, Some(3)));

    let n = prompt!(input::read_count(
        rl,
        "Enter number of points (2-20): ",
        2,
        Some(20)
    ));
    let (xs, ys) = prompt!(read_points(rl, n));

    match choice {
        1 => {
            let at = prompt!(input::read_f64(rl, "Enter the value of x to interpolate y: "));
            println!(
                "\nInterpolated value at x = {} is y(x) = {:.6}",
                at,
                lagrange(&xs, &ys, at)
            );
        }
        2 => {
            let at = prompt!(input::read_f64(rl, "Enter the value of y to interpolate x: "));
            println!(
                "\nInterpolated value at y = {} is x(y) = {:.6}",
                at,
                lagrange_inverse(&xs, &ys, at)
            );
        }
        _ => {
            let dd = match DividedDifferences::new(xs, ys) {
                Ok(dd) => dd,
                Err(e) => {
                    println!("{}", e);
                    return Ok(());
                }
            };
            let at = prompt!(input::read_f64(rl, "Enter value of X to evaluate f(X): "));
            let (lo, hi) = dd.range();
            if at < lo || at > hi {
                println!(
                    "Warning: X = {} is outside the interpolation range [{}, {}].",
                    at, lo, hi
                );
                println!("The result might be less accurate (this is extrapolation).\n");
            }
            print_difference_table(&dd, at);
            println!("\nThe value of P{}({}) = {:.6}", dd.degree(), at, dd.eval(at));
        }
    }
    Ok(())
}

// Rows follow the anchoring direction: ascending differences from the
// first node for the forward form, from the last node for the backward.
fn print_difference_table(dd: &DividedDifferences, at: f64) {
    let n = dd.xs().len();
    let table = dd.table();

    print!("\nSn\tXi\tf(Xi)\t");
    for i in 1..n {
        print!("{} diff\t", i);
    }
    println!();

    for i in 0..n {
        print!("{}\t{:.4}\t", i + 1, dd.xs()[i]);
        if dd.forward(at) {
            for j in 0..n - i {
                print!("{:.4}\t", table[j][i]);
            }
        } else {
            for j in 0..=i {
                print!("{:.4}\t", table[j][i - j]);
            }
        }
        println!();
    }
}

pub fn integration(rl: &mut DefaultEditor) -> Result<(), String> {
    println!("\n==== Numerical Integration ====");
    let f = prompt!(input::read_equation(
        rl,
        "Enter equation (e.g., exp(-x^2)): "
    ));

    let a = prompt!(input::read_bound(rl, "Enter lower bound (a): "));
    let b = loop {
        let b = prompt!(input::read_bound(rl, "Enter upper bound (b): "));
        if b > a {
            break b;
        }
        println!("Upper bound must be greater than lower bound.");
    };
    let n = prompt!(input::read_count(
        rl,
        "Enter number of points (>=2): ",
        2,
        None
    ));

    let samples = match Samples::generate(&f, a, b, n) {
        Ok(s) => s,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };
    print_samples_table(&samples);

    loop {
        println!("\nChoose integration method:");
        println!("1. Trapezoidal Rule");
        println!("2. Simpson's 1/3 Rule");
        println!("3. Simpson's 3/8 Rule");
        println!("4. All Methods");
        println!("5. Back");
        let choice = prompt!(input::read_count(rl, "Enter choice: ", 1, Some(5)));
        match choice {
            1 => println!("\nTrapezoidal Rule Result: {:.6}", samples.trapezoidal()),
            2 => match samples.simpson13() {
                Ok(v) => println!("\nSimpson's 1/3 Rule Result: {:.6}", v),
                Err(e) => println!("Error: {}", e),
            },
            3 => match samples.simpson38() {
                Ok(v) => println!("\nSimpson's 3/8 Rule Result: {:.6}", v),
                Err(e) => println!("Error: {}", e),
            },
            4 => {
                println!("\nAll Integration Methods:");
                println!("Trapezoidal Rule: {:.6}", samples.trapezoidal());
                match samples.simpson13() {
                    Ok(v) => println!("Simpson's 1/3 Rule: {:.6}", v),
                    Err(e) => println!("Simpson's 1/3 Rule: {}", e),
                }
                match samples.simpson38() {
                    Ok(v) => println!("Simpson's 3/8 Rule: {:.6}", v),
                    Err(e) => println!("Simpson's 3/8 Rule: {}", e),
                }
            }
            _ => return Ok(()),
        }
    }
}

fn print_samples_table(samples: &Samples) {
    println!("\nGenerated Points Table:");
    println!("Index\tx\t\tf(x)");
    let n = samples.len();
    if n <= 10 {
        for i in 0..n {
            println!("{}\t{:.6}\t{:.6}", i, samples.x[i], samples.fx[i]);
        }
    } else {
        for i in 0..5 {
            println!("{}\t{:.6}\t{:.6}", i, samples.x[i], samples.fx[i]);
        }
        println!("...\t...\t\t...");
        for i in n - 5..n {
            println!("{}\t{:.6}\t{:.6}", i, samples.x[i], samples.fx[i]);
        }
    }
}

pub fn ode(rl: &mut DefaultEditor) -> Result<(), String> {
    println!("\n==== ODE Stepping ====");
    println!("1. Basic Euler method");
    println!("2. Modified Euler method");
    println!("3. Both");
    let choice = prompt!(input::read_count(rl, "Enter choice: ", 1, Some(3)));

    let f = prompt!(input::read_equation_xy(rl, "Enter f(x, y) for dy/dx: "));
    let x0 = prompt!(input::read_f64(rl, "Enter initial x0: "));
    let y0 = prompt!(input::read_f64(rl, "Enter initial y0: "));
    let h = prompt!(input::read_f64(rl, "Enter step size h: "));
    let steps = prompt!(input::read_count(rl, "Enter number of steps: ", 1, None));

    if choice == 1 || choice == 3 {
        match euler(&f, x0, y0, h, steps) {
            Err(e) => println!("{}", e),
            Ok(trace) => print_ode_table("Basic Euler Method", &trace),
        }
    }
    if choice == 2 || choice == 3 {
        match modified_euler(&f, x0, y0, h, steps) {
            Err(e) => println!("{}", e),
            Ok(trace) => print_ode_table("Modified Euler Method", &trace),
        }
    }
    Ok(())
}

fn print_ode_table(title: &str, trace: &[numethods::OdeStep]) {
    println!("\n{}:", title);
    println!("{:>6}{:>15}{:>15}", "Step", "x", "y");
    println!("----------------------------------------");
    for s in trace {
        println!("{:>6}{:>15.6}{:>15.6}", s.step, s.x, s.y);
    }
}
