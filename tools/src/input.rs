//! Prompt helpers. Every reader loops until it gets a valid value and
//! returns `Ok(None)` when the user backs out with Ctrl-C or Ctrl-D.

use equation::Equation;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>, String> {
    match rl.readline(prompt) {
        Ok(line) => {
            let _ = rl.add_history_entry(&line);
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(format!("Readline err: {:?}", e)),
    }
}

pub fn read_f64(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<f64>, String> {
    loop {
        let Some(line) = read_line(rl, prompt)? else {
            return Ok(None);
        };
        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}

pub fn read_count(
    rl: &mut DefaultEditor,
    prompt: &str,
    min: usize,
    max: Option<usize>,
) -> Result<Option<usize>, String> {
    loop {
        let Some(line) = read_line(rl, prompt)? else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(v) if v >= min && max.is_none_or(|m| v <= m) => return Ok(Some(v)),
            _ => match max {
                Some(m) => println!(
                    "Invalid input. Please enter an integer between {} and {}.",
                    min, m
                ),
                None => println!("Invalid input. Please enter an integer >= {}.", min),
            },
        }
    }
}

pub fn read_equation(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<Equation>, String> {
    loop {
        let Some(line) = read_line(rl, prompt)? else {
            return Ok(None);
        };
        match Equation::parse(&line) {
            Ok(eq) => return Ok(Some(eq)),
            Err(e) => println!("Error: {}\nPlease try again.", e),
        }
    }
}

pub fn read_equation_xy(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<Equation>, String> {
    loop {
        let Some(line) = read_line(rl, prompt)? else {
            return Ok(None);
        };
        match Equation::parse_xy(&line) {
            Ok(eq) => return Ok(Some(eq)),
            Err(e) => println!("Error: {}\nPlease try again.", e),
        }
    }
}

/// An integration bound may itself be an x-free expression like `pi/2`;
/// anything that parses is evaluated at x = 0.
pub fn read_bound(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<f64>, String> {
    loop {
        let Some(line) = read_line(rl, prompt)? else {
            return Ok(None);
        };
        if let Ok(v) = line.trim().parse::<f64>() {
            return Ok(Some(v));
        }
        match Equation::parse(&line) {
            Ok(eq) => match eq.eval(0.0) {
                Ok(v) => return Ok(Some(v)),
                Err(e) => println!("Invalid input ({}). Please try again.", e),
            },
            Err(e) => println!("Invalid input ({}). Please try again.", e),
        }
    }
}
