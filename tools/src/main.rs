mod input;
mod menus;

fn main() -> Result<(), String> {
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;

    println!("==== Numerical Methods Toolkit ====");
    loop {
        println!("\n1. Root finding (bisection / secant)");
        println!("2. Polynomial interpolation (Lagrange / Newton)");
        println!("3. Numerical integration (trapezoidal / Simpson)");
        println!("4. ODE stepping (Euler / modified Euler)");
        println!("5. Quit");
        let Some(choice) = input::read_count(&mut rl, "Enter choice: ", 1, Some(5))? else {
            return Ok(());
        };
        match choice {
            1 => menus::roots(&mut rl)?,
            2 => menus::interpolation(&mut rl)?,
            3 => menus::integration(&mut rl)?,
            4 => menus::ode(&mut rl)?,
            _ => return Ok(()),
        }
    }
}
