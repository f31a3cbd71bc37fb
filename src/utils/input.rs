use crate::utils::error::{AppError, AppResult};
use std::io::{self, BufRead, Write};

/// Read one trimmed line from stdin; `None` on EOF
pub fn prompt_input(prompt: &str) -> AppResult<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| AppError::Io(e.to_string()))?;

    let mut input = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| AppError::Io(e.to_string()))?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

pub fn prompt_yes_no(prompt: &str) -> AppResult<bool> {
    loop {
        let Some(input) = prompt_input(&format!("{} [y/N]: ", prompt))? else {
            return Ok(false);
        };
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'"),
        }
    }
}
