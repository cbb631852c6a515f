// src/screens/mod.rs
pub mod auth_screens;
pub mod profile_screens;
pub mod team_screens;
pub mod model_screens;
pub mod assessment_screens;

use std::io::{self, Write};

use crate::models::ClientError;

// Print a prompt and read one trimmed line from stdin
pub fn prompt(label: &str) -> Result<String, ClientError> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

// Prompt with a default used when the user just presses Enter
pub fn prompt_with_default(label: &str, default: &str) -> Result<String, ClientError> {
    let input = prompt(&format!("{} [{}]", label, default))?;

    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

// Ask a yes/no question; anything but y/yes counts as no
pub fn confirm(label: &str) -> Result<bool, ClientError> {
    let input = prompt(&format!("{} (y/N)", label))?;
    Ok(matches!(input.to_lowercase().as_str(), "y" | "yes"))
}
