//! Inspect command: parse only and print the recognized fields as JSON.

use crate::assertion;
use crate::input::read_assertion;
use colored::Colorize;
use std::path::Path;

pub fn run(assertion: Option<&str>, file: Option<&Path>) -> anyhow::Result<bool> {
    let raw = read_assertion(assertion, file)?;
    match assertion::parse(&raw) {
        Ok(fields) => {
            println!("{}", serde_json::to_string_pretty(&fields)?);
            Ok(true)
        }
        Err(e) => {
            println!("{}", e.to_string().red());
            Ok(false)
        }
    }
}
