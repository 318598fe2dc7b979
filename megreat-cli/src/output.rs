//! Styled terminal output utilities.

use owo_colors::OwoColorize;

/// Print a header/title
pub fn header(text: &str) {
    println!();
    println!("{}", text.bold().cyan());
    println!("{}", "─".repeat(text.chars().count()).dimmed());
    println!();
}

/// Print the megreat banner
pub fn logo() {
    let logo = r#"
    ┌┬┐┌─┐┌─┐┬─┐┌─┐┌─┐┌┬┐
    │││├┤ │ ┬├┬┘├┤ ├─┤ │
    ┴ ┴└─┘└─┘┴└─└─┘┴ ┴ ┴
    "#;
    println!("{}", logo.bright_cyan().bold());
}

/// Print a section header
pub fn section(text: &str) {
    println!("{}", text.bold().white());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a success message
pub fn success(text: &str) {
    println!("{} {}", "✔".green().bold(), text.green());
}

/// Print an info message
pub fn info(text: &str) {
    println!("{} {}", "ℹ".blue().bold(), text);
}

/// Print an error message
pub fn error(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}

/// Print a step indicator
pub fn step(current: usize, total: usize, text: &str) {
    println!("{} {}", format!("[{}/{}]", current, total).dimmed(), text);
}

/// Print a numbered list item
pub fn numbered_item(number: usize, text: &str) {
    println!("  {}. {}", number.to_string().dimmed(), text);
}

/// Print a newline
pub fn newline() {
    println!();
}
