//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Selection flows stay silent on success and on cancellation; only real
//! failures produce output, through [`print_error`].

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }

    #[test]
    fn test_print_info_does_not_panic() {
        print_info("Information message");
    }
}
