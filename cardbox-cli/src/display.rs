//! Console output formatting
//!
//! Acknowledgements carry a `----` marker and failures a `!!!!` marker, so
//! they stand apart from rendered card text; both are colored when stdout
//! is a terminal.

use colored::*;

/// Check if terminal supports colors
pub fn supports_color() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Format an acknowledgement line
pub fn format_ok(message: &str, use_color: bool) -> String {
    let line = format!("---- {message}");
    if use_color {
        line.green().to_string()
    } else {
        line
    }
}

/// Format a failure line
pub fn format_err(message: &str, use_color: bool) -> String {
    let line = format!("!!!! {message}");
    if use_color {
        line.red().to_string()
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_without_color() {
        assert_eq!(format_ok("Card added.", false), "---- Card added.");
        assert_eq!(format_err("nope", false), "!!!! nope");
    }

    #[test]
    fn test_colored_output_keeps_marker() {
        let line = format_err("nope", true);
        assert!(line.contains("!!!! nope"));
    }
}
