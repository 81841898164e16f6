// Rust guideline compliant 2026-10-19

//! Terminal UI utilities for the Abundant CLI.
//!
//! This module provides color support, terminal width detection and
//! wrapping of long free-text fields.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stderr)
}

/// Gets the terminal width in columns.
///
/// # Returns
/// The terminal width, or 80 if it cannot be determined
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to fit within the terminal width.
///
/// Every line after the first is indented by `indent` spaces.
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_to(text, indent, get_terminal_width())
}

fn wrap_to(text: &str, indent: usize, width: usize) -> String {
    let available_width = width.saturating_sub(indent);

    if available_width < 10 {
        return text.to_string();
    }

    let mut result = String::new();
    let indent_str = " ".repeat(indent);

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
            if !line.is_empty() {
                result.push_str(&indent_str);
            }
        }

        if line.chars().count() <= available_width {
            result.push_str(line);
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            if current_line.is_empty() {
                current_line.push_str(word);
            } else if current_line.chars().count() + 1 + word.chars().count() <= available_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                result.push_str(&current_line);
                result.push('\n');
                result.push_str(&indent_str);
                current_line = word.to_string();
            }
        }
        result.push_str(&current_line);
    }

    result
}

/// Prints a message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text, such as `Abort`
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `use_color` - Whether color is allowed at all
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints an abort message.
pub fn print_abort(message: &str, use_color: bool) {
    print_status("Abort", Color::Red, message, use_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_terminal_width_returns_positive() {
        assert!(get_terminal_width() > 0);
    }

    #[test]
    fn test_wrap_text_short_text() {
        assert_eq!(wrap_to("short", 0, 80), "short");
    }

    #[test]
    fn test_wrap_long_line_with_indent() {
        let wrapped = wrap_to("alpha beta gamma delta epsilon", 2, 16);
        assert_eq!(wrapped, "alpha beta\n  gamma delta\n  epsilon");
    }

    #[test]
    fn test_wrap_keeps_blank_lines_unindented() {
        assert_eq!(wrap_to("one\n\ntwo", 2, 80), "one\n\n  two");
    }
}
