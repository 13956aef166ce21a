//! Terminal utilities for colored output and formatting.

use colored::*;
use std::io::{self, IsTerminal};

/// Check if we're running in a controlling terminal.
pub fn in_controlling_terminal() -> bool {
    io::stdout().is_terminal() && io::stdin().is_terminal()
}

/// Format a string with idegen color codes.
///
/// Supports codes like #R{text}, #G{text}, #Y{text}, #B{text}, #M{text}, #C{text}, #W{text}, #K{text}
pub fn colorize(input: &str) -> String {
    let mut result = input.to_string();

    for code in ['R', 'G', 'Y', 'B', 'M', 'C', 'W', 'K'] {
        let start = format!("#{}{{", code);
        while let Some(start_pos) = result.find(&start) {
            let Some(end_offset) = result[start_pos..].find('}') else {
                break;
            };
            let end_pos = start_pos + end_offset;
            let text = &result[start_pos + start.len()..end_pos];

            let colored = match code {
                'R' => text.red().to_string(),
                'G' => text.green().to_string(),
                'Y' => text.yellow().to_string(),
                'B' => text.blue().to_string(),
                'M' => text.magenta().to_string(),
                'C' => text.cyan().to_string(),
                'W' => text.white().to_string(),
                _ => text.black().to_string(),
            };

            result.replace_range(start_pos..=end_pos, &colored);
        }
    }

    result
}

/// Wrap text to fit a width.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if !current_line.is_empty() && current_line.len() + word.len() + 1 > width {
            lines.push(std::mem::take(&mut current_line));
        }

        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_strips_codes() {
        colored::control::set_override(false);
        assert_eq!(colorize("#G{ok} and #R{bad}"), "ok and bad");
        assert_eq!(colorize("#Y{unterminated"), "#Y{unterminated");
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("set webstorm.executable in ~/.idegen/config", 20);
        assert_eq!(lines, vec!["set", "webstorm.executable", "in ~/.idegen/config"]);
    }
}
