use crate::cli::theme::CliTheme;
use crossterm::style::Stylize;
use std::io::IsTerminal;

pub fn print_attributed(user: &str, quote: &str, theme: &CliTheme) {
    let use_color = theme.enabled && std::io::stdout().is_terminal();
    println!(
        "{}: {}",
        colorize(user, theme.user, use_color),
        colorize(quote, theme.quote, use_color)
    );
}

pub fn print_bare(quote: &str, theme: &CliTheme) {
    let use_color = theme.enabled && std::io::stdout().is_terminal();
    println!("{}", colorize(quote, theme.quote, use_color));
}

fn colorize(text: &str, color: crossterm::style::Color, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    #[test]
    fn colorize_disabled_returns_plain_text() {
        assert_eq!(colorize("test", Color::Cyan, false), "test");
    }

    #[test]
    fn colorize_enabled_returns_ansi_colored() {
        let result = colorize("test", Color::Cyan, true);
        // ANSI escape sequences should be present
        assert!(result.contains("\x1b["));
        assert!(result.contains("test"));
    }
}
