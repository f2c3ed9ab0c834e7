use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliThemeConfig {
    pub enabled: bool,
    pub user: String,
    pub quote: String,
}

impl Default for CliThemeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            user: "Cyan".to_string(),
            quote: "White".to_string(),
        }
    }
}

pub struct CliTheme {
    pub enabled: bool,
    pub user: crossterm::style::Color,
    pub quote: crossterm::style::Color,
}

impl CliTheme {
    fn from_config(config: CliThemeConfig) -> Self {
        Self {
            enabled: config.enabled,
            user: parse_color(&config.user),
            quote: parse_color(&config.quote),
        }
    }
}

pub fn load_cli_theme(override_path: Option<PathBuf>) -> Result<CliTheme> {
    let path = resolve_cli_theme_path(override_path)?;
    if let Some(path) = path {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("unable to read {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("unable to parse {}", path.display()))?;
        return Ok(CliTheme::from_config(config));
    }
    Ok(CliTheme::from_config(CliThemeConfig::default()))
}

fn resolve_cli_theme_path(override_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = override_path {
        return Ok(Some(path));
    }

    let project_dirs = ProjectDirs::from("", "", "quoter")
        .ok_or_else(|| anyhow!("unable to resolve config directory"))?;
    let candidate = project_dirs.config_dir().join("cli.json");
    if candidate.exists() {
        Ok(Some(candidate))
    } else {
        Ok(None)
    }
}

fn parse_color(name: &str) -> crossterm::style::Color {
    match name.to_lowercase().as_str() {
        "black" => crossterm::style::Color::Black,
        "red" => crossterm::style::Color::DarkRed,
        "green" => crossterm::style::Color::DarkGreen,
        "yellow" => crossterm::style::Color::DarkYellow,
        "blue" => crossterm::style::Color::DarkBlue,
        "magenta" => crossterm::style::Color::DarkMagenta,
        "cyan" => crossterm::style::Color::DarkCyan,
        "gray" => crossterm::style::Color::Grey,
        "darkgray" | "dark_gray" => crossterm::style::Color::DarkGrey,
        "lightred" | "light_red" => crossterm::style::Color::Red,
        "lightgreen" | "light_green" => crossterm::style::Color::Green,
        "lightyellow" | "light_yellow" => crossterm::style::Color::Yellow,
        "lightblue" | "light_blue" => crossterm::style::Color::Blue,
        "lightmagenta" | "light_magenta" => crossterm::style::Color::Magenta,
        "lightcyan" | "light_cyan" => crossterm::style::Color::Cyan,
        "white" => crossterm::style::Color::White,
        _ => crossterm::style::Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_theme_config_default_values() {
        let config = CliThemeConfig::default();
        assert!(config.enabled);
        assert_eq!(config.user, "Cyan");
        assert_eq!(config.quote, "White");
    }

    #[test]
    fn cli_theme_from_config() {
        let config = CliThemeConfig {
            enabled: false,
            user: "Red".to_string(),
            quote: "Blue".to_string(),
        };
        let theme = CliTheme::from_config(config);
        assert!(!theme.enabled);
        assert_eq!(theme.user, crossterm::style::Color::DarkRed);
        assert_eq!(theme.quote, crossterm::style::Color::DarkBlue);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: CliThemeConfig = serde_json::from_str(r#"{"user": "Green"}"#).unwrap();
        assert!(config.enabled);
        assert_eq!(config.user, "Green");
        assert_eq!(config.quote, "White");
    }

    #[test]
    fn parse_color_case_insensitive() {
        assert_eq!(parse_color("RED"), crossterm::style::Color::DarkRed);
        assert_eq!(parse_color("Red"), crossterm::style::Color::DarkRed);
        assert_eq!(parse_color("rEd"), crossterm::style::Color::DarkRed);
    }

    #[test]
    fn parse_color_underscore_variants() {
        assert_eq!(parse_color("light_red"), crossterm::style::Color::Red);
        assert_eq!(parse_color("lightred"), crossterm::style::Color::Red);
        assert_eq!(parse_color("dark_gray"), crossterm::style::Color::DarkGrey);
        assert_eq!(parse_color("darkgray"), crossterm::style::Color::DarkGrey);
    }

    #[test]
    fn parse_color_invalid_defaults_to_white() {
        assert_eq!(parse_color("invalidcolor"), crossterm::style::Color::White);
        assert_eq!(parse_color(""), crossterm::style::Color::White);
    }
}
