use crate::report::TestResults;
use serde::Deserialize;
use std::io::IsTerminal;

/// Enum representing a color in different forms.
///
/// Note: to represent a non-ansi color, you must use
/// a terminal emulator that can handle truecolor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Color {
    RGB(u8, u8, u8), // [255, 0, 0]
    Ansi(u8),        // ANSI 256 color code
    Named(String),   // "red" "blue" "green", or a hex string like "#FF5733"
}

impl Color {
    pub fn to_ansi_foreground(&self) -> String {
        match self {
            Self::Named(name) if name.starts_with('#') => Self::hex_to_ansi(name),
            Self::Named(name) => {
                let code = match name.to_lowercase().as_str() {
                    "black" => 0,
                    "red" => 1,
                    "green" => 2,
                    "yellow" => 3,
                    "blue" => 4,
                    "magenta" => 5,
                    "cyan" => 6,
                    "white" => 7,
                    "bright black" | "brightblack" | "gray" | "grey" => 60,
                    "bright red" | "brightred" => 61,
                    "bright green" | "brightgreen" => 62,
                    "bright yellow" | "brightyellow" => 63,
                    _ => return String::new(),
                };

                format!("\x1b[{}m", 30 + code)
            }
            Self::RGB(r, g, b) => format!("\x1b[38;2;{};{};{}m", r, g, b),
            Self::Ansi(code) => format!("\x1b[38;5;{}m", code),
        }
    }

    fn hex_to_ansi(hex: &str) -> String {
        let hex = hex.trim_start_matches('#');

        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return format!("\x1b[38;2;{};{};{}m", r, g, b);
            }
        }

        String::new()
    }

    /// Wraps `s` in this color, then resets.
    /// Unknown colors leave the text untouched.
    pub fn paint<S: AsRef<str>>(&self, s: S) -> String {
        let code = self.to_ansi_foreground();

        if code.is_empty() {
            return s.as_ref().to_owned();
        }

        format!("{}{}\x1b[0m", code, s.as_ref())
    }
}

/// Colors used for the exclamation, picked by the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutcomeStyle {
    pub success: Color,
    pub failure: Color,
}

impl Default for OutcomeStyle {
    fn default() -> Self {
        Self {
            success: Color::Named("green".to_string()),
            failure: Color::Named("red".to_string()),
        }
    }
}

impl OutcomeStyle {
    /// The color for the exclamation of `results`.
    pub fn for_results(&self, results: &TestResults) -> &Color {
        if results.is_success() {
            &self.success
        } else {
            &self.failure
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(Color::Named("red".into()).to_ansi_foreground(), "\x1b[31m");
        assert_eq!(Color::Named("Green".into()).to_ansi_foreground(), "\x1b[32m");
        assert_eq!(Color::Named("gray".into()).to_ansi_foreground(), "\x1b[90m");
    }

    #[test]
    fn hex_and_rgb_match() {
        let hex = Color::Named("#FF5733".into()).to_ansi_foreground();
        let rgb = Color::RGB(255, 87, 51).to_ansi_foreground();

        assert_eq!(hex, rgb);
        assert_eq!(rgb, "\x1b[38;2;255;87;51m");
    }

    #[test]
    fn unknown_color_is_plain() {
        assert_eq!(Color::Named("chartreuse".into()).paint("Yay! "), "Yay! ");
        assert_eq!(Color::Named("#12".into()).paint("Yay! "), "Yay! ");
    }

    #[test]
    fn paint_resets() {
        assert_eq!(
            Color::Ansi(208).paint("Oh no :( "),
            "\x1b[38;5;208mOh no :( \x1b[0m"
        );
    }

    #[test]
    fn color_follows_outcome() {
        let style = OutcomeStyle::default();

        assert_eq!(style.for_results(&TestResults::new(3, 0)), &style.success);
        assert_eq!(style.for_results(&TestResults::new(3, 1)), &style.failure);
        assert_eq!(style.for_results(&TestResults::new(0, 0)), &style.success);
    }

    #[test]
    fn explicit_choices() {
        assert!(ColorChoice::Always.enabled());
        assert!(!ColorChoice::Never.enabled());
    }

    #[test]
    fn deserialize_forms() {
        let style: OutcomeStyle =
            serde_json::from_str(r##"{"success": [0, 255, 0], "failure": "#ff0000"}"##).unwrap();

        assert_eq!(style.success, Color::RGB(0, 255, 0));
        assert_eq!(style.failure, Color::Named("#ff0000".into()));

        let style: OutcomeStyle = serde_json::from_str(r#"{"failure": 196}"#).unwrap();

        assert_eq!(style.success, OutcomeStyle::default().success);
        assert_eq!(style.failure, Color::Ansi(196));
    }
}
