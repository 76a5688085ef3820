use crate::{
    err::TemplateError,
    style::OutcomeStyle,
    template::Fragments,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const PASSED_MARKER: &str = "Passed: ";
const FAILED_MARKER: &str = "Failed: ";

/// Counts produced by a test run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TestResults {
    pub passed: u64,
    pub failed: u64,
}

impl TestResults {
    pub fn new(passed: u64, failed: u64) -> Self {
        Self { passed, failed }
    }

    /// Everything passed, meaning nothing failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn total(&self) -> u64 {
        self.passed.saturating_add(self.failed)
    }

    /// Picks the leading phrase, based only on whether anything failed.
    pub fn exclamation<'a>(&self, exclamation: &'a Exclamation) -> &'a str {
        if self.is_success() {
            &exclamation.success
        } else {
            &exclamation.failure
        }
    }

    fn value_of(&self, name: &str) -> Option<u64> {
        match name {
            "passed" => Some(self.passed),
            "failed" => Some(self.failed),
            "total" => Some(self.total()),
            _ => None,
        }
    }
}

/// The phrases put in front of the report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Exclamation {
    pub success: String,
    pub failure: String,
}

impl Default for Exclamation {
    fn default() -> Self {
        Self {
            success: "Yay! ".to_string(),
            failure: "Oh no :( ".to_string(),
        }
    }
}

/// How counts get into the literal text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Each placeholder is replaced by the value it names
    #[default]
    Positional,
    /// Placeholders are dropped, counts are appended after the first
    /// "Passed: " and "Failed: " found in the joined text
    Marker,
}

/// Formats `strings` by marker substitution.
///
/// The fragments are joined, then the first `"Passed: "` is followed by `passed`
/// and the first `"Failed: "` by `failed`. Interpolation points are ignored, so
/// a sequence without a marker silently drops that count.
pub fn log_test_results(strings: &Fragments, passed: u64, failed: u64) -> String {
    let results = TestResults::new(passed, failed);
    let exclamation = Exclamation::default();

    format!(
        "{}{}",
        results.exclamation(&exclamation),
        substitute_markers(strings, &results)
    )
}

/// Plain formatting of two counts, the same line the default [`Formatter`]
/// renders without a template.
///
/// ```
/// use tally::format_results;
///
/// assert_eq!(format_results(20, 0), "Yay! Passed: 20, Failed: 0");
/// assert_eq!(format_results(5, 3), "Oh no :( Passed: 5, Failed: 3");
/// ```
pub fn format_results(passed: u64, failed: u64) -> String {
    let results = TestResults::new(passed, failed);

    format!(
        "{}Passed: {}, Failed: {}",
        results.exclamation(&Exclamation::default()),
        passed,
        failed
    )
}

fn substitute_markers(strings: &Fragments, results: &TestResults) -> String {
    let joined = strings.joined();

    if !joined.contains(PASSED_MARKER) || !joined.contains(FAILED_MARKER) {
        warn!(text = %joined, "marker missing from template, its count will be dropped");
    }

    joined
        .replacen(
            PASSED_MARKER,
            &format!("{}{}", PASSED_MARKER, results.passed),
            1,
        )
        .replacen(
            FAILED_MARKER,
            &format!("{}{}", FAILED_MARKER, results.failed),
            1,
        )
}

/// Renders results through a template, with its configured exclamation and colors.
#[derive(Debug, Clone)]
pub struct Formatter {
    fragments: Fragments,
    mode: Mode,
    exclamation: Exclamation,
    style: Option<OutcomeStyle>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(Fragments::default())
    }
}

impl Formatter {
    pub fn new(fragments: Fragments) -> Self {
        Self {
            fragments,
            mode: Mode::default(),
            exclamation: Exclamation::default(),
            style: None,
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn exclamation(mut self, exclamation: Exclamation) -> Self {
        self.exclamation = exclamation;
        self
    }

    /// Colors the exclamation, `None` keeps it plain.
    pub fn style(mut self, style: Option<OutcomeStyle>) -> Self {
        self.style = style;
        self
    }

    pub fn render(&self, results: &TestResults) -> Result<String, TemplateError> {
        debug!(mode = ?self.mode, passed = results.passed, failed = results.failed, "rendering");

        let body = match self.mode {
            Mode::Positional => self.interpolate(results)?,
            Mode::Marker => substitute_markers(&self.fragments, results),
        };

        let exclamation = results.exclamation(&self.exclamation);
        let exclamation = match &self.style {
            Some(style) => style.for_results(results).paint(exclamation),
            None => exclamation.to_owned(),
        };

        Ok(format!("{}{}", exclamation, body))
    }

    fn interpolate(&self, results: &TestResults) -> Result<String, TemplateError> {
        let mut out = String::new();
        let mut placeholders = self.fragments.placeholders().iter();

        for fragment in self.fragments.fragments() {
            out.push_str(fragment);

            if let Some(p) = placeholders.next() {
                let value = results
                    .value_of(p.name())
                    .ok_or_else(|| TemplateError::UnknownPlaceholder(p.name().to_owned()))?;

                out.push_str(&value.to_string());
            }
        }

        Ok(out)
    }
}
