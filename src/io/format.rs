//! Formatting of the crystsym report.
//!
//! The report is written to the `crystsym-output` log target, which the binary routes to the
//! output file, while diagnostics go to the default target.

use std::fmt;

use itertools::Itertools;
use log;
use nalgebra::Vector3;

const CRYSTSYM_BANNER_LENGTH: usize = 103;

/// Logs an error both as a diagnostic and to the `crystsym-output` logger.
macro_rules! crystsym_error {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::error!($fmt, $($($arg)*)?);
        log::error!(target: "crystsym-output", $fmt, $($($arg)*)?);
    }
}

/// Logs a warning to the `crystsym-output` logger.
macro_rules! crystsym_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::warn!(target: "crystsym-output", $fmt, $($($arg)*)?) }
}

/// Logs a report line to the `crystsym-output` logger.
macro_rules! crystsym_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "crystsym-output", $fmt, $($($arg)*)?) }
}

pub(crate) use {crystsym_error, crystsym_output, crystsym_warn};

/// Levels of headings in the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Heading {
    /// A boxed title opening the report of a driver.
    Title,

    /// An underlined subtitle.
    Subtitle,
}

impl Heading {
    /// The lines making up a heading with the given text.
    pub(crate) fn lines(self, text: &str) -> Vec<String> {
        let length = text.chars().count();
        match self {
            Heading::Title => {
                let length = length.max(CRYSTSYM_BANNER_LENGTH - 6);
                let bar = "─".repeat(length);
                vec![
                    format!("┌──{bar}──┐"),
                    format!("│§ {text:^length$} §│"),
                    format!("└──{bar}──┘"),
                ]
            }
            Heading::Subtitle => vec![text.to_string(), "═".repeat(length)],
        }
    }

    /// Writes the heading into a formatter.
    pub(crate) fn write(self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        self.lines(text)
            .iter()
            .try_for_each(|line| writeln!(f, "{line}"))
    }

    /// Logs the heading to the `crystsym-output` logger.
    pub(crate) fn log(self, text: &str) {
        self.lines(text)
            .iter()
            .for_each(|line| crystsym_output!("{line}"));
    }
}

/// A section of the report, which logs its opening banner on creation and its closing banner
/// when dropped.
pub(crate) struct ReportSection {
    title: String,
}

impl ReportSection {
    /// Opens a section.
    pub(crate) fn begin(title: &str) -> Self {
        crystsym_output!("{}", section_banner("❬❬❬❬❬ [Begin]", '❬', title));
        Self {
            title: title.to_string(),
        }
    }
}

impl Drop for ReportSection {
    fn drop(&mut self) {
        crystsym_output!("{}", section_banner("❭❭❭❭❭ [ End ]", '❭', &self.title));
    }
}

fn section_banner(tag: &str, fill: char, title: &str) -> String {
    let width = CRYSTSYM_BANNER_LENGTH - 14;
    let padding = width.saturating_sub(title.chars().count() + 1);
    format!("{tag} {title} {}", fill.to_string().repeat(padding))
}

/// A dotted rule for the tables of the report.
pub(crate) fn table_rule(width: usize) -> String {
    "┈".repeat(width)
}

/// Turns a boolean into `yes` or `no`.
pub(crate) fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// Formats fractional coordinates as a parenthesised triplet.
pub(crate) fn fractional_triplet(frac: &Vector3<f64>) -> String {
    format!("({})", frac.iter().map(|x| format!("{x:.4}")).join(", "))
}

/// A trait for logging displayable crystsym structures line by line.
pub(crate) trait CrystSymOutput: fmt::Debug + fmt::Display {
    /// Logs the display output to the `crystsym-output` logger.
    fn log_output_display(&self) {
        self.to_string().lines().for_each(|line| {
            crystsym_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> CrystSymOutput for T where T: fmt::Debug + fmt::Display {}
