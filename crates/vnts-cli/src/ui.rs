//! Process-wide rendering preferences, decided once from the global flags
//! and the terminal.
//!
//! The spinner and the table painter both consult this cell; `init` runs
//! before the first command handler.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    /// Paint tables (tenant accent header, status colors).
    pub table_color: bool,
    /// Animate spinners during API calls.
    pub progress: bool,
    /// Terminal width for table clamping, when one is known.
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let _ = UI_PREFS.set(UiPrefs {
        table_color: color_allowed(flags, is_tty, no_color),
        progress: progress_allowed(flags, is_tty),
        term_width: parse_width(std::env::var("COLUMNS").ok().as_deref()),
    });
}

/// Preferences decided at startup; everything stays off until [`init`]
/// runs.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

/// `--color always` forces color even without a tty; auto needs a tty and
/// honors `NO_COLOR`. Nothing is painted outside table output.
fn color_allowed(flags: &GlobalFlags, is_tty: bool, no_color: bool) -> bool {
    if flags.format != OutputFormat::Table {
        return false;
    }
    match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !flags.quiet && !no_color,
    }
}

/// A spinner animates only on an interactive, non-quiet run; verbose runs
/// print log lines on the same stream and get no spinner.
fn progress_allowed(flags: &GlobalFlags, is_tty: bool) -> bool {
    is_tty && !flags.quiet && !flags.verbose && flags.format != OutputFormat::Json
}

fn parse_width(columns: Option<&str>) -> Option<usize> {
    columns
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet: false,
            verbose: false,
            color,
            base_url: None,
        }
    }

    #[test]
    fn json_output_is_never_colored() {
        let f = flags(OutputFormat::Json, ColorMode::Always);
        assert!(!color_allowed(&f, true, false));
    }

    #[test]
    fn always_wins_without_a_tty() {
        let f = flags(OutputFormat::Table, ColorMode::Always);
        assert!(color_allowed(&f, false, true));
    }

    #[test]
    fn auto_honors_no_color() {
        let f = flags(OutputFormat::Table, ColorMode::Auto);
        assert!(color_allowed(&f, true, false));
        assert!(!color_allowed(&f, true, true));
    }

    #[test]
    fn verbose_suppresses_the_spinner() {
        let mut f = flags(OutputFormat::Table, ColorMode::Auto);
        assert!(progress_allowed(&f, true));
        f.verbose = true;
        assert!(!progress_allowed(&f, true));
    }

    #[test]
    fn width_needs_a_sane_minimum() {
        assert_eq!(parse_width(Some("120")), Some(120));
        assert_eq!(parse_width(Some("20")), None);
        assert_eq!(parse_width(Some("wide")), None);
        assert_eq!(parse_width(None), None);
    }
}
