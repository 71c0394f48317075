//! Colored terminal rendering.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use super::{Presentation, PresentationSink, ThreatBadge};
use crate::classifier::BadgeCategory;
use crate::config::{HISTORY_DISPLAY_LIMIT, HISTORY_URL_DISPLAY_CHARS};
use crate::ledger::{HistoryEntry, LedgerSnapshot, ScanStatus};
use crate::utils::shorten_for_display;

const INDENT: &str = "   ";

fn safe_color(s: &str) -> ColoredString {
    s.truecolor(52, 211, 153)
}

fn threat_color(s: &str) -> ColoredString {
    s.truecolor(248, 113, 113)
}

fn warn_color(s: &str) -> ColoredString {
    s.truecolor(251, 191, 36)
}

fn muted(s: &str) -> ColoredString {
    s.truecolor(100, 116, 139)
}

fn badge(badge: &ThreatBadge) -> ColoredString {
    let text = format!("[{}]", badge.label.to_uppercase());
    let (r, g, b) = match badge.category {
        BadgeCategory::Malware => (255, 76, 76),
        BadgeCategory::Social => (255, 140, 0),
        BadgeCategory::Unwanted => (255, 215, 0),
        BadgeCategory::Harmful => (255, 99, 71),
    };
    text.truecolor(r, g, b).bold()
}

/// Renders result cards, the stats bar and the scan history as text.
pub struct TerminalPresenter<W: Write> {
    out: W,
    history_limit: usize,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            history_limit: HISTORY_DISPLAY_LIMIT,
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_card(&mut self, presentation: &Presentation) -> io::Result<()> {
        match presentation {
            Presentation::Safe { url } => {
                writeln!(self.out, "✅ {}", safe_color("URL Appears Safe").bold())?;
                writeln!(self.out, "{INDENT}{}", muted(url))?;
                writeln!(
                    self.out,
                    "{INDENT}No known threats found in Google's Safe Browsing database."
                )?;
            }
            Presentation::Threat { url, badges } => {
                writeln!(self.out, "🚨 {}", threat_color("Threat Detected!").bold())?;
                writeln!(self.out, "{INDENT}{}", muted(url))?;
                let noun = if badges.len() == 1 {
                    "category"
                } else {
                    "categories"
                };
                writeln!(
                    self.out,
                    "{INDENT}Matched {} threat {noun} in Google's database.",
                    badges.len()
                )?;
                let row: Vec<String> = badges.iter().map(|b| badge(b).to_string()).collect();
                writeln!(self.out, "{INDENT}{}", row.join(" "))?;
            }
            Presentation::Warning { message } => {
                writeln!(self.out, "⚠️  {}", warn_color("Warning").bold())?;
                writeln!(self.out, "{INDENT}{}", warn_color(message))?;
            }
            Presentation::ApiKeyMissing {
                key_name,
                secrets_file,
            } => {
                writeln!(
                    self.out,
                    "🔑 {}",
                    warn_color("API Key Not Configured").bold()
                )?;
                writeln!(
                    self.out,
                    "{INDENT}Add your Google Safe Browsing API key to {} as",
                    secrets_file.display()
                )?;
                writeln!(self.out, "{INDENT}{key_name} = \"your_key_here\"")?;
                writeln!(
                    self.out,
                    "{INDENT}or set the {key_name} environment variable."
                )?;
            }
        }
        Ok(())
    }

    fn write_stats(&mut self, ledger: &LedgerSnapshot<'_>) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}  {} {}  {} {}",
            muted("TOTAL SCANS"),
            ledger.total().to_string().bold(),
            muted("SAFE"),
            safe_color(&ledger.safe_count.to_string()).bold(),
            muted("THREATS"),
            threat_color(&ledger.threat_count.to_string()).bold(),
        )
    }

    fn write_history(&mut self, ledger: &LedgerSnapshot<'_>) -> io::Result<()> {
        writeln!(self.out, "{}", muted("SCAN HISTORY").bold())?;
        for entry in ledger.recent(self.history_limit) {
            self.write_history_row(entry)?;
        }
        Ok(())
    }

    fn write_history_row(&mut self, entry: &HistoryEntry) -> io::Result<()> {
        let status = match entry.status {
            ScanStatus::Safe => safe_color("✓ Safe"),
            ScanStatus::Threat => threat_color("⚠ Threat"),
            ScanStatus::Error => warn_color("✕ Error"),
        };
        writeln!(
            self.out,
            "{INDENT}{}  {:<56}  {}",
            muted(&entry.timestamp),
            shorten_for_display(&entry.url, HISTORY_URL_DISPLAY_CHARS),
            status.bold()
        )
    }
}

impl<W: Write> PresentationSink for TerminalPresenter<W> {
    fn present(
        &mut self,
        presentation: &Presentation,
        ledger: LedgerSnapshot<'_>,
    ) -> io::Result<()> {
        self.write_card(presentation)?;
        if !ledger.is_empty() {
            writeln!(self.out)?;
            self.write_stats(&ledger)?;
            self.write_history(&ledger)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}
