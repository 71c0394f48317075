//! Feeding submissions into a scan session.

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::classifier::ReputationService;
use crate::presenter::PresentationSink;
use crate::session::{ScanOutcome, ScanSession};

/// Words that end an interactive session.
const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

/// Runs one scan and hands the result to `sink`.
///
/// A sink failure is logged and does not affect the ledger: the scan already
/// happened and stays recorded.
pub async fn scan_and_present<S, P>(
    session: &mut ScanSession<S>,
    raw: &str,
    sink: &mut P,
) -> ScanOutcome
where
    S: ReputationService,
    P: PresentationSink + ?Sized,
{
    let outcome = session.scan(raw).await;
    let presentation = outcome.presentation();
    if let Err(e) = sink.present(&presentation, session.ledger().snapshot()) {
        warn!("Failed to render scan result: {}", e);
    }
    outcome
}

/// Scans each URL in order. Returns the number of submissions processed.
pub async fn run_urls<S, P>(session: &mut ScanSession<S>, urls: &[String], sink: &mut P) -> usize
where
    S: ReputationService,
    P: PresentationSink + ?Sized,
{
    for url in urls {
        scan_and_present(session, url, sink).await;
    }
    urls.len()
}

/// Reads one submission per line until EOF or a quit command.
///
/// Blank lines are submitted like any other input and produce the
/// missing-input warning. Bytes that are not valid UTF-8 are replaced, so a
/// garbled line fails validation instead of ending the session.
///
/// # Errors
///
/// Returns the underlying I/O error if reading from `reader` fails.
pub async fn run_submissions<S, R, P>(
    session: &mut ScanSession<S>,
    mut reader: R,
    sink: &mut P,
) -> std::io::Result<usize>
where
    S: ReputationService,
    R: AsyncBufRead + Unpin,
    P: PresentationSink + ?Sized,
{
    info!("Enter one URL per line; type quit or exit to finish");
    let mut buf = Vec::new();
    let mut processed = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.contains(char::REPLACEMENT_CHARACTER) {
            debug!("Submission contained invalid UTF-8");
        }

        let trimmed = line.trim();
        if QUIT_COMMANDS
            .iter()
            .any(|cmd| trimmed.eq_ignore_ascii_case(cmd))
        {
            debug!("Quit command received");
            break;
        }
        scan_and_present(session, line, sink).await;
        processed += 1;
    }

    Ok(processed)
}
