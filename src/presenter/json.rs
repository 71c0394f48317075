//! JSON Lines rendering.
//!
//! Each presentation becomes one JSON object on its own line, which makes the
//! scanner easy to drive from scripts or pipe into `jq`.

use std::io::{self, Write};

use serde_json::json;

use super::{Presentation, PresentationSink};
use crate::config::HISTORY_DISPLAY_LIMIT;
use crate::ledger::{HistoryEntry, LedgerSnapshot};

pub struct JsonPresenter<W: Write> {
    out: W,
    history_limit: usize,
}

impl<W: Write> JsonPresenter<W> {
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
}

impl<W: Write> PresentationSink for JsonPresenter<W> {
    fn present(
        &mut self,
        presentation: &Presentation,
        ledger: LedgerSnapshot<'_>,
    ) -> io::Result<()> {
        let recent: Vec<&HistoryEntry> = ledger.recent(self.history_limit).collect();
        let line = json!({
            "presentation": presentation,
            "ledger": {
                "total": ledger.total(),
                "safe": ledger.safe_count,
                "threat": ledger.threat_count,
                "recent": recent,
            },
        });
        serde_json::to_writer(&mut self.out, &line)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
