use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, NaiveDateTime, Utc};
use lottomax_core::{paytable::JACKPOT, PlayOutcome, ProvablyFairRng};
use lottomax_shared::{LineResultEntry, SessionRecord};

pub fn file_stamp(at: &NaiveDateTime) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

const SESSION_FILES: [(&str, &str); 3] = [("ticket", "txt"), ("results", "txt"), ("session", "json")];

/// `stamp`, or `stamp_1`, `stamp_2`, ... so that no file of the session already exists in `dir`.
pub fn unique_stamp(dir: &Path, stamp: &str) -> String {
    let taken = |s: &str| {
        SESSION_FILES
            .iter()
            .any(|(prefix, ext)| dir.join(format!("{prefix}_{s}.{ext}")).exists())
    };
    if !taken(stamp) {
        return stamp.to_string();
    }
    (1u32..)
        .map(|n| format!("{stamp}_{n}"))
        .find(|s| !taken(s.as_str()))
        .unwrap_or_else(|| stamp.to_string())
}

pub fn render_ticket(outcome: &PlayOutcome) -> String {
    let mut s = String::new();
    s.push_str("Lotto Max Ticket\n");
    s.push_str("-------------------\n");
    for (i, line) in outcome.ticket_lines.iter().enumerate() {
        let _ = writeln!(s, "Line {}: {}", i + 1, line);
    }
    let _ = writeln!(
        s,
        "Number of Encores: {}",
        u8::from(outcome.request.extra_encore())
    );
    s.push_str("\nEncore Lines:\n");
    for (i, line) in outcome.encore_lines.iter().enumerate() {
        let _ = writeln!(s, "Encore Line {}: {}", i + 1, line);
    }
    let _ = writeln!(s, "Total Cost: {} CAD", outcome.cost);
    s.push_str("Thank you for playing Lotto Max!\n");
    s
}

pub fn render_results(outcome: &PlayOutcome) -> String {
    let mut s = String::new();
    s.push_str("Lotto Max Results\n");
    s.push_str("-------------------\n");
    let _ = writeln!(s, "Winning Numbers: {}", outcome.winning.line);
    let _ = writeln!(s, "Jackpot: {} Million CAD\n", JACKPOT / 1_000_000);
    s.push_str("Ticket Results:\n");
    for (i, (line, result)) in outcome
        .ticket_lines
        .iter()
        .zip(outcome.line_outcomes())
        .enumerate()
    {
        let _ = writeln!(
            s,
            "Line {}: {} - Matches: {} - Winnings: {} CAD",
            i + 1,
            line,
            result.matches,
            result.payout
        );
    }
    s.push_str("\nEncore Lines:\n");
    for (i, line) in outcome.encore_lines.iter().enumerate() {
        let _ = writeln!(s, "Encore Line {}: {}", i + 1, line);
    }
    s
}

pub fn build_record(outcome: &PlayOutcome, rng: &ProvablyFairRng, ts: DateTime<Utc>) -> SessionRecord {
    let results = outcome
        .ticket_lines
        .iter()
        .zip(outcome.line_outcomes())
        .enumerate()
        .map(|(i, (line, r))| LineResultEntry {
            line: i + 1,
            numbers: line.to_vec(),
            matches: r.matches,
            encore_match: r.encore_match,
            payout: r.payout,
        })
        .collect();
    SessionRecord {
        ts,
        server_seed: rng.server_seed().to_string(),
        server_seed_hash: rng.server_seed_hash_hex(),
        client_seed: rng.client_seed().to_string(),
        nonce: rng.nonce(),
        ticket_lines: outcome.ticket_lines.iter().map(|l| l.to_vec()).collect(),
        encore_lines: outcome.encore_lines.iter().map(|l| l.to_vec()).collect(),
        extra_encore: outcome.request.extra_encore(),
        total_cost: outcome.cost,
        winning_line: outcome.winning.line.to_vec(),
        winning_origin: outcome.winning.origin.to_string(),
        results,
        total_payout: outcome.evaluation.total,
    }
}

#[derive(Debug)]
pub struct SessionFiles {
    pub ticket: PathBuf,
    pub results: PathBuf,
    pub record: PathBuf,
}

pub fn write_session(
    dir: &Path,
    stamp: &str,
    outcome: &PlayOutcome,
    record: &SessionRecord,
) -> anyhow::Result<SessionFiles> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let stamp = unique_stamp(dir, stamp);

    let ticket = dir.join(format!("ticket_{stamp}.txt"));
    fs::write(&ticket, render_ticket(outcome))
        .with_context(|| format!("writing {}", ticket.display()))?;

    let results = dir.join(format!("results_{stamp}.txt"));
    fs::write(&results, render_results(outcome))
        .with_context(|| format!("writing {}", results.display()))?;

    let record_path = dir.join(format!("session_{stamp}.json"));
    fs::write(&record_path, record.to_json_pretty()?)
        .with_context(|| format!("writing {}", record_path.display()))?;

    tracing::debug!(ticket = %ticket.display(), results = %results.display(), "session files written");
    Ok(SessionFiles {
        ticket,
        results,
        record: record_path,
    })
}
