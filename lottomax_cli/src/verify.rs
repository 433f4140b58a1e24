use lottomax_core::{
    derive_hash_hex, evaluate_line, verify_session, Line, LineError, PlayRequest,
    WinningLineOrigin, LINE_LEN,
};
use lottomax_shared::{LineResultEntry, SessionRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    pub seed_hash_ok: bool,
    pub draws_ok: bool,
    pub cost_ok: bool,
    pub payouts_ok: bool,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.seed_hash_ok && self.draws_ok && self.cost_ok && self.payouts_ok
    }
}

fn drawn_lines(raw: &[Vec<i32>]) -> Result<Vec<Line>, LineError> {
    raw.iter().map(|l| Line::try_from(l.as_slice())).collect()
}

/// Re-derives the draws of a recorded session from its seeds and re-settles it.
pub fn verify_record(record: &SessionRecord) -> anyhow::Result<VerifyReport> {
    let request = PlayRequest::new(record.ticket_lines.len(), record.extra_encore)?;
    let ticket = drawn_lines(&record.ticket_lines)?;
    let encore = drawn_lines(&record.encore_lines)?;
    let winning: [i32; LINE_LEN] = record
        .winning_line
        .as_slice()
        .try_into()
        .map_err(|_| LineError::Length(record.winning_line.len()))?;
    // loaded winning numbers are not validated, so neither are they here
    let winning = Line::lenient(winning);
    let generated = record.winning_origin != WinningLineOrigin::Loaded.to_string();

    let seed_hash_ok = derive_hash_hex(record.server_seed.as_bytes()) == record.server_seed_hash;
    let draws_ok = verify_session(
        &record.server_seed,
        &record.client_seed,
        record.nonce,
        request,
        &ticket,
        &encore,
        generated.then_some(&winning),
    );
    let cost_ok = record.total_cost == request.cost();

    let expected: Vec<LineResultEntry> = ticket
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let r = evaluate_line(line, &winning, &encore);
            LineResultEntry {
                line: i + 1,
                numbers: line.to_vec(),
                matches: r.matches,
                encore_match: r.encore_match,
                payout: r.payout,
            }
        })
        .collect();
    let total: u64 = expected.iter().map(|r| r.payout).sum();
    let payouts_ok = expected == record.results && total == record.total_payout;

    Ok(VerifyReport {
        seed_hash_ok,
        draws_ok,
        cost_ok,
        payouts_ok,
    })
}
