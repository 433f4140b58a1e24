use rand::RngCore;

use crate::{
    draw::DrawGenerator,
    error::PlayError,
    line::Line,
    paytable::{ticket_cost, LOTTO_MAX, MAX_LINES, MIN_LINES},
    rng::ProvablyFairRng,
    winning::{WinningLine, WinningLineSource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome {
    pub matches: usize,
    pub encore_match: bool,
    pub payout: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningEntry {
    /// Zero-based position in the ticket.
    pub index: usize,
    pub matches: usize,
    pub payout: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketEvaluation {
    pub total: u64,
    /// Only lines that pay something.
    pub winners: Vec<WinningEntry>,
}

pub fn evaluate_line(line: &Line, winning: &Line, encore_lines: &[Line]) -> LineOutcome {
    let matches = line.matches(winning);
    let encore_match = encore_lines.iter().any(|e| line.shares_any(e));
    LineOutcome {
        matches,
        encore_match,
        payout: LOTTO_MAX.payout(matches, encore_match),
    }
}

pub fn evaluate_prize(line: &Line, winning: &Line, encore_lines: &[Line]) -> u64 {
    evaluate_line(line, winning, encore_lines).payout
}

pub fn evaluate_ticket(lines: &[Line], winning: &Line, encore_lines: &[Line]) -> TicketEvaluation {
    let mut eval = TicketEvaluation::default();
    for (index, line) in lines.iter().enumerate() {
        let outcome = evaluate_line(line, winning, encore_lines);
        eval.total += outcome.payout;
        if outcome.payout > 0 {
            eval.winners.push(WinningEntry {
                index,
                matches: outcome.matches,
                payout: outcome.payout,
            });
        }
    }
    tracing::debug!(total = eval.total, winners = eval.winners.len(), "ticket evaluated");
    eval
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayRequest {
    lines: usize,
    extra_encore: bool,
}

impl PlayRequest {
    pub fn new(lines: usize, extra_encore: bool) -> Result<Self, PlayError> {
        if !(MIN_LINES..=MAX_LINES).contains(&lines) {
            return Err(PlayError::LineCount(lines));
        }
        Ok(Self {
            lines,
            extra_encore,
        })
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn extra_encore(&self) -> bool {
        self.extra_encore
    }

    pub fn encore_lines(&self) -> usize {
        if self.extra_encore {
            2
        } else {
            1
        }
    }

    pub fn cost(&self) -> u64 {
        ticket_cost(self.lines, self.extra_encore)
    }
}

#[derive(Debug, Clone)]
pub struct PlayOutcome {
    pub request: PlayRequest,
    pub ticket_lines: Vec<Line>,
    /// The automatic Encore line first, then the purchased one if any.
    pub encore_lines: Vec<Line>,
    pub winning: WinningLine,
    pub cost: u64,
    pub evaluation: TicketEvaluation,
}

impl PlayOutcome {
    /// Per-line detail for every ticket line, winning or not.
    pub fn line_outcomes(&self) -> Vec<LineOutcome> {
        self.ticket_lines
            .iter()
            .map(|l| evaluate_line(l, &self.winning.line, &self.encore_lines))
            .collect()
    }
}

fn draw_ticket<R: RngCore>(
    draws: &mut DrawGenerator<R>,
    request: &PlayRequest,
) -> (Vec<Line>, Vec<Line>) {
    let ticket_lines = draws.draw(request.lines());
    let encore_lines = draws.draw(request.encore_lines());
    (ticket_lines, encore_lines)
}

/// One play: ticket lines, Encore lines, then the winning line, in that order.
pub fn play_session<R: RngCore>(
    draws: &mut DrawGenerator<R>,
    source: &WinningLineSource,
    winning_text: Option<&str>,
    request: PlayRequest,
) -> PlayOutcome {
    let (ticket_lines, encore_lines) = draw_ticket(draws, &request);
    let winning = source.obtain(winning_text, draws);
    let evaluation = evaluate_ticket(&ticket_lines, &winning.line, &encore_lines);
    tracing::info!(
        lines = request.lines(),
        encore = request.extra_encore(),
        total = evaluation.total,
        "session settled"
    );
    PlayOutcome {
        request,
        ticket_lines,
        encore_lines,
        winning,
        cost: request.cost(),
        evaluation,
    }
}

/// Verify that recorded lines match what the RNG would produce for the seeds.
///
/// `generated_winning` is the recorded winning line when it came from the fallback draw; it is
/// then the next line in the stream. A loaded winning line is not derivable and is passed as `None`.
pub fn verify_session(
    server_seed: &str,
    client_seed: &str,
    nonce: u64,
    request: PlayRequest,
    ticket_lines: &[Line],
    encore_lines: &[Line],
    generated_winning: Option<&Line>,
) -> bool {
    let mut draws = DrawGenerator::new(ProvablyFairRng::new(server_seed, client_seed, nonce));
    let (expected_ticket, expected_encore) = draw_ticket(&mut draws, &request);
    if expected_ticket != ticket_lines || expected_encore != encore_lines {
        return false;
    }
    match generated_winning {
        Some(winning) => draws.draw_one() == *winning,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::winning::{FallbackReason, WinningLineOrigin};

    fn line(n: [i32; 7]) -> Line {
        Line::new(n).unwrap()
    }

    #[test]
    fn jackpot_ignores_encore() {
        let win = line([1, 2, 3, 4, 5, 6, 7]);
        let encore = [line([1, 2, 3, 4, 5, 6, 7])];
        assert_eq!(evaluate_prize(&win, &win, &encore), 75_000_000);
        assert_eq!(evaluate_prize(&win, &win, &[]), 75_000_000);
    }

    #[test]
    fn six_with_encore_overrides() {
        let win = line([1, 2, 3, 4, 5, 6, 7]);
        let ticket = line([1, 2, 3, 4, 5, 6, 40]);
        let miss = [line([20, 21, 22, 23, 24, 25, 26])];
        let hit = [miss[0], line([40, 41, 42, 43, 44, 45, 46])];
        assert_eq!(evaluate_prize(&ticket, &win, &miss), 4_524);
        assert_eq!(evaluate_prize(&ticket, &win, &hit), 321_264);
    }

    #[test]
    fn two_matches_never_pay() {
        let win = line([1, 2, 3, 4, 5, 6, 7]);
        let ticket = line([1, 2, 30, 31, 32, 33, 34]);
        let encore = [line([30, 31, 32, 33, 34, 35, 36])];
        assert_eq!(evaluate_prize(&ticket, &win, &encore), 0);
        assert_eq!(evaluate_prize(&ticket, &win, &[]), 0);
    }

    #[test]
    fn three_pays_only_with_encore() {
        let win = line([1, 2, 3, 4, 5, 6, 7]);
        let ticket = line([1, 2, 3, 31, 32, 33, 34]);
        let encore = [line([34, 40, 41, 42, 43, 44, 45])];
        assert_eq!(evaluate_prize(&ticket, &win, &[]), 0);
        assert_eq!(evaluate_prize(&ticket, &win, &encore), 20);
    }

    #[test]
    fn evaluation_is_order_independent() {
        let win = line([1, 2, 3, 4, 5, 6, 7]);
        let a = line([1, 2, 3, 4, 5, 30, 31]);
        let b = line([31, 5, 30, 4, 3, 2, 1]);
        let e1 = line([31, 40, 41, 42, 43, 44, 45]);
        let e2 = line([10, 11, 12, 13, 14, 15, 16]);
        let p = evaluate_prize(&a, &win, &[e1, e2]);
        assert_eq!(p, 1_004);
        assert_eq!(evaluate_prize(&b, &win, &[e2, e1]), p);
    }

    #[test]
    fn ticket_total_and_breakdown() {
        let win = line([1, 2, 3, 4, 5, 6, 7]);
        let lines = [
            line([1, 2, 3, 4, 40, 41, 42]),
            line([20, 21, 22, 23, 24, 25, 26]),
            line([1, 2, 3, 4, 5, 6, 7]),
        ];
        let eval = evaluate_ticket(&lines, &win, &[line([10, 11, 12, 13, 14, 15, 16])]);
        assert_eq!(eval.total, 20 + 75_000_000);
        assert_eq!(
            eval.winners,
            vec![
                WinningEntry {
                    index: 0,
                    matches: 4,
                    payout: 20
                },
                WinningEntry {
                    index: 2,
                    matches: 7,
                    payout: 75_000_000
                },
            ]
        );
        assert_eq!(evaluate_ticket(&[], &win, &[]), TicketEvaluation::default());
    }

    #[test]
    fn request_bounds() {
        assert_eq!(PlayRequest::new(0, false), Err(PlayError::LineCount(0)));
        assert_eq!(PlayRequest::new(31, true), Err(PlayError::LineCount(31)));
        let r = PlayRequest::new(3, true).unwrap();
        assert_eq!(r.cost(), 16);
        assert_eq!(r.encore_lines(), 2);
    }

    #[test]
    fn session_shape_and_verify() {
        let request = PlayRequest::new(4, true).unwrap();
        let mut draws = DrawGenerator::new(ProvablyFairRng::new("server", "client", 9));
        let out = play_session(&mut draws, &WinningLineSource::default(), None, request);
        assert_eq!(out.ticket_lines.len(), 4);
        assert_eq!(out.encore_lines.len(), 2);
        assert_eq!(out.cost, 21);
        assert_eq!(
            out.winning.origin,
            WinningLineOrigin::Generated(FallbackReason::Missing)
        );
        let sum: u64 = out.line_outcomes().iter().map(|o| o.payout).sum();
        assert_eq!(out.evaluation.total, sum);

        let winning = Some(&out.winning.line);
        assert!(verify_session(
            "server",
            "client",
            9,
            request,
            &out.ticket_lines,
            &out.encore_lines,
            winning
        ));
        assert!(!verify_session(
            "server",
            "client",
            10,
            request,
            &out.ticket_lines,
            &out.encore_lines,
            winning
        ));
    }

    #[test]
    fn verify_rejects_swapped_generated_winning_line() {
        let request = PlayRequest::new(2, false).unwrap();
        let mut draws = DrawGenerator::new(ProvablyFairRng::new("server", "client", 5));
        let out = play_session(&mut draws, &WinningLineSource::default(), None, request);
        let forged = out.ticket_lines[0];
        assert!(!verify_session(
            "server",
            "client",
            5,
            request,
            &out.ticket_lines,
            &out.encore_lines,
            Some(&forged)
        ));
        // a loaded winning line is trusted as recorded
        assert!(verify_session(
            "server",
            "client",
            5,
            request,
            &out.ticket_lines,
            &out.encore_lines,
            None
        ));
    }
}
