use std::fmt::Write as _;

use lottomax_core::{
    paytable::{ENCORE_PRICE, LINE_PRICE, MAX_LINES, MIN_LINES},
    LINE_LEN, LOTTO_MAX, MAX_NUMBER, MIN_NUMBER,
};

pub fn render_rules() -> String {
    let mut s = String::from("\nLotto Max Rules:\n");
    let _ = writeln!(
        s,
        " - Each ticket line costs {LINE_PRICE} CAD and consists of {LINE_LEN} unique numbers between {MIN_NUMBER} and {MAX_NUMBER}."
    );
    let _ = writeln!(s, " - You may play {MIN_LINES} to {MAX_LINES} lines per ticket.");
    let _ = writeln!(s, " - Optional Encore costs an additional {ENCORE_PRICE} CAD.");
    s.push_str(" - Every ticket includes at least one Encore line automatically.\n");
    s.push_str(" - If you play Encore, you get two Encore lines total.\n");
    s.push_str(" - Matching any Encore number upgrades the prize for 3 to 6 matches.\n");
    s.push_str("\nPrizes (matches: prize / with Encore match):\n");
    for entry in LOTTO_MAX.entries() {
        match entry.encore_payout {
            Some(alt) => {
                let _ = writeln!(s, "   {}: {} / {} CAD", entry.matches, entry.payout, alt);
            }
            None => {
                let _ = writeln!(s, "   {}: {} CAD (jackpot)", entry.matches, entry.payout);
            }
        }
    }
    s.push('\n');
    s
}
