/// Price of one ticket line, in CAD.
pub const LINE_PRICE: u64 = 5;
/// Price of the optional extra Encore line. The first Encore line is free.
pub const ENCORE_PRICE: u64 = 1;

pub const MIN_LINES: usize = 1;
pub const MAX_LINES: usize = 30;

pub const JACKPOT: u64 = 75_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaytableEntry {
    pub matches: u8,
    pub payout: u64,
    /// Replaces `payout` when the line also hits an Encore line.
    pub encore_payout: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
pub struct Paytable(pub &'static [PaytableEntry]);

pub const LOTTO_MAX: Paytable = Paytable(&[
    PaytableEntry {
        matches: 7,
        payout: JACKPOT,
        encore_payout: None,
    },
    PaytableEntry {
        matches: 6,
        payout: 4_524,
        encore_payout: Some(321_264),
    },
    PaytableEntry {
        matches: 5,
        payout: 102,
        encore_payout: Some(1_004),
    },
    PaytableEntry {
        matches: 4,
        payout: 20,
        encore_payout: Some(51),
    },
    PaytableEntry {
        matches: 3,
        payout: 0,
        encore_payout: Some(20),
    },
]);

impl Paytable {
    pub fn entry(&self, matches: usize) -> Option<&PaytableEntry> {
        self.0.iter().find(|e| usize::from(e.matches) == matches)
    }

    /// Payout for a line with `matches` main numbers. Counts missing from the table pay nothing.
    pub fn payout(&self, matches: usize, encore_match: bool) -> u64 {
        match self.entry(matches) {
            Some(PaytableEntry {
                encore_payout: Some(alt),
                ..
            }) if encore_match => *alt,
            Some(entry) => entry.payout,
            None => 0,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &PaytableEntry> {
        self.0.iter()
    }
}

pub fn ticket_cost(lines: usize, extra_encore: bool) -> u64 {
    lines as u64 * LINE_PRICE + if extra_encore { ENCORE_PRICE } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        let t = LOTTO_MAX;
        assert_eq!(t.payout(7, false), 75_000_000);
        assert_eq!(t.payout(7, true), 75_000_000);
        assert_eq!(t.payout(6, false), 4_524);
        assert_eq!(t.payout(6, true), 321_264);
        assert_eq!(t.payout(5, false), 102);
        assert_eq!(t.payout(5, true), 1_004);
        assert_eq!(t.payout(4, false), 20);
        assert_eq!(t.payout(4, true), 51);
        assert_eq!(t.payout(3, false), 0);
        assert_eq!(t.payout(3, true), 20);
        for m in 0..3 {
            assert_eq!(t.payout(m, true), 0);
            assert_eq!(t.payout(m, false), 0);
        }
    }

    #[test]
    fn cost() {
        assert_eq!(ticket_cost(3, true), 16);
        assert_eq!(ticket_cost(1, false), 5);
        assert_eq!(ticket_cost(30, false), 150);
    }
}
