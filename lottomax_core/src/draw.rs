use rand::{seq::SliceRandom, RngCore};

use crate::line::{Line, Number, LINE_LEN, MAX_NUMBER, MIN_NUMBER};

/// Draws lines of distinct numbers from an owned random source.
#[derive(Debug)]
pub struct DrawGenerator<R> {
    rng: R,
}

impl<R: RngCore> DrawGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// One line: a partial shuffle of the whole pool, keeping the first `LINE_LEN` numbers.
    pub fn draw_one(&mut self) -> Line {
        let mut pool: Vec<Number> = (MIN_NUMBER..=MAX_NUMBER).collect();
        let (picked, _) = pool.partial_shuffle(&mut self.rng, LINE_LEN);
        let mut numbers = [0; LINE_LEN];
        numbers.copy_from_slice(picked);
        let line = Line::lenient(numbers);
        debug_assert!(line.is_well_formed());
        tracing::debug!(%line, "line drawn");
        line
    }

    pub fn draw(&mut self, count: usize) -> Vec<Line> {
        (0..count).map(|_| self.draw_one()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ProvablyFairRng;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn lines_are_well_formed() {
        let mut draws = DrawGenerator::new(StdRng::seed_from_u64(7));
        for line in draws.draw(500) {
            let nums = line.numbers();
            assert_eq!(nums.len(), LINE_LEN);
            assert!(nums.iter().all(|n| (1..=50).contains(n)));
            for (i, n) in nums.iter().enumerate() {
                assert!(!nums[i + 1..].contains(n));
            }
        }
    }

    #[test]
    fn draw_count() {
        let mut draws = DrawGenerator::new(StdRng::seed_from_u64(1));
        assert!(draws.draw(0).is_empty());
        assert_eq!(draws.draw(1).len(), 1);
        assert_eq!(draws.draw(30).len(), 30);
    }

    #[test]
    fn same_seed_same_lines() {
        let mut a = DrawGenerator::new(ProvablyFairRng::new("server", "client", 3));
        let mut b = DrawGenerator::new(ProvablyFairRng::new("server", "client", 3));
        assert_eq!(a.draw(5), b.draw(5));
    }

    #[test]
    fn every_number_reachable() {
        let mut draws = DrawGenerator::new(StdRng::seed_from_u64(99));
        let mut seen = [false; 51];
        for line in draws.draw(400) {
            for &n in line.numbers() {
                seen[n as usize] = true;
            }
        }
        assert!(seen[1..].iter().all(|&s| s));
    }
}
