//! Guess-adjusted scoring engine.
//!
//! Each correct answer is worth a fixed 4 points of raw score. The displayed
//! score subtracts the expected value of blind 1-of-4 guessing (raw == total
//! answered) and then applies a concave transform that compresses growth at
//! the top of the scale.

/// Raw points awarded per correct answer.
pub const RAW_POINTS_PER_CORRECT: f64 = 4.0;

/// Per-session score accumulator.
///
/// Mutated only by [`ScoringState::record_answer`]; a restart replaces the
/// whole instance rather than rewinding it.
#[derive(Debug, Clone, Default)]
pub struct ScoringState {
    total_answers: u32,
    correct_answers: u32,
    raw_score: f64,
    adjusted_score: f64,
}

impl ScoringState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one answered round and returns the updated adjusted score.
    ///
    /// The adjusted score is recomputed from scratch on every call, never
    /// incrementally drifted, so it stays a pure function of
    /// `(raw_score, total_answers)`.
    pub fn record_answer(&mut self, is_correct: bool) -> f64 {
        self.total_answers += 1;
        if is_correct {
            self.raw_score += RAW_POINTS_PER_CORRECT;
            self.correct_answers += 1;
        }

        self.adjusted_score = adjusted_score(self.raw_score, self.total_answers);
        self.adjusted_score
    }

    /// Accuracy as a rounded integer percentage. Zero answered rounds is a
    /// defined case (0), not an error.
    pub fn accuracy(&self) -> u32 {
        if self.total_answers == 0 {
            return 0;
        }
        ((self.correct_answers as f64 / self.total_answers as f64) * 100.0).round() as u32
    }

    pub fn total_answers(&self) -> u32 {
        self.total_answers
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn raw_score(&self) -> f64 {
        self.raw_score
    }

    pub fn adjusted_score(&self) -> f64 {
        self.adjusted_score
    }
}

/// Adjusted score as a pure function of the raw score and rounds answered.
///
/// `raw - total` zeroes out the expected value of random guessing; the
/// quadratic term flattens the curve near the 100-point ceiling while staying
/// monotonic over the reachable input range.
pub fn adjusted_score(raw_score: f64, total_answers: u32) -> f64 {
    let base = (4.0 / 3.0 * (raw_score - total_answers as f64)).max(0.0);
    (43.0 * base) / 28.0 - (3.0 * base * base) / 560.0
}
