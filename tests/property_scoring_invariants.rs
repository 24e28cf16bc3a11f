use proptest::prelude::*;

use geoquiz_backend::distribution::{percentile, rank, Rank};
use geoquiz_backend::scoring::{adjusted_score, ScoringState, RAW_POINTS_PER_CORRECT};

proptest! {
    #[test]
    fn pt_counts_match_the_outcome_sequence(outcomes in prop::collection::vec(any::<bool>(), 0..100)) {
        let mut state = ScoringState::new();
        for &ok in &outcomes {
            state.record_answer(ok);
        }

        prop_assert_eq!(state.total_answers() as usize, outcomes.len());
        prop_assert_eq!(
            state.correct_answers() as usize,
            outcomes.iter().filter(|&&ok| ok).count()
        );
        prop_assert_eq!(
            state.raw_score(),
            RAW_POINTS_PER_CORRECT * state.correct_answers() as f64
        );
    }

    #[test]
    fn pt_adjusted_score_is_a_pure_function(outcomes in prop::collection::vec(any::<bool>(), 1..100)) {
        let mut state = ScoringState::new();
        for &ok in &outcomes {
            state.record_answer(ok);
        }

        let recomputed = adjusted_score(state.raw_score(), state.total_answers());
        prop_assert!((recomputed - state.adjusted_score()).abs() < 1e-9);
    }

    #[test]
    // The concave transform peaks at base ≈ 143.3; base reaches 4·total when
    // every answer is correct, so monotonicity only holds up to 35 rounds.
    fn pt_more_correct_never_scores_lower(total in 1_u32..=35) {
        let mut prev = f64::NEG_INFINITY;
        for correct in 0..=total {
            let adjusted = adjusted_score(correct as f64 * RAW_POINTS_PER_CORRECT, total);
            prop_assert!(adjusted >= prev);
            prev = adjusted;
        }
    }

    #[test]
    fn pt_percentile_stays_in_range_and_monotone(a in 0.0_f64..100.0, b in 0.0_f64..100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = percentile(lo);
        let p_hi = percentile(hi);

        prop_assert!(p_hi <= 100);
        prop_assert!(p_lo <= p_hi);
    }

    #[test]
    fn pt_rank_ladder_is_total(score in 0.0_f64..=100.0) {
        let r = rank(score);
        prop_assert!(matches!(r, Rank::S | Rank::A | Rank::B | Rank::C | Rank::D | Rank::F));
    }
}
