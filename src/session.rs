//! Quiz session state machine.
//!
//! A session moves through `Playing` (a current round is open) to `GameOver`
//! (no round open) and stays there until an explicit reset. Rounds are dealt
//! from the region catalog without repetition, capped at [`MAX_ROUNDS`].

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::distribution::{self, Rank};
use crate::regions::{Region, REGIONS};
use crate::scoring::ScoringState;

/// Rounds per game.
pub const MAX_ROUNDS: u32 = 25;

/// Choices presented per round (one correct, rest decoys).
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Answer submitted while no round is open.
    #[error("game is over, no round to answer")]
    GameOver,
    /// Answer references a round that is not the open one. This is the
    /// double-submit guard: at most one graded answer per round.
    #[error("round {submitted} is not the open round {open}")]
    RoundMismatch { submitted: u32, open: u32 },
    /// Submitted choice is not among the round's options.
    #[error("choice is not one of the round's options")]
    UnknownChoice,
    /// Summary requested while the game is still running.
    #[error("game is still in progress")]
    GameInProgress,
}

/// One dealt question: a region to identify and shuffled name options.
#[derive(Debug, Clone)]
pub struct Round {
    /// 1-based question number.
    pub question: u32,
    pub region: &'static Region,
    pub options: Vec<&'static str>,
}

/// Feedback for a single graded answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_answer: &'static str,
    /// Running adjusted score, unrounded.
    pub adjusted_score: f64,
    pub accuracy: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub game_over: bool,
}

/// Final results shown once the game is over.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub adjusted_score: f64,
    /// Adjusted score rounded for display.
    pub display_score: i64,
    pub percentile: u32,
    pub rank: Rank,
    pub accuracy: u32,
    pub correct_answers: u32,
    pub total_answers: u32,
}

#[derive(Debug)]
pub struct QuizSession {
    id: Uuid,
    scoring: ScoringState,
    used_adcodes: HashSet<u32>,
    current: Option<Round>,
    created_at: DateTime<Utc>,
}

impl QuizSession {
    /// Creates a session with the first round already dealt.
    pub fn new() -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            scoring: ScoringState::new(),
            used_adcodes: HashSet::new(),
            current: None,
            created_at: Utc::now(),
        };
        session.current = session.deal_round();
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.current.is_none()
    }

    pub fn scoring(&self) -> &ScoringState {
        &self.scoring
    }

    /// Grades the answer to the open round, updates the score, and advances
    /// to the next round (or game over).
    ///
    /// `question` must match the open round's number; a stale or repeated
    /// number is rejected so a double-click cannot be graded twice.
    pub fn answer(&mut self, question: u32, choice: &str) -> Result<AnswerFeedback, SessionError> {
        let round = self.current.as_ref().ok_or(SessionError::GameOver)?;

        if round.question != question {
            return Err(SessionError::RoundMismatch {
                submitted: question,
                open: round.question,
            });
        }
        if !round.options.iter().any(|&opt| opt == choice) {
            return Err(SessionError::UnknownChoice);
        }

        let correct_answer = round.region.name;
        let is_correct = choice == correct_answer;

        let adjusted = self.scoring.record_answer(is_correct);
        self.current = self.deal_round();

        Ok(AnswerFeedback {
            correct: is_correct,
            correct_answer,
            adjusted_score: adjusted,
            accuracy: self.scoring.accuracy(),
            correct_count: self.scoring.correct_answers(),
            wrong_count: self.scoring.total_answers() - self.scoring.correct_answers(),
            game_over: self.is_over(),
        })
    }

    /// Final results; only defined once the game is over.
    pub fn summary(&self) -> Result<GameSummary, SessionError> {
        if !self.is_over() {
            return Err(SessionError::GameInProgress);
        }

        let adjusted = self.scoring.adjusted_score();
        Ok(GameSummary {
            adjusted_score: adjusted,
            display_score: adjusted.round() as i64,
            percentile: distribution::percentile(adjusted),
            rank: distribution::rank(adjusted),
            accuracy: self.scoring.accuracy(),
            correct_answers: self.scoring.correct_answers(),
            total_answers: self.scoring.total_answers(),
        })
    }

    /// Starts over: fresh scoring state, cleared region history, new first
    /// round. The session id is kept.
    pub fn reset(&mut self) {
        self.scoring = ScoringState::new();
        self.used_adcodes.clear();
        self.current = self.deal_round();
    }

    /// Deals the next round, or `None` when the round cap is reached or the
    /// region pool is exhausted.
    fn deal_round(&mut self) -> Option<Round> {
        if self.used_adcodes.len() as u32 >= MAX_ROUNDS {
            return None;
        }

        let available: Vec<&'static Region> = REGIONS
            .iter()
            .filter(|r| !self.used_adcodes.contains(&r.adcode))
            .collect();
        if available.is_empty() {
            return None;
        }

        let mut rng = rand::thread_rng();
        let region = *available.choose(&mut rng)?;
        self.used_adcodes.insert(region.adcode);

        let mut options: Vec<&'static str> = REGIONS
            .iter()
            .map(|r| r.name)
            .filter(|&name| name != region.name)
            .collect::<Vec<_>>()
            .choose_multiple(&mut rng, OPTION_COUNT - 1)
            .copied()
            .collect();
        options.push(region.name);
        options.shuffle(&mut rng);

        Some(Round {
            question: self.used_adcodes.len() as u32,
            region,
            options,
        })
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_current(session: &mut QuizSession, correctly: bool) -> AnswerFeedback {
        let round = session.current_round().expect("open round").clone();
        let choice = if correctly {
            round.region.name
        } else {
            *round
                .options
                .iter()
                .find(|&&opt| opt != round.region.name)
                .expect("a wrong option")
        };
        session.answer(round.question, choice).expect("graded")
    }

    #[test]
    fn new_session_opens_round_one() {
        let session = QuizSession::new();
        let round = session.current_round().expect("first round");
        assert_eq!(round.question, 1);
        assert_eq!(round.options.len(), OPTION_COUNT);
        assert!(round.options.contains(&round.region.name));
    }

    #[test]
    fn options_are_distinct() {
        let session = QuizSession::new();
        let round = session.current_round().unwrap();
        let mut names = round.options.clone();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), OPTION_COUNT);
    }

    #[test]
    fn regions_never_repeat_within_a_game() {
        let mut session = QuizSession::new();
        let mut seen = HashSet::new();
        while let Some(round) = session.current_round() {
            assert!(seen.insert(round.region.adcode), "region repeated");
            answer_current(&mut session, true);
        }
        assert_eq!(seen.len(), MAX_ROUNDS as usize);
    }

    #[test]
    fn game_ends_after_max_rounds() {
        let mut session = QuizSession::new();
        for i in 0..MAX_ROUNDS {
            assert!(!session.is_over(), "ended early at round {i}");
            answer_current(&mut session, i % 2 == 0);
        }
        assert!(session.is_over());
        assert_eq!(session.scoring().total_answers(), MAX_ROUNDS);
    }

    #[test]
    fn stale_round_number_is_rejected() {
        let mut session = QuizSession::new();
        let first = session.current_round().unwrap().clone();
        answer_current(&mut session, true);

        // Re-submitting round 1 after it advanced must not grade again.
        let err = session.answer(first.question, first.region.name).unwrap_err();
        assert!(matches!(err, SessionError::RoundMismatch { submitted: 1, open: 2 }));
        assert_eq!(session.scoring().total_answers(), 1);
    }

    #[test]
    fn unknown_choice_is_rejected_without_scoring() {
        let mut session = QuizSession::new();
        let question = session.current_round().unwrap().question;
        let err = session.answer(question, "不存在的地区").unwrap_err();
        assert_eq!(err, SessionError::UnknownChoice);
        assert_eq!(session.scoring().total_answers(), 0);
    }

    #[test]
    fn answering_after_game_over_fails() {
        let mut session = QuizSession::new();
        for _ in 0..MAX_ROUNDS {
            answer_current(&mut session, false);
        }
        assert_eq!(session.answer(1, "北京市").unwrap_err(), SessionError::GameOver);
    }

    #[test]
    fn summary_requires_game_over() {
        let mut session = QuizSession::new();
        assert_eq!(session.summary().unwrap_err(), SessionError::GameInProgress);

        for _ in 0..MAX_ROUNDS {
            answer_current(&mut session, true);
        }
        let summary = session.summary().expect("summary after game over");
        assert_eq!(summary.total_answers, MAX_ROUNDS);
        assert_eq!(summary.correct_answers, MAX_ROUNDS);
        assert_eq!(summary.accuracy, 100);
        assert!((summary.adjusted_score - 100.0).abs() < 1e-9);
        assert_eq!(summary.display_score, 100);
    }

    #[test]
    fn all_wrong_game_ranks_f() {
        let mut session = QuizSession::new();
        for _ in 0..MAX_ROUNDS {
            answer_current(&mut session, false);
        }
        let summary = session.summary().unwrap();
        assert_eq!(summary.adjusted_score, 0.0);
        assert_eq!(summary.accuracy, 0);
        assert_eq!(summary.rank, Rank::F);
    }

    #[test]
    fn reset_starts_a_fresh_game() {
        let mut session = QuizSession::new();
        let id = session.id();
        for _ in 0..5 {
            answer_current(&mut session, true);
        }

        session.reset();
        assert_eq!(session.id(), id);
        assert_eq!(session.scoring().total_answers(), 0);
        assert_eq!(session.scoring().adjusted_score(), 0.0);
        assert_eq!(session.current_round().unwrap().question, 1);
    }
}
