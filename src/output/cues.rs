//! Presentation cues
//!
//! Abstract round events for the presentation layer to map onto sounds,
//! colors or messages. The engine itself never triggers output; callers
//! derive a cue from each [`Feedback`] (plus [`Cue::RoundStart`] when a
//! round begins) and render it however they like.

use crate::core::{Feedback, GameStatus};

/// What just happened, presentation-wise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A new round began
    RoundStart,
    /// A guess was consumed without ending the round
    Progress,
    /// The round was won
    Won,
    /// The round was lost
    Lost,
}

impl Cue {
    /// Derive the cue for a submission's feedback
    #[must_use]
    pub fn for_feedback(feedback: &Feedback) -> Self {
        match feedback.status {
            GameStatus::Won => Self::Won,
            GameStatus::Lost => Self::Lost,
            GameStatus::Idle | GameStatus::InProgress => Self::Progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessEngine;

    #[test]
    fn progress_cue_while_round_continues() {
        let mut engine = GuessEngine::new();
        engine.start("table").unwrap();
        let feedback = engine.submit("sable").unwrap();
        assert_eq!(Cue::for_feedback(&feedback), Cue::Progress);
    }

    #[test]
    fn mismatch_also_cues_progress() {
        let mut engine = GuessEngine::new();
        engine.start("table").unwrap();
        let feedback = engine.submit("cheval").unwrap();
        assert_eq!(Cue::for_feedback(&feedback), Cue::Progress);
    }

    #[test]
    fn won_and_lost_cues() {
        let mut engine = GuessEngine::new();
        engine.start("table").unwrap();
        let feedback = engine.submit("table").unwrap();
        assert_eq!(Cue::for_feedback(&feedback), Cue::Won);

        engine.start("chien").unwrap();
        let mut feedback = engine.submit("chant").unwrap();
        for _ in 1..10 {
            feedback = engine.submit("chant").unwrap();
        }
        assert_eq!(Cue::for_feedback(&feedback), Cue::Lost);
    }
}
