//=========================================================================
// Quiz State Machine
//=========================================================================
//
// Tracks progression through the question list.
//
// Phases:
// ```text
//   Answering ──submit──> [advance pending] ──deadline──> Answering (next)
//       │                                                     │
//       └──────────── current_index == len ──────────────> Finished
// ```
//
// The advance delay is a deadline stored in the state and checked once
// per tick, so no host-specific deferred callback is needed.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::{Duration, Instant};

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::question::OptionKey;
use super::store::QuestionStore;

//=== QuizConfig ==========================================================

/// Timing parameters for answer feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizConfig {
    /// How long the selected answer stays on screen before advancing.
    pub advance_delay: Duration,

    /// Number of frames the feedback message takes to fade out.
    pub feedback_frames: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            advance_delay: Duration::from_secs(1),
            feedback_frames: 100,
        }
    }
}

//=== Phase ===============================================================

/// Two-valued quiz lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Answering,
    Finished,
}

//=== Feedback ============================================================

/// Transient acknowledgement shown after an answer is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    message: String,
    correct: bool,
    frames_left: u32,
    total_frames: u32,
}

impl Feedback {
    fn new(message: String, correct: bool, total_frames: u32) -> Self {
        Self {
            message,
            correct,
            frames_left: total_frames,
            total_frames,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_correct(&self) -> bool {
        self.correct
    }

    pub fn frames_left(&self) -> u32 {
        self.frames_left
    }

    /// Opacity in `0..=255`, fading linearly with the remaining frames.
    pub fn alpha(&self) -> u8 {
        if self.total_frames == 0 {
            return 0;
        }
        let ratio = self.frames_left as f32 / self.total_frames as f32;
        (ratio * 255.0).round().clamp(0.0, 255.0) as u8
    }
}

//=== Submission ==========================================================

/// Result of an accepted [`QuizState::submit_answer`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub option: OptionKey,
    pub correct: bool,
}

//=== QuizState ===========================================================

/// Progress, score, and phase of a single quiz run.
///
/// Invariants:
/// - `score <= answered() <= questions.len()`
/// - `phase == Finished` exactly when `current_index == questions.len()`
#[derive(Debug, Clone)]
pub struct QuizState {
    config: QuizConfig,
    current_index: usize,
    score: usize,
    phase: Phase,
    selected: Option<OptionKey>,
    pending_advance_at: Option<Instant>,
    feedback: Option<Feedback>,
}

impl QuizState {
    //--- Construction -----------------------------------------------------

    /// Creates the initial state for `questions`.
    ///
    /// An empty question list starts (and stays) `Finished`.
    pub fn new(questions: &QuestionStore, config: QuizConfig) -> Self {
        let phase = if questions.is_empty() {
            Phase::Finished
        } else {
            Phase::Answering
        };

        Self {
            config,
            current_index: 0,
            score: 0,
            phase,
            selected: None,
            pending_advance_at: None,
            feedback: None,
        }
    }

    //--- Transitions ------------------------------------------------------

    /// Submits `option` as the answer to the current question.
    ///
    /// Ignored (returns `None`) when the quiz is finished or when an
    /// answer is already waiting to advance. Otherwise records the
    /// selection, scores it, starts the feedback fade, and schedules the
    /// advance at `now + advance_delay`.
    pub fn submit_answer(
        &mut self,
        questions: &QuestionStore,
        option: OptionKey,
        now: Instant,
    ) -> Option<Submission> {
        if self.phase != Phase::Answering || self.pending_advance_at.is_some() {
            debug!(target: "quiz", "Ignoring answer {} (phase {:?})", option, self.phase);
            return None;
        }

        let question = questions.get(self.current_index)?;
        let correct = question.is_correct(option);

        let message = if correct {
            self.score += 1;
            "Correct!".to_string()
        } else {
            format!("Wrong! The correct answer is {}", question.correct)
        };

        info!(
            target: "quiz",
            "Question {} answered {} ({}), score {}",
            question.id,
            option,
            if correct { "correct" } else { "wrong" },
            self.score
        );

        self.selected = Some(option);
        self.feedback = Some(Feedback::new(message, correct, self.config.feedback_frames));
        self.pending_advance_at = Some(now + self.config.advance_delay);

        Some(Submission { option, correct })
    }

    /// Moves to the next question once the pending deadline has passed.
    ///
    /// Returns `true` if an advance happened.
    pub fn advance_if_due(&mut self, questions: &QuestionStore, now: Instant) -> bool {
        match self.pending_advance_at {
            Some(deadline) if now >= deadline => {}
            _ => return false,
        }

        self.pending_advance_at = None;
        self.selected = None;
        self.current_index += 1;

        if self.current_index >= questions.len() {
            self.current_index = questions.len();
            self.phase = Phase::Finished;
            info!(
                target: "quiz",
                "Quiz finished: {} / {}",
                self.score,
                questions.len()
            );
        }

        true
    }

    /// Advances the feedback fade by one frame.
    pub fn tick_feedback(&mut self) {
        if let Some(feedback) = &mut self.feedback {
            feedback.frames_left = feedback.frames_left.saturating_sub(1);
            if feedback.frames_left == 0 {
                self.feedback = None;
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<OptionKey> {
        self.selected
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Returns `true` while a submitted answer waits for its advance.
    pub fn is_advance_pending(&self) -> bool {
        self.pending_advance_at.is_some()
    }

    /// Questions answered so far, including one awaiting its advance.
    pub fn answered(&self) -> usize {
        self.current_index + usize::from(self.pending_advance_at.is_some())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quiz::question::Question;

    fn question(id: &str, correct: OptionKey) -> Question {
        Question {
            id: id.to_string(),
            prompt: format!("Question {id}"),
            options: ["x".to_string(), "y".to_string(), "z".to_string()],
            correct,
        }
    }

    fn store(answers: &[OptionKey]) -> QuestionStore {
        QuestionStore::new(
            answers
                .iter()
                .enumerate()
                .map(|(i, key)| question(&(i + 1).to_string(), *key))
                .collect(),
        )
    }

    fn after(now: Instant, config: &QuizConfig) -> Instant {
        now + config.advance_delay
    }

    //=====================================================================
    // Initial State
    //=====================================================================

    #[test]
    fn starts_answering_at_zero() {
        let questions = store(&[OptionKey::A]);
        let state = QuizState::new(&questions, QuizConfig::default());

        assert_eq!(state.phase(), Phase::Answering);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.score(), 0);
        assert!(state.selected().is_none());
        assert!(state.feedback().is_none());
    }

    #[test]
    fn empty_quiz_starts_finished() {
        let questions = QuestionStore::default();
        let state = QuizState::new(&questions, QuizConfig::default());
        assert_eq!(state.phase(), Phase::Finished);
        assert_eq!(state.score(), 0);
    }

    //=====================================================================
    // Submission
    //=====================================================================

    #[test]
    fn correct_answer_scores_exactly_one() {
        let questions = store(&[OptionKey::B]);
        let mut state = QuizState::new(&questions, QuizConfig::default());

        let result = state.submit_answer(&questions, OptionKey::B, Instant::now());

        assert_eq!(
            result,
            Some(Submission { option: OptionKey::B, correct: true })
        );
        assert_eq!(state.score(), 1);
        assert_eq!(state.selected(), Some(OptionKey::B));
        assert_eq!(state.feedback().unwrap().message(), "Correct!");
        assert!(state.feedback().unwrap().is_correct());
    }

    #[test]
    fn wrong_answers_leave_score_unchanged() {
        for wrong in [OptionKey::A, OptionKey::C] {
            let questions = store(&[OptionKey::B]);
            let mut state = QuizState::new(&questions, QuizConfig::default());

            let result = state.submit_answer(&questions, wrong, Instant::now());

            assert_eq!(result.map(|s| s.correct), Some(false));
            assert_eq!(state.score(), 0, "Answer {wrong} must not score");
            let feedback = state.feedback().unwrap();
            assert!(!feedback.is_correct());
            assert!(
                feedback.message().contains('B'),
                "Feedback should name the correct answer: {}",
                feedback.message()
            );
        }
    }

    #[test]
    fn second_press_while_pending_is_ignored() {
        let questions = store(&[OptionKey::A, OptionKey::A]);
        let mut state = QuizState::new(&questions, QuizConfig::default());
        let now = Instant::now();

        assert!(state.submit_answer(&questions, OptionKey::A, now).is_some());
        assert!(state.submit_answer(&questions, OptionKey::A, now).is_none());

        assert_eq!(state.score(), 1, "Question must not be scored twice");
        assert_eq!(state.answered(), 1);
    }

    #[test]
    fn submit_is_noop_when_finished() {
        let config = QuizConfig::default();
        let questions = store(&[OptionKey::A]);
        let mut state = QuizState::new(&questions, config);
        let now = Instant::now();

        state.submit_answer(&questions, OptionKey::A, now);
        assert!(state.advance_if_due(&questions, after(now, &config)));
        assert_eq!(state.phase(), Phase::Finished);

        let before = (state.score(), state.current_index());
        assert!(state.submit_answer(&questions, OptionKey::A, now).is_none());
        assert_eq!((state.score(), state.current_index()), before);
        assert_eq!(state.phase(), Phase::Finished);
    }

    //=====================================================================
    // Advance
    //=====================================================================

    #[test]
    fn advance_waits_for_deadline() {
        let config = QuizConfig::default();
        let questions = store(&[OptionKey::A, OptionKey::B]);
        let mut state = QuizState::new(&questions, config);
        let now = Instant::now();

        state.submit_answer(&questions, OptionKey::C, now);

        assert!(!state.advance_if_due(&questions, now));
        assert!(!state.advance_if_due(&questions, now + config.advance_delay / 2));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.selected(), Some(OptionKey::C));

        assert!(state.advance_if_due(&questions, after(now, &config)));
        assert_eq!(state.current_index(), 1);
        assert!(state.selected().is_none());
        assert_eq!(state.phase(), Phase::Answering);
    }

    #[test]
    fn advance_without_submission_does_nothing() {
        let questions = store(&[OptionKey::A]);
        let mut state = QuizState::new(&questions, QuizConfig::default());
        assert!(!state.advance_if_due(&questions, Instant::now()));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn finishes_after_every_question_and_stays_finished() {
        let config = QuizConfig::default();
        let answers = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::A];
        let questions = store(&answers);
        let mut state = QuizState::new(&questions, config);
        let mut now = Instant::now();

        for (i, key) in [OptionKey::A, OptionKey::C, OptionKey::C, OptionKey::B]
            .into_iter()
            .enumerate()
        {
            assert_eq!(state.phase(), Phase::Answering, "Still answering at {i}");
            state.submit_answer(&questions, key, now);
            now = after(now, &config);
            state.advance_if_due(&questions, now);
        }

        assert_eq!(state.phase(), Phase::Finished);
        assert_eq!(state.current_index(), questions.len());
        assert_eq!(state.score(), 2);

        for _ in 0..10 {
            now = after(now, &config);
            state.advance_if_due(&questions, now);
            state.submit_answer(&questions, OptionKey::A, now);
            state.tick_feedback();
        }
        assert_eq!(state.phase(), Phase::Finished);
        assert_eq!(state.current_index(), questions.len());
    }

    #[test]
    fn score_never_exceeds_answered_or_total() {
        let config = QuizConfig::default();
        let questions = store(&[OptionKey::A, OptionKey::A, OptionKey::B]);
        let mut state = QuizState::new(&questions, config);
        let mut now = Instant::now();

        let presses = [
            OptionKey::A, OptionKey::A, OptionKey::B, OptionKey::A,
            OptionKey::B, OptionKey::B, OptionKey::C, OptionKey::A,
        ];
        for (i, key) in presses.into_iter().enumerate() {
            state.submit_answer(&questions, key, now);
            assert!(state.score() <= state.answered());
            assert!(state.answered() <= questions.len());
            if i % 2 == 1 {
                now = after(now, &config);
                state.advance_if_due(&questions, now);
            }
            assert!(state.score() <= state.current_index() || state.is_advance_pending());
        }
        assert!(state.score() <= questions.len());
    }

    //=====================================================================
    // Feedback
    //=====================================================================

    #[test]
    fn feedback_fades_and_expires() {
        let config = QuizConfig {
            advance_delay: Duration::from_millis(10),
            feedback_frames: 4,
        };
        let questions = store(&[OptionKey::A]);
        let mut state = QuizState::new(&questions, config);
        state.submit_answer(&questions, OptionKey::A, Instant::now());

        assert_eq!(state.feedback().unwrap().alpha(), 255);

        state.tick_feedback();
        let feedback = state.feedback().unwrap();
        assert_eq!(feedback.frames_left(), 3);
        assert_eq!(feedback.alpha(), 191);

        state.tick_feedback();
        state.tick_feedback();
        assert!(state.feedback().is_some());
        state.tick_feedback();
        assert!(state.feedback().is_none(), "Feedback expires at zero");
    }

    #[test]
    fn wrong_answer_leaves_score_alone() {
        let config = QuizConfig::default();
        let questions = store(&[OptionKey::A, OptionKey::B]);
        let mut state = QuizState::new(&questions, config);
        state.submit_answer(&questions, OptionKey::C, Instant::now());
        assert_eq!(state.score(), 0);
        assert_eq!(state.answered(), 1);
    }
}
