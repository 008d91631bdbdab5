//! Scripted "typing with typos" tagline animation.
//!
//! The whole performance is precomputed as an ordered list of text
//! snapshots with delays, so the script content can be inspected and
//! tested independently of playback timing.

use fastrand::Rng;

/// Delay before the first script step plays.
pub const TYPING_START_DELAY_MS: u64 = 600;

/// Pause after a typo is "noticed".
const IMMEDIATE_MS: u64 = 100;
/// Pause after the first two corrections.
const SHORT_PAUSE_MS: u64 = 250;
/// Hesitation around the third correction.
const LONG_PAUSE_MS: u64 = 1200;
/// Characters typed correctly before the typos start ("Web dev" for the
/// default tagline).
const TYPO_AT: usize = 7;

/// One step of the script: the full text to display and the delay before
/// the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u64,
}

fn step(text: &str, delay_ms: u64) -> TypingStep {
    TypingStep {
        text: text.to_owned(),
        delay_ms,
    }
}

/// The precomputed, ordered, finite typing script.
#[derive(Debug, Clone, Default)]
pub struct TypingScript {
    steps: Vec<TypingStep>,
}

impl TypingScript {
    /// Build the full script for `phrase`.
    ///
    /// The per-character cadence is drawn once per script (100-140 ms);
    /// the retype in the second typo cycle gets its own draw (140-180 ms).
    /// Pause steps reuse the previous snapshot with a new delay rather than
    /// a separate no-op primitive, matching the observable text sequence.
    pub fn compose(phrase: &str, rng: &mut Rng) -> Self {
        let chars: Vec<char> = phrase.chars().collect();
        let type_delay = 100 + rng.u64(0..=40);
        let prefix = |n: usize| -> String { chars[..n].iter().collect() };

        let mut steps = Vec::new();

        // Too short for the typo choreography: just type it out.
        if chars.len() < TYPO_AT + 3 {
            for i in 1..=chars.len() {
                steps.push(TypingStep {
                    text: prefix(i),
                    delay_ms: type_delay,
                });
            }
            return Self { steps };
        }

        let correct = prefix(TYPO_AT);
        // Fingers running one letter ahead of the phrase: "Web devl",
        // "Web devlo" and the half-corrected "Web deveo".
        let slip = format!("{correct}{}", chars[TYPO_AT + 1]);
        let slip_long = format!("{slip}{}", chars[TYPO_AT + 2]);
        let slip_mixed = format!("{correct}{}{}", chars[TYPO_AT], chars[TYPO_AT + 2]);

        for i in 1..=TYPO_AT {
            steps.push(TypingStep {
                text: prefix(i),
                delay_ms: type_delay,
            });
        }

        // First mistake: noticed quickly, deleted, brief pause.
        steps.push(step(&slip, type_delay));
        steps.push(step(&slip_long, type_delay));
        steps.push(step(&slip_long, IMMEDIATE_MS));
        steps.push(step(&slip, type_delay));
        steps.push(step(&correct, type_delay));
        steps.push(step(&correct, SHORT_PAUSE_MS));

        // Second mistake, retyped at its own cadence.
        let retype_delay = 140 + rng.u64(0..=40);
        steps.push(step(&slip, type_delay));
        steps.push(step(&slip_mixed, retype_delay));
        steps.push(step(&slip_mixed, IMMEDIATE_MS));
        steps.push(step(&slip, type_delay));
        steps.push(step(&correct, type_delay));
        steps.push(step(&correct, SHORT_PAUSE_MS));

        // Third mistake: long hesitation before and after the deletion.
        steps.push(step(&slip, type_delay));
        steps.push(step(&slip_long, type_delay));
        steps.push(step(&slip_long, LONG_PAUSE_MS));
        steps.push(step(&slip, type_delay));
        steps.push(step(&correct, type_delay));
        steps.push(step(&correct, LONG_PAUSE_MS));

        // Get it right this time.
        for i in TYPO_AT + 1..=chars.len() {
            steps.push(TypingStep {
                text: prefix(i),
                delay_ms: type_delay,
            });
        }

        Self { steps }
    }

    /// The ordered steps.
    pub fn steps(&self) -> &[TypingStep] {
        &self.steps
    }

    /// The text left on screen once playback finishes.
    pub fn final_text(&self) -> &str {
        self.steps.last().map(|s| s.text.as_str()).unwrap_or("")
    }
}

/// Plays a [`TypingScript`] exactly once, driven by elapsed time.
#[derive(Debug)]
pub struct TypingAnimator {
    script: TypingScript,
    cursor: usize,
    next_due_ms: u64,
    display: String,
}

impl TypingAnimator {
    /// Build the script and prepare playback. Under reduced motion the
    /// final phrase is shown immediately and nothing ever plays.
    pub fn new(phrase: &str, reduced_motion: bool, rng: &mut Rng) -> Self {
        if reduced_motion {
            return Self {
                script: TypingScript::default(),
                cursor: 0,
                next_due_ms: 0,
                display: phrase.to_owned(),
            };
        }
        Self {
            script: TypingScript::compose(phrase, rng),
            cursor: 0,
            next_due_ms: TYPING_START_DELAY_MS,
            display: String::new(),
        }
    }

    /// Apply every step due at `elapsed_ms` and return the text to display.
    /// The cursor only moves forward; once the script is consumed this is a
    /// no-op.
    pub fn advance(&mut self, elapsed_ms: u64) -> &str {
        while self.cursor < self.script.steps.len() && elapsed_ms >= self.next_due_ms {
            let next = &self.script.steps[self.cursor];
            self.display.clone_from(&next.text);
            self.next_due_ms += next.delay_ms;
            self.cursor += 1;
        }
        &self.display
    }

    /// The text currently on display.
    pub fn text(&self) -> &str {
        &self.display
    }

    /// Whether playback has consumed the whole script.
    pub fn finished(&self) -> bool {
        self.cursor >= self.script.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "Web developer";

    fn script() -> TypingScript {
        TypingScript::compose(PHRASE, &mut Rng::with_seed(42))
    }

    /// Snapshots with consecutive duplicates (pause steps) collapsed.
    fn distinct_snapshots(script: &TypingScript) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for step in script.steps() {
            if out.last().map(String::as_str) != Some(step.text.as_str()) {
                out.push(step.text.clone());
            }
        }
        out
    }

    #[test]
    fn snapshot_sequence_is_exact() {
        let expected = [
            "W",
            "We",
            "Web",
            "Web ",
            "Web d",
            "Web de",
            "Web dev",
            "Web devl",
            "Web devlo",
            "Web devl",
            "Web dev",
            "Web devl",
            "Web deveo",
            "Web devl",
            "Web dev",
            "Web devl",
            "Web devlo",
            "Web devl",
            "Web dev",
            "Web deve",
            "Web devel",
            "Web develo",
            "Web develop",
            "Web develope",
            "Web developer",
        ];
        assert_eq!(distinct_snapshots(&script()), expected);
    }

    #[test]
    fn script_ends_on_the_full_phrase() {
        let script = script();
        assert_eq!(script.final_text(), PHRASE);
        // Nothing after completion.
        let completion = script
            .steps()
            .iter()
            .position(|s| s.text == PHRASE)
            .unwrap();
        assert_eq!(completion, script.steps().len() - 1);
    }

    #[test]
    fn pause_steps_reuse_the_previous_snapshot() {
        let script = script();
        let steps = script.steps();
        // First typo: "Web devlo" is held for the notice pause.
        assert_eq!(steps[8].text, "Web devlo");
        assert_eq!(steps[9].text, "Web devlo");
        assert_eq!(steps[9].delay_ms, 100);
        // First correction settles with the short pause.
        assert_eq!(steps[12].text, "Web dev");
        assert_eq!(steps[12].delay_ms, 250);
        // Third typo hesitates before and after the deletion.
        assert_eq!(steps[21].delay_ms, 1200);
        assert_eq!(steps[24].delay_ms, 1200);
    }

    #[test]
    fn cadence_is_drawn_once_with_a_separate_retype() {
        let script = script();
        let steps = script.steps();
        let cadence = steps[0].delay_ms;
        assert!((100..=140).contains(&cadence));
        // All typed steps share the cadence...
        for i in [1, 6, 7, 8, 10, 25, 30] {
            assert_eq!(steps[i].delay_ms, cadence);
        }
        // ...except the second typo's retype.
        assert!((140..=180).contains(&steps[14].delay_ms));
        assert_eq!(steps[14].text, "Web deveo");
    }

    #[test]
    fn short_phrases_skip_the_typo_choreography() {
        let script = TypingScript::compose("Hi", &mut Rng::with_seed(1));
        assert_eq!(distinct_snapshots(&script), ["H", "Hi"]);
        assert_eq!(script.final_text(), "Hi");
    }

    #[test]
    fn playback_follows_the_step_delays() {
        let mut animator = TypingAnimator::new(PHRASE, false, &mut Rng::with_seed(42));
        let cadence = animator.script.steps()[0].delay_ms;

        assert_eq!(animator.advance(0), "");
        assert_eq!(animator.advance(TYPING_START_DELAY_MS - 1), "");
        assert_eq!(animator.advance(TYPING_START_DELAY_MS), "W");
        assert_eq!(animator.advance(TYPING_START_DELAY_MS + cadence - 1), "W");
        assert_eq!(animator.advance(TYPING_START_DELAY_MS + cadence), "We");
    }

    #[test]
    fn playback_terminates_and_never_restarts() {
        let mut animator = TypingAnimator::new(PHRASE, false, &mut Rng::with_seed(42));
        animator.advance(10_000_000);
        assert!(animator.finished());
        assert_eq!(animator.text(), PHRASE);
        // Further time has no effect.
        assert_eq!(animator.advance(20_000_000), PHRASE);
    }

    #[test]
    fn reduced_motion_shows_the_phrase_immediately() {
        let mut animator = TypingAnimator::new(PHRASE, true, &mut Rng::with_seed(42));
        assert_eq!(animator.text(), PHRASE);
        assert!(animator.finished());
        assert_eq!(animator.advance(0), PHRASE);
    }
}
