//! Adventures: one replay of a scenario against one fate.

use crate::error::{Interruption, Scene, TheoryError};
use crate::record::{AdventureLog, Choice};
use augury_core::Fate;
use std::fmt;

/// A single execution attempt.
///
/// Owns its fate, the ordered list of labeled choices the scenario made, and
/// free-text log lines. Scenario code reads earlier choices through
/// [`Adventure::choices`] but never rewrites them.
#[derive(Debug)]
pub struct Adventure {
    fate: Fate,
    choices: Vec<Choice>,
    step_log: Vec<String>,
}

impl Adventure {
    /// Start an adventure driven by `fate`
    #[must_use]
    pub fn new(fate: Fate) -> Self {
        Self {
            fate,
            choices: Vec::new(),
            step_log: Vec::new(),
        }
    }

    /// Hint of the fate driving this adventure
    #[must_use]
    pub fn hint(&self) -> String {
        self.fate.hint()
    }

    /// Choices made so far, in order
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Log lines written so far
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.step_log
    }

    /// Append a free-text log line
    pub fn log_step(&mut self, step: impl Into<String>) {
        self.step_log.push(step.into());
    }

    /// Snapshot the choices with a final answer
    #[must_use]
    pub fn extract_log(&self, answer: impl Into<String>) -> AdventureLog {
        AdventureLog::new(self.choices.clone(), answer)
    }

    /// Render the fate hint, every choice and every log line
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Turn a scenario failure into a theory error carrying this adventure
    #[must_use]
    pub fn into_failure(self, cause: anyhow::Error) -> TheoryError {
        TheoryError::Failed {
            adventure: self.render(),
            source: cause,
        }
    }

    /// Make a choice and record it under `question`.
    ///
    /// `choose` returns the answer text to record alongside the value.
    pub fn choose_labeled<T>(&mut self, question: &str, choose: impl FnOnce(&mut Fate) -> (String, T)) -> T {
        let (answer, value) = choose(&mut self.fate);
        self.choices.push(Choice::new(question, answer));
        value
    }

    /// Make a choice recorded by its `Display` rendering
    pub fn choose<T: fmt::Display>(&mut self, question: &str, choose: impl FnOnce(&mut Fate) -> T) -> T {
        self.choose_labeled(question, |fate| {
            let value = choose(fate);
            (value.to_string(), value)
        })
    }

    /// Pick one of `options`
    ///
    /// # Errors
    ///
    /// Fails the scenario if `options` is empty
    pub fn choose_from<T: Clone + fmt::Display>(&mut self, question: &str, options: &[T]) -> Scene<T> {
        let Some(value) = self.fate.scry_path(options).cloned() else {
            return Err(Interruption::fail(format!("no options to choose from for {question:?}")));
        };
        self.choices.push(Choice::new(question, value.to_string()));
        Ok(value)
    }

    /// Pick one labeled generator and run it against this adventure.
    ///
    /// Choices made by the generator are recorded before the label itself.
    ///
    /// # Errors
    ///
    /// Fails if `options` is empty; otherwise propagates the generator's result
    pub fn choose_from_nested<T>(
        &mut self,
        question: &str,
        options: &[(&str, &dyn Fn(&mut Adventure) -> Scene<T>)],
    ) -> Scene<T> {
        let Some((label, generate)) = self.fate.scry_path(options) else {
            return Err(Interruption::fail(format!("no options to choose from for {question:?}")));
        };
        let value = generate(self)?;
        self.choices.push(Choice::new(question, *label));
        Ok(value)
    }

    /// Choose an integer in `0..n`
    pub fn choose_int_less_than(&mut self, question: &str, n: usize) -> usize {
        self.choose(question, |fate| fate.scry_int_less_than(n))
    }

    /// Choose a natural number, unary encoded
    pub fn choose_small_natural_number(&mut self, question: &str) -> usize {
        self.choose(question, Fate::scry_small_natural)
    }

    /// Choose a boolean
    pub fn choose_boolean(&mut self, question: &str) -> bool {
        self.choose(question, Fate::scry_boolean)
    }

    /// Choose a string from the fixed vocabulary
    pub fn choose_string(&mut self, question: &str) -> String {
        self.choose(question, |fate| fate.scry_string().to_string())
    }

    /// Choose one named step, record it under `"Step"`, and run it
    ///
    /// # Errors
    ///
    /// Fails the scenario if `steps` is empty
    pub fn choose_step_and_execute<T>(&mut self, steps: &[(&str, &dyn Fn() -> T)]) -> Scene<T> {
        let Some((name, step)) = self.fate.scry_path(steps) else {
            return Err(Interruption::fail("no steps to choose from"));
        };
        self.choices.push(Choice::new("Step", *name));
        Ok(step())
    }

    /// Whether `question` was answered with `answer`
    #[must_use]
    pub fn saw_choice(&self, question: &str, answer: impl fmt::Display) -> bool {
        let answer = answer.to_string();
        self.choices
            .iter()
            .any(|choice| choice.question == question && choice.answer == answer)
    }

    /// Whether `question` was asked at all
    #[must_use]
    pub fn saw_question(&self, question: &str) -> bool {
        self.choices.iter().any(|choice| choice.question == question)
    }

    /// Whether `expected` occurs as an ordered, not necessarily contiguous,
    /// subsequence of the choices. Answers compare by their `Display`
    /// rendering, as in [`Adventure::saw_choice`]. Matched greedily left to
    /// right; an empty expectation always matches.
    #[must_use]
    pub fn saw_choices_in_order(&self, expected: &[(&str, &dyn fmt::Display)]) -> bool {
        let mut remaining = expected
            .iter()
            .map(|(question, answer)| (*question, answer.to_string()))
            .peekable();
        for choice in &self.choices {
            let Some((question, answer)) = remaining.peek() else {
                break;
            };
            if choice.question == *question && choice.answer == *answer {
                remaining.next();
            }
        }
        remaining.peek().is_none()
    }

    /// Skip this branch unless `predicate` holds for `value`
    ///
    /// # Errors
    ///
    /// Returns [`Interruption::Skip`] describing `value` when the predicate fails
    pub fn assume<T: fmt::Debug>(&self, value: T, predicate: impl FnOnce(&T) -> bool) -> Scene<T> {
        if predicate(&value) {
            Ok(value)
        } else {
            Err(Interruption::skip(format!("{value:?}")))
        }
    }

    /// Fail the scenario unless `predicate` holds for `value`
    ///
    /// # Errors
    ///
    /// Returns [`Interruption::Fail`] describing `value` when the predicate fails
    pub fn check<T: fmt::Debug>(&self, value: T, predicate: impl FnOnce(&T) -> bool) -> Scene<T> {
        if predicate(&value) {
            Ok(value)
        } else {
            Err(Interruption::fail(format!("check failed: {value:?}")))
        }
    }
}

impl fmt::Display for Adventure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ADVENTURE({})", self.fate.hint())?;
        for choice in &self.choices {
            writeln!(f, "  {} => {}", choice.question, choice.answer)?;
        }
        writeln!(f, "== LOG ==")?;
        for step in &self.step_log {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adventure(seed: u64) -> Adventure {
        Adventure::new(Fate::seeded(seed))
    }

    #[test]
    fn test_choices_recorded_in_order() {
        let mut adv = adventure(0b1);
        assert!(adv.choose_boolean("first"));
        assert!(!adv.choose_boolean("second"));
        assert_eq!(
            adv.choices(),
            &[Choice::new("first", "true"), Choice::new("second", "false")]
        );
    }

    #[test]
    fn test_choose_labeled_records_label() {
        let mut adv = adventure(1);
        let value = adv.choose_labeled("pick", |fate| ("odd".to_string(), fate.scry_bit()));
        assert_eq!(value, 1);
        assert!(adv.saw_choice("pick", "odd"));
    }

    #[test]
    fn test_choose_from() {
        let mut adv = adventure(0b10);
        assert_eq!(adv.choose_from("letter", &['a', 'b', 'c']).unwrap(), 'c');
        assert!(adv.saw_choice("letter", 'c'));
    }

    #[test]
    fn test_choose_from_empty_fails() {
        let mut adv = adventure(0);
        let options: [u8; 0] = [];
        let err = adv.choose_from("nothing", &options).unwrap_err();
        assert!(!err.is_skip());
        assert!(adv.choices().is_empty());
    }

    #[test]
    fn test_choose_from_nested_records_inner_first() {
        let mut adv = adventure(0b11);
        let number: &dyn Fn(&mut Adventure) -> Scene<String> =
            &|adv: &mut Adventure| Ok(adv.choose_int_less_than("digit", 2).to_string());
        let word: &dyn Fn(&mut Adventure) -> Scene<String> =
            &|adv: &mut Adventure| Ok(adv.choose_string("word"));
        let value = adv
            .choose_from_nested("kind", &[("word", word), ("number", number)])
            .unwrap();
        assert_eq!(value, "1");
        assert_eq!(
            adv.choices(),
            &[Choice::new("digit", "1"), Choice::new("kind", "number")]
        );
    }

    #[test]
    fn test_choose_int_and_natural() {
        let mut adv = adventure(0b0_111_10);
        assert_eq!(adv.choose_int_less_than("n", 4), 2);
        assert_eq!(adv.choose_small_natural_number("k"), 3);
        assert!(adv.saw_choice("n", 2));
        assert!(adv.saw_choice("k", 3));
    }

    #[test]
    fn test_choose_string() {
        let mut adv = adventure(0b01);
        assert_eq!(adv.choose_string("who"), "Mei");
        assert!(adv.saw_choice("who", "Mei"));
    }

    #[test]
    fn test_choose_step_and_execute() {
        let mut adv = adventure(1);
        let push: &dyn Fn() -> &'static str = &|| "pushed";
        let pop: &dyn Fn() -> &'static str = &|| "popped";
        let result = adv.choose_step_and_execute(&[("push", push), ("pop", pop)]).unwrap();
        assert_eq!(result, "popped");
        assert!(adv.saw_choice("Step", "pop"));
    }

    #[test]
    fn test_saw_question() {
        let mut adv = adventure(0);
        adv.choose_boolean("Another?");
        assert!(adv.saw_question("Another?"));
        assert!(!adv.saw_question("Other?"));
        assert!(adv.saw_choice("Another?", false));
        assert!(!adv.saw_choice("Another?", true));
    }

    #[test]
    fn test_saw_choices_in_order() {
        let mut adv = adventure(0b0101);
        for _ in 0..4 {
            adv.choose_boolean("q");
        }
        adv.choose_boolean("done");
        assert!(adv.saw_choices_in_order(&[("q", &true), ("q", &true), ("done", &false)]));
        assert!(adv.saw_choices_in_order(&[("q", &false), ("q", &false)]));
        assert!(!adv.saw_choices_in_order(&[("done", &false), ("q", &true)]));
        assert!(!adv.saw_choices_in_order(&[("q", &true), ("q", &true), ("q", &true)]));
        assert!(adv.saw_choices_in_order(&[]));
    }

    #[test]
    fn test_saw_choices_in_order_mixed_answers() {
        let mut adv = adventure(0b10_1111);
        adv.choose_boolean("flag");
        adv.choose_small_natural_number("count");
        adv.choose_boolean("last");
        assert!(adv.saw_choice("count", 3));
        assert!(adv.saw_choices_in_order(&[("flag", &true), ("count", &3), ("last", &true)]));
        assert!(adv.saw_choices_in_order(&[("flag", &"true"), ("count", &"3")]));
        assert!(!adv.saw_choices_in_order(&[("count", &4)]));
    }

    #[test]
    fn test_assume_and_check() {
        let adv = adventure(0);
        assert_eq!(adv.assume(3, |n| *n < 5).unwrap(), 3);
        let skipped = adv.assume("long".to_string(), |s| s.len() < 2).unwrap_err();
        assert!(skipped.is_skip());
        assert_eq!(skipped.to_string(), "Violated assumption: \"long\"");
        let failed = adv.check(7, |n| *n < 5).unwrap_err();
        assert!(!failed.is_skip());
        assert!(failed.to_string().contains('7'));
    }

    #[test]
    fn test_render() {
        let mut adv = adventure(1);
        adv.choose_boolean("Another?");
        adv.log_step("added one");
        assert_eq!(
            adv.render(),
            "ADVENTURE(intFate(1))\n  Another? => true\n== LOG ==\nadded one\n"
        );
        assert_eq!(adv.steps(), &["added one".to_string()]);
    }

    #[test]
    fn test_extract_log() {
        let mut adv = adventure(0);
        adv.choose_string("who");
        let log = adv.extract_log("Satsuki");
        assert_eq!(log.answer, "Satsuki");
        assert_eq!(log.choices, vec![Choice::new("who", "Satsuki")]);
    }

    #[test]
    fn test_into_failure_embeds_hint() {
        let adv = adventure(63);
        let err = adv.into_failure(anyhow::anyhow!("boom"));
        assert!(err.to_string().contains("intFate(63)"));
    }
}
