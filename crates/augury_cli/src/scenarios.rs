//! Built-in scenarios the CLI can explore.

use augury_core::Fates;
use augury_theory::{Adventure, Evidence, Scene, TheoryResult, converge};
use clap::ValueEnum;
use std::collections::VecDeque;

/// Built-in scenario identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioId {
    /// Unary string of ones, one per "Another?" answered yes
    Ones,
    /// A single pick from the string vocabulary
    Names,
    /// Strings built from A/B picks
    Pairs,
    /// Ones, failing once the string reaches five characters
    ShortOnes,
}

impl ScenarioId {
    /// Scenario name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ones => "ones",
            Self::Names => "names",
            Self::Pairs => "pairs",
            Self::ShortOnes => "short-ones",
        }
    }

    /// Replay the scenario on one adventure
    ///
    /// # Errors
    ///
    /// `ShortOnes` fails on strings of five or more ones
    pub fn run(&self, adv: &mut Adventure) -> Scene<String> {
        match self {
            Self::Ones => Ok(string_of_ones(adv)),
            Self::Names => Ok(adv.choose_string("Who shall it be?")),
            Self::Pairs => {
                let mut built = String::new();
                while adv.choose_boolean("Another?") {
                    built.push_str(&adv.choose_from("Which string", &["A", "B"])?);
                }
                Ok(built)
            }
            Self::ShortOnes => {
                let ones = string_of_ones(adv);
                adv.log_step(format!("built {} ones", ones.len()));
                adv.check(ones, |ones| ones.len() < 5)
            }
        }
    }
}

fn string_of_ones(adv: &mut Adventure) -> String {
    let mut ones = String::new();
    while adv.choose_boolean("Another?") {
        ones.push('1');
    }
    ones
}

/// Ordered list implementations compared by [`converge_lists`]
pub trait ListCandidate {
    /// Append an item
    fn add(&mut self, item: String);
    /// Render the contents
    fn render(&self) -> String;
}

impl ListCandidate for Vec<String> {
    fn add(&mut self, item: String) {
        self.push(item);
    }

    fn render(&self) -> String {
        format!("{self:?}")
    }
}

impl ListCandidate for VecDeque<String> {
    fn add(&mut self, item: String) {
        self.push_back(item);
    }

    fn render(&self) -> String {
        format!("{:?}", self.iter().collect::<Vec<_>>())
    }
}

/// Check that a `Vec` and a `VecDeque` fill up identically under every fate
///
/// # Errors
///
/// Returns the divergence or failure reported by [`converge`]
pub fn converge_lists(fates: &dyn Fates) -> TheoryResult<Evidence> {
    let array: Box<dyn ListCandidate> = Box::new(Vec::<String>::new());
    let deque: Box<dyn ListCandidate> = Box::new(VecDeque::<String>::new());
    let mut candidates = vec![array, deque];
    converge(fates, &mut candidates, |adv, list| {
        while adv.choose_boolean("Another?") {
            list.add(adv.choose_string("What to add?"));
        }
        Ok(list.render())
    })
}
