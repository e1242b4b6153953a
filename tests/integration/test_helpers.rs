//! Shared helpers for driving the menu loop without a terminal.
//!
//! `ScriptedPrompter` answers prompts from a queue and records every
//! selection list it was offered, so tests can assert both the stored
//! rows and what the user would have seen.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use employee_tracker::config::ManagerCandidates;
use employee_tracker::menu::Tracker;
use employee_tracker::persistence::db::{self, Database};
use employee_tracker::prompt::Prompter;
use employee_tracker::Result;

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum Answer {
    /// Pick the entry with this exact label.
    Pick(&'static str),
    /// Type this text.
    Text(&'static str),
    /// Enter this amount.
    Amount(f64),
    /// Back out of a selection.
    Back,
}

/// A selection list shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub prompt: String,
    pub items: Vec<String>,
}

/// Prompter fed from a fixed script. An exhausted script quits the menu.
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    offers: Rc<RefCell<Vec<Offer>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> (Self, Rc<RefCell<Vec<Offer>>>) {
        let offers = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                answers: answers.into(),
                offers: Rc::clone(&offers),
            },
            offers,
        )
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        self.offers.borrow_mut().push(Offer {
            prompt: prompt.to_owned(),
            items: items.to_vec(),
        });
        match self.answers.pop_front() {
            None | Some(Answer::Back) => Ok(None),
            Some(Answer::Pick(label)) => {
                let index = items
                    .iter()
                    .position(|item| item == label)
                    .unwrap_or_else(|| panic!("{label:?} not offered for {prompt:?}: {items:?}"));
                Ok(Some(index))
            }
            Some(other) => panic!("expected a pick for {prompt:?}, got {other:?}"),
        }
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        match self.answers.pop_front() {
            Some(Answer::Text(text)) => Ok(text.to_owned()),
            other => panic!("expected text for {prompt:?}, got {other:?}"),
        }
    }

    fn input_amount(&mut self, prompt: &str) -> Result<f64> {
        match self.answers.pop_front() {
            Some(Answer::Amount(amount)) => Ok(amount),
            other => panic!("expected an amount for {prompt:?}, got {other:?}"),
        }
    }
}

/// Everything a flow test needs.
pub struct Harness {
    pub db: Arc<Database>,
    pub tracker: Tracker<ScriptedPrompter, Vec<u8>>,
    pub offers: Rc<RefCell<Vec<Offer>>>,
}

impl Harness {
    /// Output written so far, consuming the harness.
    pub fn output(self) -> String {
        String::from_utf8(self.tracker.into_output()).expect("utf-8 output")
    }

    /// Items offered for the first selection with `prompt`.
    pub fn offered(&self, prompt: &str) -> Vec<String> {
        self.offers
            .borrow()
            .iter()
            .find(|offer| offer.prompt == prompt)
            .map(|offer| offer.items.clone())
            .unwrap_or_else(|| panic!("{prompt:?} was never offered"))
    }
}

/// Fresh in-memory database with a tracker reading `answers`.
pub async fn harness(answers: Vec<Answer>) -> Harness {
    let db = Arc::new(db::connect_memory().await.expect("db"));
    harness_on(db, ManagerCandidates::TopLevel, answers)
}

/// Tracker over an existing database.
pub fn harness_on(
    db: Arc<Database>,
    manager_candidates: ManagerCandidates,
    answers: Vec<Answer>,
) -> Harness {
    let (prompter, offers) = ScriptedPrompter::new(answers);
    let tracker = Tracker::new(Arc::clone(&db), manager_candidates, prompter, Vec::new());
    Harness {
        db,
        tracker,
        offers,
    }
}
