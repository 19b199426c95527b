//! Scripted host collaborators for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::platform::{Navigator, PlatformError, Prompt};

/// Answers prompts from a fixed script and records what was asked.
///
/// Runs out of answers as if every further prompt were cancelled.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<Option<String>>>,
    asked: RefCell<Vec<(String, String)>>,
}

impl ScriptedPrompt {
    pub fn new<'a>(answers: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        Self {
            answers: RefCell::new(
                answers
                    .into_iter()
                    .map(|a| a.map(str::to_owned))
                    .collect(),
            ),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// `(message, default)` pairs in the order they were asked.
    pub fn asked(&self) -> Vec<(String, String)> {
        self.asked.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&self, message: &str, default: &str) -> Option<String> {
        self.asked
            .borrow_mut()
            .push((message.to_owned(), default.to_owned()));
        self.answers.borrow_mut().pop_front().flatten()
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    opened: RefCell<Vec<String>>,
    failure: Option<String>,
}

impl RecordingNavigator {
    /// A navigator whose every `open` fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            opened: RefCell::new(Vec::new()),
            failure: Some(message.to_owned()),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open(&self, url: &str) -> Result<(), PlatformError> {
        if let Some(message) = &self.failure {
            return Err(PlatformError(message.clone()));
        }
        self.opened.borrow_mut().push(url.to_owned());
        Ok(())
    }
}
