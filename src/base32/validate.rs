use super::{Alphabet, ALPHABET};
use crate::locale::Locale;
use serde::Serialize;

/// Why a piece of text cannot be decoded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    EmptyInput,
    InvalidCharacter { character: char, index: usize },
}

/// Classifies input text before decoding and renders the result as a message in one locale.
pub struct Validator<'a> {
    alphabet: &'a Alphabet<32>,
    locale: Locale,
}

impl<'a> Validator<'a> {
    pub const fn new(alphabet: &'a Alphabet<32>, locale: Locale) -> Self {
        Self { alphabet, locale }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub fn check(&self, input: impl AsRef<str>) -> Option<Diagnostic> {
        let input = input.as_ref();
        if input.trim().is_empty() {
            return Some(Diagnostic::EmptyInput);
        }
        input
            .chars()
            .enumerate()
            .find(|&(_, character)| !self.alphabet.contains(character))
            .map(|(index, character)| Diagnostic::InvalidCharacter { character, index })
    }

    pub fn message(&self, diagnostic: &Diagnostic) -> String {
        match diagnostic {
            Diagnostic::EmptyInput => self.locale.empty_input().to_string(),
            Diagnostic::InvalidCharacter { character, .. } => self.locale.invalid_character(*character, self.alphabet.as_str()),
        }
    }

    /// Empty when `input` can be decoded, otherwise the message explaining why not.
    pub fn validate(&self, input: impl AsRef<str>) -> String {
        self.check(input)
            .map(|diagnostic| self.message(&diagnostic))
            .unwrap_or_default()
    }

    pub fn default() -> &'static Self {
        &VALIDATOR
    }
}

const VALIDATOR: Validator = Validator::new(&ALPHABET, Locale::ZhHant);

pub fn check(input: impl AsRef<str>) -> Option<Diagnostic> {
    Validator::default().check(input)
}

pub fn validate(input: impl AsRef<str>) -> String {
    Validator::default().validate(input)
}
