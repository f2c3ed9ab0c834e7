use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Serialized transparently: the store file is a plain JSON object mapping
// user names to arrays of quotes, in insertion order, duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteBook {
    entries: BTreeMap<String, Vec<String>>,
}

impl QuoteBook {
    pub fn add(&mut self, user: &str, quote: &str) {
        self.entries
            .entry(user.to_string())
            .or_default()
            .push(quote.to_string());
    }

    pub fn quotes(&self, user: &str) -> Option<&[String]> {
        self.entries.get(user).map(Vec::as_slice)
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(user, quotes)| (user.as_str(), quotes.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn user_count(&self) -> usize {
        self.entries.len()
    }
}
