//! Context-free symbol substitution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Mapping from symbol to its replacement string.
///
/// Symbols without a rule rewrite to themselves, including `[` and `]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: HashMap<char, String>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `symbol -> replacement` (builder pattern).
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.insert(symbol, replacement);
        self
    }

    pub fn insert(&mut self, symbol: char, replacement: impl Into<String>) {
        self.rules.insert(symbol, replacement.into());
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(|(c, r)| (c, r.into())).collect(),
        }
    }
}

/// Rewrites every symbol of `axiom` once.
///
/// Reads only from `axiom` and writes into a fresh string, so symbols produced
/// in this pass are not rewritten again until the next one.
pub fn expand_once(axiom: &str, rules: &RuleTable) -> String {
    let mut next = String::with_capacity(axiom.len());
    for symbol in axiom.chars() {
        match rules.get(symbol) {
            Some(replacement) => next.push_str(replacement),
            None => next.push(symbol),
        }
    }
    next
}

/// Applies [`expand_once`] `generations` times. Zero generations returns the
/// axiom unchanged.
///
/// No bound is placed on the result; recursive rules grow exponentially.
pub fn expand(axiom: &str, rules: &RuleTable, generations: usize) -> String {
    let mut current = axiom.to_owned();
    for generation in 1..=generations {
        current = expand_once(&current, rules);
        debug!(generation, len = current.len(), "expanded axiom");
    }
    current
}
