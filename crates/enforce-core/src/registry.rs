//! Whole-rule and partial-rule registries.

use crate::clause::Clause;
use crate::config::PhraseCase;
use crate::rule::{PartialRuleBox, WholeRule};
use crate::value::Value;

use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Exact-phrase lookup of whole rules.
///
/// Lookup is case-sensitive unless built with [`PhraseCase::Insensitive`],
/// in which case phrases are lowercased on insert and on lookup.
#[derive(Debug, Clone, Default)]
pub struct WholeRuleRegistry {
    case: PhraseCase,
    rules: Vec<WholeRule>,
    index: HashMap<String, usize>,
}

impl WholeRuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(case: PhraseCase) -> Self {
        Self {
            case,
            rules: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts a rule, replacing any rule with the same phrase.
    pub fn insert(&mut self, rule: WholeRule) {
        let key = self.key(rule.phrase());
        if let Some(&slot) = self.index.get(&key) {
            self.rules[slot] = rule;
        } else {
            self.index.insert(key, self.rules.len());
            self.rules.push(rule);
        }
    }

    /// Resolves a clause phrase to its rule.
    #[must_use]
    pub fn resolve(&self, phrase: &str) -> Option<&WholeRule> {
        self.index
            .get(&self.key(phrase))
            .and_then(|&slot| self.rules.get(slot))
    }

    /// Returns all rules in insertion order.
    #[must_use]
    pub fn rules(&self) -> &[WholeRule] {
        &self.rules
    }

    /// Returns the number of registered phrases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no phrase is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn key(&self, phrase: &str) -> String {
        match self.case {
            PhraseCase::Sensitive => phrase.to_string(),
            PhraseCase::Insensitive => phrase.to_lowercase(),
        }
    }
}

/// Ordered, append-only list of partial rules.
///
/// Appends publish a new list atomically; readers work on a [`Snapshot`]
/// and never observe a half-registered rule.
pub struct PartialRuleRegistry {
    rules: ArcSwap<Vec<PartialRuleBox>>,
}

impl PartialRuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rules(Vec::new())
    }

    /// Creates a registry holding `rules` in priority order.
    #[must_use]
    pub fn from_rules(rules: Vec<PartialRuleBox>) -> Self {
        Self {
            rules: ArcSwap::from_pointee(rules),
        }
    }

    /// Appends a rule with the lowest priority.
    pub fn register(&self, rule: PartialRuleBox) {
        self.rules.rcu(|current| {
            let mut next = Vec::clone(current);
            next.push(Arc::clone(&rule));
            next
        });
    }

    /// Takes a consistent view of the current rules.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.rules.load_full())
    }

    /// Evaluates the first rule whose pattern matches the clause text.
    ///
    /// Returns `None` if no pattern matches.
    #[must_use]
    pub fn search(&self, value: &Value, clause: &Clause) -> Option<bool> {
        self.snapshot().search(value, clause)
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.load().len()
    }

    /// Returns `true` if no rule is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.load().is_empty()
    }
}

impl Default for PartialRuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PartialRuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialRuleRegistry")
            .field("rules", &self.snapshot())
            .finish()
    }
}

/// A point-in-time view of a [`PartialRuleRegistry`].
#[derive(Clone)]
pub struct Snapshot(Arc<Vec<PartialRuleBox>>);

impl Snapshot {
    /// Evaluates the first rule whose pattern matches the clause text.
    #[must_use]
    pub fn search(&self, value: &Value, clause: &Clause) -> Option<bool> {
        let rule = self
            .0
            .iter()
            .find(|rule| rule.pattern().is_match(clause.text()))?;
        let outcome = rule.evaluate(value, clause);
        trace!(clause = clause.text(), rule = rule.name(), outcome, "partial rule matched");
        Some(outcome)
    }

    /// Returns the rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[PartialRuleBox] {
        &self.0
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|rule| rule.name()))
            .finish()
    }
}
