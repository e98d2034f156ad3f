//! Injection of the preset proxy and rules into a configuration document.
//!
//! # Semantics
//! - `proxies`: list → preset entry appended; absent → new one-element list
//! - `rules`: list → preset block prepended; absent → preset block verbatim
//! - Either key present with a non-list value (including null) is left
//!   untouched and reported as [`MergeAction::Skipped`]

use serde_yaml::{Mapping, Value};

use crate::relay::preset;

pub const PROXIES_KEY: &str = "proxies";
pub const RULES_KEY: &str = "rules";

/// What a merge step did to its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    /// Preset entry added after the existing proxies.
    Appended,
    /// Preset block placed before the existing rules.
    Prepended,
    /// Key was absent and has been created.
    Created,
    /// Key held a non-list value; nothing changed.
    Skipped,
}

/// Outcome of [`merge_document`] for both keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    pub proxies: MergeAction,
    pub rules: MergeAction,
}

impl MergeReport {
    pub fn any_skipped(&self) -> bool {
        self.proxies == MergeAction::Skipped || self.rules == MergeAction::Skipped
    }
}

/// Append `entry` to the document's `proxies` list.
pub fn merge_proxies(document: &mut Mapping, entry: Value) -> MergeAction {
    match document.get_mut(PROXIES_KEY) {
        Some(Value::Sequence(proxies)) => {
            proxies.push(entry);
            MergeAction::Appended
        }
        Some(_) => MergeAction::Skipped,
        None => {
            document.insert(Value::from(PROXIES_KEY), Value::Sequence(vec![entry]));
            MergeAction::Created
        }
    }
}

/// Place `block` ahead of the document's existing `rules`.
pub fn merge_rules(document: &mut Mapping, block: Vec<Value>) -> MergeAction {
    match document.get_mut(RULES_KEY) {
        Some(Value::Sequence(rules)) => {
            let mut merged = block;
            merged.append(rules);
            *rules = merged;
            MergeAction::Prepended
        }
        Some(_) => MergeAction::Skipped,
        None => {
            document.insert(Value::from(RULES_KEY), Value::Sequence(block));
            MergeAction::Created
        }
    }
}

/// Inject the preset proxy entry and rule sequence.
pub fn merge_document(document: &mut Mapping) -> MergeReport {
    MergeReport {
        proxies: merge_proxies(document, preset::proxy_entry()),
        rules: merge_rules(document, preset::rule_sequence()),
    }
}
