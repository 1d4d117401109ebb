// lib/src/filtering/mod.rs

//! Multi-field search and categorical filtering over in-memory lists.
//!
//! Every list page combines one free-text query with a handful of selectors.
//! Records describe themselves through [`Filterable`]; a [`FilterSpec`] holds
//! the active criteria and [`filter_records`] applies them with logical AND,
//! keeping the input order.

use std::borrow::Cow;
use std::collections::BTreeMap;

pub mod buckets;
pub mod entities;

pub use buckets::{ExperienceLevel, StockLevel};
pub use entities::{ActivityFilter, AppointmentFilter, DoctorFilter, MedicationFilter, PatientFilter, RecordFilter};

/// Selector value meaning "no constraint".
pub const ALL_SENTINEL: &str = "all";

/// A selector takes part in filtering only when it is non-empty and not `"all"`.
pub fn is_active(selector: &str) -> bool {
    !selector.is_empty() && selector != ALL_SENTINEL
}

/// A field value exposed to the filter engine.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(u32),
}

impl<'a> FieldValue<'a> {
    pub fn text(s: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(s))
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_ref()),
            FieldValue::Number(_) => None,
        }
    }
}

/// A record that can be searched and filtered.
pub trait Filterable {
    /// Fields the free-text query is matched against, in display order.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Looks up a field by the key used in a [`FilterSpec`].
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;
}

/// The test applied to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Exact, case-sensitive equality.
    Equals(String),
    EqualsIgnoreCase(String),
    /// Case-insensitive substring.
    Contains(String),
    /// Half-open numeric range `[min, max)`; a missing bound is unbounded.
    Range { min: Option<u32>, max: Option<u32> },
    /// Matches nothing. Used for unrecognised bucket names.
    Never,
}

impl Criterion {
    pub fn matches(&self, value: &FieldValue<'_>) -> bool {
        match self {
            Criterion::Equals(expected) => value.as_text() == Some(expected.as_str()),
            Criterion::EqualsIgnoreCase(expected) => value
                .as_text()
                .map(|v| v.to_lowercase() == expected.to_lowercase())
                .unwrap_or(false),
            Criterion::Contains(needle) => value.as_text().map(|v| contains_ignore_case(v, needle)).unwrap_or(false),
            Criterion::Range { min, max } => match value {
                FieldValue::Number(n) => min.map_or(true, |m| *n >= m) && max.map_or(true, |m| *n < m),
                FieldValue::Text(_) => false,
            },
            Criterion::Never => false,
        }
    }
}

/// The query and selector state of one list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub query: String,
    pub criteria: BTreeMap<&'static str, Criterion>,
}

impl FilterSpec {
    pub fn new(query: &str) -> Self {
        FilterSpec {
            query: query.to_string(),
            criteria: BTreeMap::new(),
        }
    }

    /// Adds a criterion unconditionally.
    pub fn with(mut self, key: &'static str, criterion: Criterion) -> Self {
        self.criteria.insert(key, criterion);
        self
    }

    /// Adds the criterion built from `selector` when the selector is active.
    pub fn with_selector<F>(self, key: &'static str, selector: &str, build: F) -> Self
    where
        F: FnOnce(&str) -> Criterion,
    {
        if is_active(selector) {
            self.with(key, build(selector))
        } else {
            self
        }
    }

    pub fn matches<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        let query_hit = self.query.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| contains_ignore_case(field, &self.query));

        query_hit
            && self
                .criteria
                .iter()
                .all(|(key, criterion)| record.field(key).map_or(false, |value| criterion.matches(&value)))
    }
}

/// Returns the records matching every active filter, in input order.
pub fn filter_records<T: Filterable + Clone>(records: &[T], spec: &FilterSpec) -> Vec<T> {
    let matched: Vec<T> = records.iter().filter(|r| spec.matches(*r)).cloned().collect();
    log::debug!(
        "filter kept {}/{} record(s) (query={:?}, {} criteria)",
        matched.len(),
        records.len(),
        spec.query,
        spec.criteria.len()
    );
    matched
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
