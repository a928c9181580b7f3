// src/db/filter.rs
// DOCUMENTATION: Storage-independent document filters
// PURPOSE: Describe listing predicates once; each store compiles them natively

use serde_json::Value;

/// A document field referenced by a predicate
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRef {
    /// A scalar string field, e.g. `name`
    Scalar(&'static str),
    /// Every element of an array-of-strings field, e.g. `tags`
    Elements(&'static str),
}

/// A single condition on a document
/// DOCUMENTATION: All comparisons are case-insensitive and literal;
/// user text is never treated as a pattern
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Whole-string match on one field
    Exact { field: &'static str, value: String },
    /// Substring match on any of the listed fields
    Contains { fields: Vec<FieldRef>, needle: String },
}

/// Conjunction of predicates; the empty filter matches every document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a case-insensitive exact match on `field`
    pub fn exact(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate::Exact {
            field,
            value: value.into(),
        });
        self
    }

    /// Add a case-insensitive substring match over any of `fields`
    pub fn contains(mut self, fields: Vec<FieldRef>, needle: impl Into<String>) -> Self {
        self.predicates.push(Predicate::Contains {
            fields,
            needle: needle.into(),
        });
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Evaluate the filter against a JSON document body
    pub fn matches(&self, doc: &Value) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(doc))
    }
}

impl Predicate {
    pub fn matches(&self, doc: &Value) -> bool {
        match self {
            Predicate::Exact { field, value } => doc
                .get(*field)
                .and_then(Value::as_str)
                .map(|actual| actual.to_lowercase() == value.to_lowercase())
                .unwrap_or(false),
            Predicate::Contains { fields, needle } => {
                let needle = needle.to_lowercase();
                fields.iter().any(|field| field.any_str(doc, |s| {
                    s.to_lowercase().contains(&needle)
                }))
            }
        }
    }
}

impl FieldRef {
    fn any_str(&self, doc: &Value, test: impl Fn(&str) -> bool) -> bool {
        match self {
            FieldRef::Scalar(name) => doc.get(*name).and_then(Value::as_str).map_or(false, test),
            FieldRef::Elements(name) => doc
                .get(*name)
                .and_then(Value::as_array)
                .map_or(false, |items| items.iter().filter_map(Value::as_str).any(test)),
        }
    }
}

/// Build an ILIKE pattern matching `needle` as a literal substring
/// Escapes the LIKE metacharacters `\`, `%` and `_` with a backslash
pub fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
