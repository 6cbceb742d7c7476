//! Grouping values by real type.

use crate::real::real_type_of;
use core_types::{TypeLabel, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Occurrences of each real type, sorted ascending by label text.
///
/// Serializes as an array of `[label, count]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCount {
    pairs: Vec<(TypeLabel, usize)>,
}

impl TypeCount {
    /// The `(label, count)` pairs in ascending label order
    pub fn pairs(&self) -> &[(TypeLabel, usize)] {
        &self.pairs
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no values were counted
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Sum of all counts, equal to the number of values counted
    pub fn total(&self) -> usize {
        self.pairs.iter().map(|(_, count)| count).sum()
    }

    /// Count for one label, zero if absent
    pub fn get(&self, label: TypeLabel) -> usize {
        self.pairs
            .binary_search_by(|(l, _)| l.cmp(&label))
            .map(|idx| self.pairs[idx].1)
            .unwrap_or(0)
    }

    /// Iterate over the pairs
    pub fn iter(&self) -> impl Iterator<Item = &(TypeLabel, usize)> {
        self.pairs.iter()
    }

    /// Converts to a nested array value: `[['label', count], ...]`
    ///
    /// ```
    /// use core_types::Value;
    /// use type_classifier::count_real_types;
    ///
    /// let counts = count_real_types(&[Value::Boolean(true), Value::Boolean(false)]);
    /// assert_eq!(counts.to_value().inspect(), "[ [ 'boolean', 2 ] ]");
    /// ```
    pub fn to_value(&self) -> Value {
        Value::array_from(
            self.pairs
                .iter()
                .map(|(label, count)| {
                    Value::array_from(vec![Value::from(*label), Value::from(*count)])
                })
                .collect(),
        )
    }

    /// Export counts as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Import counts from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<'a> IntoIterator for &'a TypeCount {
    type Item = &'a (TypeLabel, usize);
    type IntoIter = std::slice::Iter<'a, (TypeLabel, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Counts values by real type.
///
/// ```
/// use core_types::{TypeLabel, Value};
/// use type_classifier::count_real_types;
///
/// let values = [
///     Value::Boolean(true),
///     Value::Null,
///     Value::Boolean(true),
///     Value::Boolean(true),
///     Value::object(),
/// ];
/// assert_eq!(
///     count_real_types(&values).pairs(),
///     &[(TypeLabel::Boolean, 3), (TypeLabel::Null, 1), (TypeLabel::Object, 1)]
/// );
/// ```
pub fn count_real_types(values: &[Value]) -> TypeCount {
    let mut groups: BTreeMap<TypeLabel, usize> = BTreeMap::new();
    for value in values {
        *groups.entry(real_type_of(value)).or_insert(0) += 1;
    }
    log::debug!(
        "count_real_types: {} values in {} groups",
        values.len(),
        groups.len()
    );
    TypeCount {
        pairs: groups.into_iter().collect(),
    }
}
