//! Grouping of `/org/openbmc/control` objects by identity suffix.
//!
//! An enumeration returns flat object paths such as
//! `/org/openbmc/control/power0` and `/org/openbmc/control/chassis0`. The
//! text after the category prefix (`"0"` here) ties sibling objects
//! together, so power and chassis objects of one system can be paired.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// One control object: its full path and its properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlObject {
    /// Full object path, e.g. `/org/openbmc/control/chassis0`.
    pub path: String,
    /// Properties returned by the enumeration.
    pub properties: Value,
}

/// Identity suffix, then filter prefix, to the matching object.
pub type FilterMapping = BTreeMap<String, BTreeMap<String, ControlObject>>;

/// Groups the objects of an enumeration by identity suffix.
///
/// A path is kept when any of `filters` occurs in it. The first filter in
/// list order that occurs decides the prefix; the identity is everything
/// after that occurrence. Paths matching no filter are skipped.
#[must_use]
pub fn filter_entries<S: AsRef<str>>(items: &Map<String, Value>, filters: &[S]) -> FilterMapping {
    let mut mappings = FilterMapping::new();

    for (path, properties) in items {
        let Some((filter, idx)) = filters
            .iter()
            .map(AsRef::<str>::as_ref)
            .find_map(|f| path.find(f).map(|idx| (f, idx)))
        else {
            continue;
        };

        let ident = &path[idx + filter.len()..];
        mappings.entry(ident.to_string()).or_default().insert(
            filter.to_string(),
            ControlObject { path: path.clone(), properties: properties.clone() },
        );
    }

    mappings
}
