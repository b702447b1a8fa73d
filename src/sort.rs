use std::cmp::Ordering;

use crate::definition::Registered;

/// Prefix first, then numeric code.
pub fn compare(a: &Registered, b: &Registered) -> Ordering {
    a.prefix.cmp(&b.prefix).then(a.code.cmp(&b.code))
}

/// Canonical emission order. The sort is stable, so entries with equal
/// prefix and code keep their registration order.
pub fn canonical_order(entries: &[Registered]) -> Vec<&Registered> {
    let mut ordered: Vec<&Registered> = entries.iter().collect();
    ordered.sort_by(|a, b| compare(a, b));
    ordered
}
