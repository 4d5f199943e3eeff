//! Tag filter predicates
//!
//! Each predicate is a pure function of a single [`Tag`]. Predicates compose
//! by sequential application, so the selected set is always the
//! intersection of what every predicate accepts.

pub mod deadline;
pub mod name;

use crate::registry::types::Tag;

pub use deadline::{UpdatedBefore, by_deadline, parse_deadline};
pub use name::{NamePattern, by_name_pattern};

/// A stateless boolean test over a tag
pub trait TagPredicate {
    fn matches(&self, tag: &Tag) -> bool;
}

impl<F> TagPredicate for F
where
    F: Fn(&Tag) -> bool,
{
    fn matches(&self, tag: &Tag) -> bool {
        self(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn sample_tags() -> Vec<Tag> {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let at = |days: i64| (now - Duration::days(days)).to_rfc3339();
        vec![
            Tag::new("nightly-1", at(40)),
            Tag::new("nightly-2", at(5)),
            Tag::new("stable-1", at(40)),
            Tag::new("stable-2", at(1)),
            Tag {
                name: "nightly-unpushed".into(),
                last_updated: None,
                full_size: None,
            },
        ]
    }

    #[test]
    fn test_filter_order_does_not_change_selection() {
        let deadline = by_deadline(Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap());
        let name = by_name_pattern("nightly-*").unwrap();
        let tags = sample_tags();

        let deadline_first: Vec<&Tag> = tags
            .iter()
            .filter(|t| deadline.matches(t))
            .filter(|t| name.matches(t))
            .collect();
        let name_first: Vec<&Tag> = tags
            .iter()
            .filter(|t| name.matches(t))
            .filter(|t| deadline.matches(t))
            .collect();
        let intersection: Vec<&Tag> = tags
            .iter()
            .filter(|t| deadline.matches(t) && name.matches(t))
            .collect();

        assert_eq!(deadline_first, name_first);
        assert_eq!(deadline_first, intersection);
        assert_eq!(deadline_first.len(), 1);
        assert_eq!(deadline_first[0].name, "nightly-1");
    }

    #[test]
    fn test_closures_are_predicates() {
        let long_name = |tag: &Tag| tag.name.len() > 9;
        let tags = sample_tags();
        let selected: Vec<&str> = tags
            .iter()
            .filter(|t| long_name.matches(t))
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(selected, vec!["nightly-unpushed"]);
    }
}
