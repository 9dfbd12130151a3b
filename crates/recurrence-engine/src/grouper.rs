//! Partition occurrences into groups of the same logical event.
//!
//! Each new occurrence is compared against group *representatives* only, in
//! the order the groups were created, and joins the first one it matches.
//! Groups are never merged or re-evaluated afterwards, so membership means
//! "similar to the representative", not "similar to every member".

use crate::occurrence::{Instance, Occurrence};
use crate::similarity::are_similar;

/// A representative occurrence plus the dates of every occurrence that matched it.
#[derive(Debug, Clone)]
pub struct Group<'a> {
    pub representative: Occurrence<'a>,
    /// Additional occurrences in input order.
    pub others: Vec<Instance>,
}

impl Group<'_> {
    /// Whether the group needs a recurrence rule at all.
    pub fn is_recurring(&self) -> bool {
        !self.others.is_empty()
    }

    /// Total number of occurrences, representative included.
    pub fn occurrence_count(&self) -> usize {
        self.others.len() + 1
    }
}

/// Group occurrences in input order. Output order is the order in which each
/// logical event first appears.
pub fn group_occurrences<'a, I>(occurrences: I) -> Vec<Group<'a>>
where
    I: IntoIterator<Item = Occurrence<'a>>,
{
    let mut groups: Vec<Group<'a>> = Vec::new();

    for occurrence in occurrences {
        match groups
            .iter_mut()
            .find(|group| are_similar(&occurrence, &group.representative))
        {
            Some(group) => group.others.push(occurrence.instance()),
            None => groups.push(Group {
                representative: occurrence,
                others: Vec::new(),
            }),
        }
    }

    groups
}
