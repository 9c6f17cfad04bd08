//! Matching profile applications to the elements they tag.
//!
//! A profile application is attached to an element when any of its
//! reference slots holds the element's id. [`ScanResolver`] applies that rule
//! literally, record by record. [`TagIndex`] inverts the records once into an
//! id → records map. Both report tags in record order, so they always agree.

use rustc_hash::FxHashMap;

use crate::base::ElementId;
use crate::config::TagStrategy;

use super::source::ProfileApplication;

/// Answers which tags are attached to an element.
pub trait TagResolver {
    /// Tag names attached to `id`, in record order, each listed once.
    fn tags_for(&self, id: &ElementId) -> Vec<&str>;
}

/// Canonical resolution: compare every slot of every record.
pub struct ScanResolver<'a> {
    records: &'a [ProfileApplication],
}

impl<'a> ScanResolver<'a> {
    pub fn new(records: &'a [ProfileApplication]) -> Self {
        Self { records }
    }
}

impl TagResolver for ScanResolver<'_> {
    fn tags_for(&self, id: &ElementId) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for record in self.records {
            if record.references(id) && !tags.contains(&record.tag_name.as_str()) {
                tags.push(&record.tag_name);
            }
        }
        tags
    }
}

/// Reverse index from element id to the records referencing it.
pub struct TagIndex<'a> {
    records: &'a [ProfileApplication],
    by_element: FxHashMap<&'a ElementId, Vec<usize>>,
}

impl<'a> TagIndex<'a> {
    pub fn new(records: &'a [ProfileApplication]) -> Self {
        let mut by_element: FxHashMap<&'a ElementId, Vec<usize>> = FxHashMap::default();
        for (index, record) in records.iter().enumerate() {
            for id in &record.referenced_ids {
                let entry = by_element.entry(id).or_default();
                if entry.last() != Some(&index) {
                    entry.push(index);
                }
            }
        }
        Self {
            records,
            by_element,
        }
    }
}

impl TagResolver for TagIndex<'_> {
    fn tags_for(&self, id: &ElementId) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for &index in self.by_element.get(id).into_iter().flatten() {
            let name = self.records[index].tag_name.as_str();
            if !tags.contains(&name) {
                tags.push(name);
            }
        }
        tags
    }
}

/// Build the resolver selected by `strategy`.
pub fn resolver(
    strategy: TagStrategy,
    records: &[ProfileApplication],
) -> Box<dyn TagResolver + '_> {
    match strategy {
        TagStrategy::Indexed => Box::new(TagIndex::new(records)),
        TagStrategy::Scan => Box::new(ScanResolver::new(records)),
    }
}
