//! Group consolidation.
//!
//! Groups live in an index-keyed arena: slot `id` holds the encounter indices
//! of the records currently assigned to group `id` (slot 0 is unused).
//! Consolidation replays the directive log in emission order and, for both
//! ends of every directive, relocates the slot's members into the slot of its
//! disjoint-set root:
//!
//! ```text
//! slots    1:[r0 r2 r4]  2:[r1]  3:[r3]        roots: 2->1, 3->1
//! (2, 1)   1:[r0 r2 r4 r1]  2:[]  3:[r3]
//! (3, 1)   1:[r0 r2 r4 r1 r3]  2:[]  3:[]
//! sort     1:[r0 r1 r2 r3 r4]
//! ```
//!
//! Roots are final before the replay starts (the assigner unions as it goes),
//! so a slot emptied by an earlier directive simply moves nothing later on.
//! Retired slots stay in the arena with an empty member list; their ids are
//! never reused.

use super::assign::Assignment;
use crate::GroupId;
use crate::record::Record;
use log::debug;

/// Final `group id -> members` arena.
#[derive(Debug, Clone)]
pub struct Groups {
    records: Vec<Record>,
    slots: Vec<Vec<usize>>,
    retired: usize,
}

impl Groups {
    /// Number of group ids ever opened, retired ones included.
    pub fn id_count(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    /// Number of slots emptied by consolidation.
    pub fn retired(&self) -> usize {
        self.retired
    }

    /// Total number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Members of `id` in encounter order. Unknown or retired ids yield nothing.
    pub fn members(&self, id: GroupId) -> impl Iterator<Item = &Record> + '_ {
        self.slots.get(id as usize).into_iter().flatten().map(move |&idx| &self.records[idx])
    }

    /// Number of members currently stored under `id`.
    pub fn size(&self, id: GroupId) -> usize {
        self.slots.get(id as usize).map_or(0, Vec::len)
    }

    /// Ids of groups with at least one member, ascending.
    pub fn live_ids(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.slots.iter().enumerate().skip(1).filter(|(_, slot)| !slot.is_empty()).map(|(id, _)| id as GroupId)
    }

    fn relocate(&mut self, from: GroupId, to: GroupId) {
        let moved = std::mem::take(&mut self.slots[from as usize]);
        if moved.is_empty() {
            return;
        }
        debug!("[merge] {} member(s) {from} -> {to}", moved.len());
        self.slots[to as usize].extend(moved);
        self.retired += 1;
    }
}

/// Fold the assignment's directive log into the final groups arena.
pub fn consolidate(assignment: Assignment) -> Groups {
    let Assignment { records, directives, mut sets, .. } = assignment;

    let mut groups =
        Groups { records: Vec::with_capacity(records.len()), slots: vec![Vec::new(); sets.len() + 1], retired: 0 };
    for (idx, (record, group)) in records.into_iter().enumerate() {
        groups.slots[group as usize].push(idx);
        groups.records.push(record);
    }

    for directive in &directives {
        for endpoint in [directive.source, directive.target] {
            let root = sets.find(endpoint);
            if root != endpoint {
                groups.relocate(endpoint, root);
            }
        }
    }

    for slot in &mut groups.slots {
        slot.sort_unstable();
    }

    groups
}
