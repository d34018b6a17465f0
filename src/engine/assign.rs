//! Single-pass group assignment.
//!
//! Every record is visited once, in encounter order, and given a group id:
//!
//! ```text
//! for record:
//!   first non-empty field already indexed?
//!     yes -> join that group `g`
//!            every other indexed field under g2 != g:
//!              log MergeDirective(g2, g), union(g2, g)
//!            point all non-empty fields at g
//!     no  -> open a new group, index all non-empty fields under it
//! ```
//!
//! Stopping at the *first* indexed field keeps the lookup cheap; the second
//! scan over the record's fields catches the case where one record bridges two
//! groups that were opened independently. Those bridges are applied to the
//! [`DisjointSet`] immediately, and also logged as directives for the merger.
//!
//! Empty fields (`""`) are skipped everywhere: they are never indexed and
//! never used to find or confirm a match. A record with only empty fields
//! always opens its own group.

use super::disjoint::DisjointSet;
use crate::record::{Field, Record};
use crate::{GroupId, MergeDirective};
use log::trace;
use std::collections::HashMap;

/// Output of [`assign`].
#[derive(Debug, Clone)]
pub struct Assignment {
    /// Records with the group they were initially placed in, in encounter order.
    pub records: Vec<(Record, GroupId)>,
    /// Reconciliations in discovery order, not deduplicated.
    pub directives: Vec<MergeDirective>,
    /// Group connectivity, already closed under all directives.
    pub sets: DisjointSet,
    /// Directives that actually joined two distinct sets.
    pub unions: usize,
}

impl Assignment {
    /// Number of group ids opened during the pass.
    pub fn group_count(&self) -> usize {
        self.sets.len()
    }
}

/// Assign every record to a group. `records` must already be deduplicated.
pub fn assign(records: Vec<Record>) -> Assignment {
    let mut field_index: HashMap<Field, GroupId> = HashMap::new();
    let mut sets = DisjointSet::new();
    let mut assigned = Vec::with_capacity(records.len());
    let mut directives = Vec::new();
    let mut unions = 0;

    for record in records {
        let matched = record.non_empty_fields().find_map(|field| field_index.get(field).copied());

        let group = match matched {
            Some(group) => {
                for field in record.non_empty_fields() {
                    match field_index.get(field) {
                        Some(&other) if other != group => {
                            directives.push(MergeDirective { target: other, source: group });
                            if sets.union(other, group) {
                                unions += 1;
                                trace!("[assign] union {other} <- {group} via position {}", field.position());
                            }
                        }
                        _ => {}
                    }
                    field_index.insert(field.clone(), group);
                }
                trace!("[assign] joined group {group}");
                group
            }
            None => {
                let group = sets.make_set();
                for field in record.non_empty_fields() {
                    field_index.insert(field.clone(), group);
                }
                trace!("[assign] opened group {group}");
                group
            }
        };

        assigned.push((record, group));
    }

    Assignment { records: assigned, directives, sets, unions }
}
