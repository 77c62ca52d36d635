//! Tree builder: links flat parent-referencing records into hierarchies.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::arena::TreeArena;
use crate::errors::{TreeError, TreeResult};
use crate::record::TreeRecord;

/// Links a flat record collection into a hierarchy.
///
/// Records are sorted by their `order` key (absent keys first), partitioned
/// into groups keyed by parent id, and each group is attached as the child
/// list of the record whose id matches the group key. The group of records
/// without a parent id, and groups whose key matches no record id, remain at
/// the top level.
///
/// With `single_tree_check` set, more than one remaining top-level group
/// fails with [`TreeError::MultipleRoots`]; otherwise all remaining groups
/// become the roots of the returned forest, in the order their keys first
/// appear. Empty input builds an empty arena.
///
/// Every record ends up in the arena exactly once. Records caught in a
/// parent-reference cycle attach to each other and stay in the arena without
/// being reachable from a root; cycle detection is out of scope here.
/// Intended for modest collection sizes.
#[instrument(level = "debug", skip(records), fields(record_count = records.len()))]
pub fn build<R: TreeRecord>(
    records: Vec<R>,
    single_tree_check: bool,
) -> TreeResult<TreeArena<R>> {
    let mut arena = TreeArena::new();

    // Insert in input order. The first occurrence of an id wins the linkage
    // when ids collide.
    let mut id_map: HashMap<R::Id, Index> = HashMap::with_capacity(records.len());
    let mut entries: Vec<(Index, Option<i64>, Option<R::Id>)> = Vec::with_capacity(records.len());
    for record in records {
        let id = record.id();
        let order = record.order();
        let parent_id = record.parent_id();
        let idx = arena.insert_node(record, None);
        id_map.entry(id).or_insert(idx);
        entries.push((idx, order, parent_id));
    }

    // Stable sort by the sibling key so every group comes out ascending,
    // records without an order value first.
    entries.sort_by_key(|entry| entry.1);

    // Partition into child groups keyed by parent id, keeping the order in
    // which keys first appear.
    let mut groups: Vec<(Option<R::Id>, Vec<Index>)> = Vec::new();
    let mut group_index: HashMap<Option<R::Id>, usize> = HashMap::new();
    for (idx, _, parent_id) in entries {
        let slot = match group_index.get(&parent_id) {
            Some(&slot) => slot,
            None => {
                groups.push((parent_id.clone(), Vec::new()));
                group_index.insert(parent_id, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].1.push(idx);
    }

    // Attach every group whose key resolves to a record id. The rest are
    // top-level groups.
    let mut roots: Vec<Index> = Vec::new();
    let mut unattached_keys: Vec<String> = Vec::new();
    for (key, children) in groups {
        match key.as_ref().and_then(|id| id_map.get(id)).copied() {
            Some(parent_idx) => arena.set_children(parent_idx, children),
            None => {
                unattached_keys.push(match &key {
                    Some(id) => format!("{id:?}"),
                    None => String::from("(no parent)"),
                });
                roots.extend(children);
            }
        }
    }

    if single_tree_check && unattached_keys.len() > 1 {
        return Err(TreeError::MultipleRoots {
            count: unattached_keys.len(),
            keys: unattached_keys,
        });
    }

    debug!(roots = roots.len(), nodes = arena.len(), "linked record groups");
    arena.set_roots(roots);
    Ok(arena)
}
