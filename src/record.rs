//! Record contract: what a type must expose to participate in tree construction.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Capability a record type implements to take part in tree construction.
///
/// A record names itself via [`id`](TreeRecord::id), points at its parent via
/// [`parent_id`](TreeRecord::parent_id) (`None` marks a top-level candidate),
/// and may carry a sibling sort key via [`order`](TreeRecord::order).
///
/// Ids are expected to be unique across one input collection. Uniqueness is
/// not enforced; when several records share an id, child groups attach to the
/// record that appears first in input order.
pub trait TreeRecord {
    /// Identifier type chosen by the caller.
    type Id: Clone + Eq + Hash + fmt::Debug;

    /// Unique identifier of this record.
    fn id(&self) -> Self::Id;

    /// Identifier of the parent record, `None` for top-level candidates.
    fn parent_id(&self) -> Option<Self::Id>;

    /// Sibling sort key. Records without one sort before records that have one.
    fn order(&self) -> Option<i64>;
}

/// Sibling ordering: ascending by `order`.
///
/// If either side has no `order` value the result is `Less`, so a mixed
/// comparison yields `Less` in both directions. The relation is deliberately
/// asymmetric and non-total; it is the documented contract and is kept as-is.
/// [`build`](crate::build) therefore sorts with the total-order key
/// `Option<i64>` (absent first) instead of this function, which produces the
/// same observable sibling order.
pub fn compare<R: TreeRecord>(a: &R, b: &R) -> Ordering {
    match (a.order(), b.order()) {
        (_, None) => Ordering::Less,
        (None, Some(_)) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}
