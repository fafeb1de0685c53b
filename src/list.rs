//! Ordered playlist container: a doubly linked list with an optional
//! circular mode.
//!
//! Entries live in an arena and point at each other through [`EntryId`]
//! handles, so the ring formed in circular mode owns nothing twice.
//! Every handle carries the stamp it was allocated with; a handle to a
//! removed entry never resolves again, even after its slot is reused.

use std::fmt;

/// Handle to one entry of an [`OrderedPlaylist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    slot: usize,
    stamp: u64,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<EntryId>,
    previous: Option<EntryId>,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    stamp: u64,
    node: Option<Node<T>>,
}

/// A doubly linked sequence of values, linear or circular.
///
/// Lookups that miss (empty list, index out of range, absent value) return
/// `None`; nothing here panics on bad input.
#[derive(Clone)]
pub struct OrderedPlaylist<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    stamp: u64,
    head: Option<EntryId>,
    tail: Option<EntryId>,
    len: usize,
    circular: bool,
}

impl<T> OrderedPlaylist<T> {
    /// Creates an empty, linear playlist.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            stamp: 0,
            head: None,
            tail: None,
            len: 0,
            circular: false,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the last entry wraps around to the first.
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// Inserts `value` as the new first entry.
    pub fn prepend(&mut self, value: T) -> EntryId {
        let id = self.allocate(value);
        match self.head {
            None => self.tail = Some(id),
            Some(old_head) => {
                self.unlink_ends();
                self.set_next(id, Some(old_head));
                self.set_previous(old_head, Some(id));
            }
        }
        self.head = Some(id);
        self.len += 1;
        self.seal_ends();
        id
    }

    /// Inserts `value` as the new last entry.
    pub fn append(&mut self, value: T) -> EntryId {
        let id = self.allocate(value);
        match self.tail {
            None => self.head = Some(id),
            Some(old_tail) => {
                self.unlink_ends();
                self.set_previous(id, Some(old_tail));
                self.set_next(old_tail, Some(id));
            }
        }
        self.tail = Some(id);
        self.len += 1;
        self.seal_ends();
        id
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index == 0` prepends and `index == len()` appends (both hold on an
    /// empty list). Any larger index leaves the list untouched and
    /// returns `None`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Option<EntryId> {
        if index == 0 {
            return Some(self.prepend(value));
        }
        if index == self.len {
            return Some(self.append(value));
        }
        if index > self.len {
            return None;
        }

        let after = self.id_at(index)?;
        let before = self.previous_id(after)?;
        let id = self.allocate(value);

        self.set_previous(id, Some(before));
        self.set_next(id, Some(after));
        self.set_next(before, Some(id));
        self.set_previous(after, Some(id));

        self.len += 1;
        Some(id)
    }

    /// The entry at `index`, walking from the head.
    pub fn get(&self, index: usize) -> Option<Entry<'_, T>> {
        self.id_at(index).and_then(|id| self.entry(id))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let id = self.id_at(index)?;
        self.value_mut(id)
    }

    pub fn first(&self) -> Option<Entry<'_, T>> {
        self.head.and_then(|id| self.entry(id))
    }

    pub fn last(&self) -> Option<Entry<'_, T>> {
        self.tail.and_then(|id| self.entry(id))
    }

    /// Position of the first entry equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == value)
    }

    /// Position of the entry behind `id`, if it is still in the list.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.ids().position(|candidate| candidate == id)
    }

    pub fn entry(&self, id: EntryId) -> Option<Entry<'_, T>> {
        self.node(id).map(|node| Entry { list: self, id, node })
    }

    pub fn value(&self, id: EntryId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    pub fn value_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.value)
    }

    /// The following entry; wraps to the head in circular mode.
    pub fn next_id(&self, id: EntryId) -> Option<EntryId> {
        self.node(id).and_then(|node| node.next)
    }

    /// The preceding entry; wraps to the tail in circular mode.
    pub fn previous_id(&self, id: EntryId) -> Option<EntryId> {
        self.node(id).and_then(|node| node.previous)
    }

    /// Removes and returns the first value.
    pub fn remove_first(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Removes and returns the last value.
    pub fn remove_last(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    /// Removes and returns the value at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.remove_first();
        }
        if index == self.len - 1 {
            return self.remove_last();
        }
        let id = self.id_at(index)?;
        self.unlink(id)
    }

    /// Removes the first entry equal to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(value)?;
        self.remove_at(index)
    }

    /// Removes the entry behind `id`.
    pub fn remove_entry(&mut self, id: EntryId) -> Option<T> {
        self.unlink(id)
    }

    /// Drops every entry. The circular flag is kept, so entries added later
    /// form a ring again if the list was circular.
    pub fn remove_all(&mut self) {
        if self.head.is_none() {
            return;
        }
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Joins the last entry to the first. Does nothing on an empty list.
    pub fn make_circular(&mut self) {
        if self.head.is_none() {
            return;
        }
        self.circular = true;
        self.link_ends();
    }

    /// Breaks the wrap-around link. Does nothing on an empty list.
    pub fn make_linear(&mut self) {
        if self.head.is_none() {
            return;
        }
        self.circular = false;
        self.unlink_ends();
    }

    /// Values from head to tail. Visits each entry once, also when circular.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Mutable access to every value, in storage order rather than list
    /// order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots
            .iter_mut()
            .filter_map(|slot| slot.node.as_mut())
            .map(|node| &mut node.value)
    }

    /// Entry handles from head to tail.
    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        let mut cursor = self.head;
        (0..self.len).map_while(move |_| {
            let id = cursor?;
            cursor = self.next_id(id);
            Some(id)
        })
    }

    fn id_at(&self, index: usize) -> Option<EntryId> {
        if index >= self.len {
            return None;
        }
        self.ids().nth(index)
    }

    fn node(&self, id: EntryId) -> Option<&Node<T>> {
        self.slots
            .get(id.slot)
            .filter(|slot| slot.stamp == id.stamp)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: EntryId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.slot)
            .filter(|slot| slot.stamp == id.stamp)
            .and_then(|slot| slot.node.as_mut())
    }

    fn set_next(&mut self, id: EntryId, next: Option<EntryId>) {
        if let Some(node) = self.node_mut(id) {
            node.next = next;
        }
    }

    fn set_previous(&mut self, id: EntryId, previous: Option<EntryId>) {
        if let Some(node) = self.node_mut(id) {
            node.previous = previous;
        }
    }

    fn allocate(&mut self, value: T) -> EntryId {
        self.stamp += 1;
        let slot = Slot {
            stamp: self.stamp,
            node: Some(Node {
                value,
                next: None,
                previous: None,
            }),
        };

        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = slot;
                index
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };

        EntryId {
            slot: index,
            stamp: self.stamp,
        }
    }

    fn release(&mut self, id: EntryId) -> Option<Node<T>> {
        let slot = self
            .slots
            .get_mut(id.slot)
            .filter(|slot| slot.stamp == id.stamp)?;
        let node = slot.node.take()?;
        self.free.push(id.slot);
        Some(node)
    }

    /// Splices `id` out of the chain and frees it.
    fn unlink(&mut self, id: EntryId) -> Option<T> {
        self.node(id)?;

        // Open the ring first: with a single entry its neighbours are
        // itself, and the list must simply become empty.
        self.unlink_ends();
        let node = self.release(id)?;

        match node.previous {
            Some(previous) => self.set_next(previous, node.next),
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.set_previous(next, node.previous),
            None => self.tail = node.previous,
        }

        self.len -= 1;
        self.seal_ends();
        Some(node.value)
    }

    fn link_ends(&mut self) {
        if let (Some(head), Some(tail)) = (self.head, self.tail) {
            self.set_previous(head, Some(tail));
            self.set_next(tail, Some(head));
        }
    }

    fn unlink_ends(&mut self) {
        if let (Some(head), Some(tail)) = (self.head, self.tail) {
            self.set_previous(head, None);
            self.set_next(tail, None);
        }
    }

    /// Restores the end links required by the current mode.
    fn seal_ends(&mut self) {
        if self.circular {
            self.link_ends();
        } else {
            self.unlink_ends();
        }
    }
}

impl<T> Default for OrderedPlaylist<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedPlaylist<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedPlaylist")
            .field("circular", &self.circular)
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, T>(&'a OrderedPlaylist<T>);

impl<T: fmt::Debug> fmt::Debug for DebugEntries<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T> FromIterator<T> for OrderedPlaylist<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for OrderedPlaylist<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedPlaylist<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowed view of one entry and its neighbours.
pub struct Entry<'a, T> {
    list: &'a OrderedPlaylist<T>,
    id: EntryId,
    node: &'a Node<T>,
}

impl<'a, T> Entry<'a, T> {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    pub fn next(&self) -> Option<Entry<'a, T>> {
        self.node.next.and_then(|id| self.list.entry(id))
    }

    pub fn previous(&self) -> Option<Entry<'a, T>> {
        self.node.previous.and_then(|id| self.list.entry(id))
    }
}

impl<T> Clone for Entry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Entry<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Entry<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("value", &self.node.value)
            .finish()
    }
}

/// Iterator over playlist values, head to tail.
pub struct Iter<'a, T> {
    list: &'a OrderedPlaylist<T>,
    cursor: Option<EntryId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> OrderedPlaylist<&'static str> {
        ["A", "B", "C"].into_iter().collect()
    }

    fn values<T: Clone>(list: &OrderedPlaylist<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    /// Walks every link in both directions and checks the mode invariants.
    fn assert_well_formed<T: fmt::Debug>(list: &OrderedPlaylist<T>) {
        if list.is_empty() {
            assert!(list.first().is_none());
            assert!(list.last().is_none());
            return;
        }

        let first = list.first().unwrap();
        let last = list.last().unwrap();

        let ids: Vec<EntryId> = list.ids().collect();
        assert_eq!(ids.len(), list.len());
        assert_eq!(ids[0], first.id());
        assert_eq!(ids[ids.len() - 1], last.id());

        for pair in ids.windows(2) {
            assert_eq!(list.next_id(pair[0]), Some(pair[1]));
            assert_eq!(list.previous_id(pair[1]), Some(pair[0]));
        }

        if list.is_circular() {
            assert_eq!(last.next().map(|e| e.id()), Some(first.id()));
            assert_eq!(first.previous().map(|e| e.id()), Some(last.id()));
        } else {
            assert!(last.next().is_none());
            assert!(first.previous().is_none());
        }
    }

    #[test]
    fn test_new_list_is_empty() {
        let list: OrderedPlaylist<u32> = OrderedPlaylist::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(!list.is_circular());
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert!(list.get(0).is_none());
    }

    #[test]
    fn test_append_keeps_order() {
        let mut list = OrderedPlaylist::new();
        for value in 0..5 {
            list.append(value);
        }

        assert_eq!(list.len(), 5);
        for index in 0..5 {
            assert_eq!(list.get(index).map(|e| *e.value()), Some(index));
        }
        assert!(list.get(5).is_none());
        assert_well_formed(&list);
    }

    #[test]
    fn test_prepend_and_append_ends() {
        let mut list = abc();
        list.prepend("first");
        list.append("last");

        assert_eq!(list.first().map(|e| *e.value()), Some("first"));
        assert_eq!(list.last().map(|e| *e.value()), Some("last"));
        assert_eq!(values(&list), vec!["first", "A", "B", "C", "last"]);
        assert_well_formed(&list);
    }

    #[test]
    fn test_prepend_on_empty_sets_both_ends() {
        let mut list = OrderedPlaylist::new();
        let id = list.prepend(7);

        assert_eq!(list.first().map(|e| e.id()), Some(id));
        assert_eq!(list.last().map(|e| e.id()), Some(id));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_insert_in_middle_shifts_following() {
        let mut list = abc();
        let id = list.insert_at(1, "X");

        assert!(id.is_some());
        assert_eq!(list.get(1).map(|e| e.id()), id);
        assert_eq!(values(&list), vec!["A", "X", "B", "C"]);
        assert_eq!(list.get(2).map(|e| *e.value()), Some("B"));
        assert_well_formed(&list);
    }

    #[test]
    fn test_insert_at_boundaries() {
        let mut list = abc();
        list.insert_at(0, "front");
        let len = list.len();
        list.insert_at(len, "back");

        assert_eq!(values(&list), vec!["front", "A", "B", "C", "back"]);
        assert_well_formed(&list);
    }

    #[test]
    fn test_insert_past_end_is_noop() {
        let mut list = abc();
        assert!(list.insert_at(4, "X").is_none());
        assert_eq!(values(&list), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_insert_into_empty_at_zero() {
        let mut list = OrderedPlaylist::new();
        assert!(list.insert_at(1, "X").is_none());
        assert!(list.insert_at(0, "X").is_some());
        assert_eq!(values(&list), vec!["X"]);
    }

    #[test]
    fn test_index_of() {
        let list = abc();
        assert_eq!(list.index_of(&"A"), Some(0));
        assert_eq!(list.index_of(&"B"), Some(1));
        assert_eq!(list.index_of(&"Z"), None);
    }

    #[test]
    fn test_index_of_returns_first_match() {
        let list: OrderedPlaylist<_> = [1, 2, 1].into_iter().collect();
        assert_eq!(list.index_of(&1), Some(0));
    }

    #[test]
    fn test_remove_middle_scenario() {
        let mut list = abc();
        assert_eq!(list.index_of(&"B"), Some(1));

        assert_eq!(list.remove_at(1), Some("B"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).map(|e| *e.value()), Some("A"));
        assert_eq!(list.get(1).map(|e| *e.value()), Some("C"));
        assert_well_formed(&list);
    }

    #[test]
    fn test_remove_ends() {
        let mut list = abc();
        assert_eq!(list.remove_first(), Some("A"));
        assert_eq!(list.remove_last(), Some("C"));
        assert_eq!(values(&list), vec!["B"]);
        assert_well_formed(&list);

        assert_eq!(list.remove_last(), Some("B"));
        assert!(list.is_empty());
        assert_well_formed(&list);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut list = abc();
        assert!(list.remove_at(3).is_none());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_by_value() {
        let mut list = abc();
        assert_eq!(list.remove(&"C"), Some("C"));
        assert!(list.remove(&"C").is_none());
        assert_eq!(values(&list), vec!["A", "B"]);
    }

    #[test]
    fn test_remove_from_empty_leaves_state() {
        let mut list: OrderedPlaylist<u8> = OrderedPlaylist::new();
        assert!(list.remove_first().is_none());
        assert!(list.remove_last().is_none());
        assert!(list.remove_at(0).is_none());
        assert!(list.remove(&1).is_none());
        assert!(list.is_empty());
        assert!(!list.is_circular());
    }

    #[test]
    fn test_remove_all() {
        let mut list = abc();
        list.remove_all();
        assert!(list.is_empty());
        assert!(list.first().is_none());
        assert!(list.last().is_none());

        list.remove_all();
        assert_eq!(list.len(), 0);
        assert!(list.first().is_none());
    }

    #[test]
    fn test_circular_links_and_revert() {
        let mut list = abc();
        list.make_circular();
        assert!(list.is_circular());

        let first = list.first().unwrap();
        let last = list.last().unwrap();
        assert_eq!(last.next().map(|e| e.id()), Some(first.id()));
        assert_eq!(first.previous().map(|e| e.id()), Some(last.id()));

        list.make_linear();
        assert!(!list.is_circular());
        assert!(list.last().unwrap().next().is_none());
        assert!(list.first().unwrap().previous().is_none());
    }

    #[test]
    fn test_make_circular_is_idempotent() {
        let mut list = abc();
        list.make_circular();
        list.make_circular();
        assert_well_formed(&list);
        assert_eq!(values(&list), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_mode_change_on_empty_is_noop() {
        let mut list: OrderedPlaylist<u8> = OrderedPlaylist::new();
        list.make_circular();
        assert!(!list.is_circular());
        list.make_linear();
        assert!(!list.is_circular());
    }

    #[test]
    fn test_single_entry_circular_self_loop() {
        let mut list = OrderedPlaylist::new();
        list.append("only");
        list.make_circular();

        let entry = list.get(0).unwrap();
        assert_eq!(entry.next().map(|e| *e.value()), Some("only"));
        assert_eq!(entry.previous().map(|e| e.id()), Some(entry.id()));
    }

    #[test]
    fn test_remove_sole_entry_from_circular_list() {
        for case in 0..4 {
            let mut list = OrderedPlaylist::new();
            list.append("only");
            list.make_circular();

            let removed = match case {
                0 => list.remove_first(),
                1 => list.remove_last(),
                2 => list.remove_at(0),
                _ => list.remove(&"only"),
            };
            assert_eq!(removed, Some("only"));
            assert_eq!(list.len(), 0);
            assert!(list.first().is_none());
            assert!(list.last().is_none());
        }
    }

    #[test]
    fn test_mutations_preserve_circular_mode() {
        let mut list = abc();
        list.make_circular();

        list.prepend("P");
        assert_well_formed(&list);
        list.append("Q");
        assert_well_formed(&list);
        list.insert_at(2, "R");
        assert_well_formed(&list);
        list.remove_first();
        assert_well_formed(&list);
        list.remove_last();
        assert_well_formed(&list);
        list.remove_at(1);
        assert_well_formed(&list);

        assert_eq!(values(&list), vec!["A", "B", "C"]);
        assert!(list.is_circular());
    }

    #[test]
    fn test_iteration_terminates_when_circular() {
        let mut list = abc();
        list.make_circular();
        assert_eq!(list.iter().count(), 3);
        assert_eq!(list.ids().count(), 3);
    }

    #[test]
    fn test_circular_flag_survives_remove_all() {
        let mut list = abc();
        list.make_circular();
        list.remove_all();
        assert!(list.is_circular());

        list.append("D");
        list.append("E");
        assert_well_formed(&list);
        assert_eq!(list.last().unwrap().next().map(|e| *e.value()), Some("D"));
    }

    #[test]
    fn test_stale_id_does_not_resolve() {
        let mut list = OrderedPlaylist::new();
        let old = list.append(1);
        list.remove_first();
        let new = list.append(2);

        assert_ne!(old, new);
        assert!(list.value(old).is_none());
        assert!(list.remove_entry(old).is_none());
        assert_eq!(list.value(new), Some(&2));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_stale_id_after_remove_all() {
        let mut list = OrderedPlaylist::new();
        let old = list.append(1);
        list.remove_all();
        list.append(2);
        assert!(list.entry(old).is_none());
    }

    #[test]
    fn test_value_mut_and_get_mut() {
        let mut list = abc();
        if let Some(value) = list.get_mut(2) {
            *value = "Z";
        }
        let id = list.first().unwrap().id();
        if let Some(value) = list.value_mut(id) {
            *value = "Y";
        }
        assert_eq!(values(&list), vec!["Y", "B", "Z"]);
    }

    #[test]
    fn test_position_of_entry() {
        let mut list = abc();
        let id = list.get(2).unwrap().id();
        assert_eq!(list.position(id), Some(2));

        list.remove_first();
        assert_eq!(list.position(id), Some(1));
    }

    #[test]
    fn test_values_mut_touches_every_entry() {
        let mut list: OrderedPlaylist<_> = (1..=4).collect();
        list.remove_at(1);
        for value in list.values_mut() {
            *value *= 10;
        }
        assert_eq!(values(&list), vec![10, 30, 40]);
    }

    #[test]
    fn test_debug_output() {
        let list = abc();
        let text = format!("{list:?}");
        assert!(text.contains("circular: false"));
        assert!(text.contains("[\"A\", \"B\", \"C\"]"));
    }
}
