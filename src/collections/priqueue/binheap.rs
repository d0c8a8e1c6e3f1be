/*
 * Copyright (c) 2022, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Binary heap with addressable elements.

use crate::collections::ItemPriQueue;

use num_traits::{FromPrimitive, ToPrimitive};

/// Data of one heap element.
struct Slot<K, V, ID> {
    /// The key associated with this element.
    key: K,
    /// The value (priority) of the element.
    value: V,
    /// Position of this element on the heap. If the element has been
    /// removed from the heap, this is the index of the next slot in the
    /// free list.
    pos: ID,
}

/// A binary min-heap with in-place value updates.
///
/// The heap maintains two mutually consistent indices: `heap` maps heap
/// positions to slot indices and each slot stores the current heap position
/// of its element. Every swap updates both directions, so an element can be
/// relocated in constant time given its slot index (the handle returned by
/// [`push`](ItemPriQueue::push)).
///
/// Slots of removed elements are chained into a free list and reused by
/// later pushes.
pub struct BinHeap<K, V, ID = u32> {
    /// The slot index of each element on the heap, in heap order.
    heap: Vec<ID>,
    /// The data slots of all elements.
    slots: Vec<Slot<K, V, ID>>,
    /// First slot of the free list.
    free: Option<ID>,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<K, V, ID> Default for BinHeap<K, V, ID> {
    fn default() -> Self {
        BinHeap {
            heap: vec![],
            slots: vec![],
            free: None,
        }
    }
}

impl<K, V, ID> BinHeap<K, V, ID>
where
    V: PartialOrd,
    ID: FromPrimitive + ToPrimitive + Copy,
{
    /// Return the slot index of the element at heap position `pos`.
    fn slot_at(&self, pos: usize) -> usize {
        self.heap[pos].to_usize().unwrap()
    }

    /// Swap the elements at heap positions `a` and `b`.
    ///
    /// Updates the stored positions of both elements.
    fn swap_pos(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        let sa = self.slot_at(a);
        let sb = self.slot_at(b);
        self.slots[sa].pos = ID::from_usize(a).unwrap();
        self.slots[sb].pos = ID::from_usize(b).unwrap();
    }

    /// Move the element at heap position `pos` up until its parent's value
    /// is not larger or the root is reached.
    fn upheap(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.slots[self.slot_at(parent)].value <= self.slots[self.slot_at(pos)].value {
                break;
            }
            self.swap_pos(pos, parent);
            pos = parent;
        }
    }

    /// Move the element at heap position `pos` down until no child has a
    /// smaller value.
    fn downheap(&mut self, mut pos: usize) {
        loop {
            let mut min = pos;
            for child in &[2 * pos + 1, 2 * pos + 2] {
                if *child < self.heap.len()
                    && self.slots[self.slot_at(*child)].value < self.slots[self.slot_at(min)].value
                {
                    min = *child;
                }
            }
            if min == pos {
                break;
            }
            self.swap_pos(pos, min);
            pos = min;
        }
    }
}

impl<K, V, ID> ItemPriQueue<K, V> for BinHeap<K, V, ID>
where
    K: Clone,
    V: PartialOrd + Clone,
    ID: FromPrimitive + ToPrimitive + Copy + Eq,
{
    type Item = ID;

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
        self.free = None;
    }

    fn push(&mut self, key: K, value: V) -> ID {
        let pos = ID::from_usize(self.heap.len()).unwrap();
        let item = if let Some(item) = self.free {
            // reuse the first slot of the free list
            let idx = item.to_usize().unwrap();
            let next = self.slots[idx].pos;
            self.free = if next == item { None } else { Some(next) };
            self.slots[idx] = Slot { key, value, pos };
            item
        } else {
            let item = ID::from_usize(self.slots.len()).unwrap();
            self.slots.push(Slot { key, value, pos });
            item
        };
        self.heap.push(item);
        self.upheap(self.heap.len() - 1);
        item
    }

    fn update(&mut self, item: &ID, value: V) -> bool {
        let idx = item.to_usize().unwrap();
        let pos = self.slots[idx].pos.to_usize().unwrap();
        debug_assert!(pos < self.heap.len() && self.heap[pos] == *item);

        if value < self.slots[idx].value {
            self.slots[idx].value = value;
            self.upheap(pos);
            true
        } else if self.slots[idx].value < value {
            self.slots[idx].value = value;
            self.downheap(pos);
            true
        } else {
            false
        }
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap_pos(0, last);
        let min_item = self.heap.pop().unwrap();
        let min_idx = min_item.to_usize().unwrap();

        // chain the freed slot into the free list (a slot links to itself
        // if it is the last one)
        self.slots[min_idx].pos = self.free.unwrap_or(min_item);
        self.free = Some(min_item);

        if !self.heap.is_empty() {
            self.downheap(0);
        }

        Some((self.slots[min_idx].key.clone(), self.slots[min_idx].value.clone()))
    }

    fn value(&self, item: &ID) -> &V {
        &self.slots[item.to_usize().unwrap()].value
    }
}

#[cfg(test)]
mod tests {
    use super::BinHeap;
    use crate::collections::ItemPriQueue;

    fn drain(heap: &mut BinHeap<char, i32>) -> Vec<(char, i32)> {
        let mut out = vec![];
        while let Some(el) = heap.pop_min() {
            out.push(el);
        }
        out
    }

    #[test]
    fn test_pop_in_order() {
        let mut heap = BinHeap::new();
        for &(k, v) in &[('d', 40), ('a', 10), ('e', 50), ('c', 30), ('b', 20)] {
            heap.push(k, v);
        }

        assert_eq!(heap.len(), 5);
        assert_eq!(
            drain(&mut heap),
            vec![('a', 10), ('b', 20), ('c', 30), ('d', 40), ('e', 50)]
        );
        assert!(heap.is_empty());
        assert_eq!(heap.pop_min(), None);
    }

    #[test]
    fn test_update_decrease() {
        let mut heap = BinHeap::new();
        heap.push('a', 10);
        heap.push('b', 20);
        let c = heap.push('c', 30);

        assert!(heap.update(&c, 5));
        assert_eq!(*heap.value(&c), 5);
        assert_eq!(drain(&mut heap), vec![('c', 5), ('a', 10), ('b', 20)]);
    }

    #[test]
    fn test_update_increase() {
        let mut heap = BinHeap::new();
        let a = heap.push('a', 10);
        heap.push('b', 20);
        heap.push('c', 30);

        assert!(heap.update(&a, 25));
        assert_eq!(drain(&mut heap), vec![('b', 20), ('a', 25), ('c', 30)]);
    }

    #[test]
    fn test_update_same_value() {
        let mut heap = BinHeap::new();
        let a = heap.push('a', 10);

        assert!(!heap.update(&a, 10));
        assert_eq!(drain(&mut heap), vec![('a', 10)]);
    }

    #[test]
    fn test_slot_reuse() {
        let mut heap = BinHeap::new();
        heap.push('a', 10);
        heap.push('b', 20);
        assert_eq!(heap.pop_min(), Some(('a', 10)));

        let c = heap.push('c', 5);
        let d = heap.push('d', 15);
        assert_eq!(heap.len(), 3);

        // the handles must stay usable after the slots have been reshuffled
        assert!(heap.update(&c, 25));
        assert!(heap.update(&d, 1));
        assert_eq!(drain(&mut heap), vec![('d', 1), ('b', 20), ('c', 25)]);
    }

    #[test]
    fn test_heap_invariant_under_mixed_updates() {
        let mut heap = BinHeap::new();
        let items: Vec<_> = (0..16).map(|i| heap.push(i, (i * 7 + 3) % 16)).collect();

        for (i, item) in items.iter().enumerate() {
            heap.update(item, ((i * 11 + 5) % 16) as i32);
        }

        let popped = {
            let mut out = vec![];
            while let Some((_, v)) = heap.pop_min() {
                out.push(v);
            }
            out
        };
        assert_eq!(popped.len(), 16);
        assert!(popped.windows(2).all(|w| w[0] <= w[1]));
    }
}
