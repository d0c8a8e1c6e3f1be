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

mod binheap;
pub use self::binheap::BinHeap;

/// A priority queue over (key, value) pairs with addressable items.
///
/// Every pushed element is identified by a handle that stays valid while the
/// element is on the queue, so its priority can be changed in place later.
pub trait ItemPriQueue<K, V> {
    /// Handle for an item in the queue.
    type Item;

    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of elements in the queue.
    fn len(&self) -> usize;

    /// Remove all elements from the queue.
    fn clear(&mut self);

    /// Push the element with given `key` and `value` onto the queue.
    ///
    /// Return a handle referencing the element. That handle can be used in a
    /// subsequent call to `update`.
    fn push(&mut self, key: K, value: V) -> Self::Item;

    /// Change the value of some item in the queue.
    ///
    /// The item is moved up or down as implied by its new value. Returns
    /// `false` if the value is unchanged.
    ///
    /// The item must currently be contained in the queue.
    fn update(&mut self, item: &Self::Item, value: V) -> bool;

    /// Remove and return the element with the smallest value from the queue
    /// or `None` if the queue is empty.
    ///
    /// The handle of the removed element becomes invalid.
    fn pop_min(&mut self) -> Option<(K, V)>;

    /// Return the current value associated with some item in the queue.
    fn value(&self, item: &Self::Item) -> &V;
}

impl<'a, P, K, V> ItemPriQueue<K, V> for &'a mut P
where
    P: ItemPriQueue<K, V>,
{
    type Item = P::Item;

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn push(&mut self, key: K, value: V) -> Self::Item {
        (**self).push(key, value)
    }

    fn update(&mut self, item: &Self::Item, value: V) -> bool {
        (**self).update(item, value)
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        (**self).pop_min()
    }

    fn value(&self, item: &Self::Item) -> &V {
        (**self).value(item)
    }
}
