use std::fmt;
use std::ops::Index;

use tracing::{debug, trace};

use crate::error::{ContainerError, Result};

// Slot index of a node in the arena, or None for the end of the chain.
type Link = Option<usize>;

#[derive(Clone)]
struct Node<T> {
    elem: T,
    next: Link,
}

/// An ordered sequence built from a singly linked chain of nodes.
///
/// Nodes live in the slots of an arena and link to their successor by slot
/// index. A removed node's slot goes on a free list and is handed out again by
/// the next `add`, so appending and removing the head are both O(1) while
/// positional access walks the chain from the head.
///
/// Any element type works, `Option<U>` included: `None` is stored, compared
/// and rendered like every other value.
#[derive(Clone)]
pub struct Container<T> {
    slots: Vec<Option<Node<T>>>,
    free_list: Vec<usize>,
    head: Link,
    tail: Link,
    size: usize,
}

impl<T> Container<T> {
    pub fn new() -> Self {
        Container {
            slots: Vec::new(),
            free_list: Vec::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Appends `elem` after the current tail.
    ///
    /// There is no capacity limit, so this always returns `true`.
    pub fn add(&mut self, elem: T) -> bool {
        let slot = self.allocate(Node { elem, next: None });

        match self.tail {
            Some(tail) => {
                if let Some(node) = self.slots[tail].as_mut() {
                    node.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }

        self.tail = Some(slot);
        self.size += 1;

        trace!(slot, size = self.size, "appended node");
        true
    }

    /// Returns the element at `index`, walking the chain from the head.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_bounds(index)?;

        self.iter()
            .nth(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Unlinks the node at `index` and returns its element.
    ///
    /// Nothing changes when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_bounds(index)?;

        let prev = match index {
            0 => None,
            _ => Some(
                self.slot_at(index - 1)
                    .ok_or_else(|| self.out_of_range(index))?,
            ),
        };
        let target = match prev {
            None => self.head,
            Some(prev) => self.next_of(prev),
        }
        .ok_or_else(|| self.out_of_range(index))?;

        let node = self.slots[target]
            .take()
            .ok_or_else(|| self.out_of_range(index))?;

        match prev {
            None => {
                self.head = node.next;
                if self.head.is_none() {
                    self.tail = None;
                }
            }
            Some(prev) => {
                if let Some(prev_node) = self.slots[prev].as_mut() {
                    prev_node.next = node.next;
                }
                if node.next.is_none() {
                    self.tail = Some(prev);
                }
            }
        }

        self.free_list.push(target);
        self.size -= 1;

        trace!(index, slot = target, size = self.size, "removed node");
        Ok(node.elem)
    }

    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|stored| stored == elem)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`Container::size`].
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every node at once. Clearing an empty container does nothing.
    pub fn clear(&mut self) {
        if self.size > 0 {
            trace!(size = self.size, "clearing container");
        }

        self.slots.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            next: self.head,
            remaining: self.size,
        }
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.size {
            debug!(index, size = self.size, "index out of range");
            return Err(self.out_of_range(index));
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> ContainerError {
        ContainerError::IndexOutOfRange {
            index,
            size: self.size,
        }
    }

    fn next_of(&self, slot: usize) -> Link {
        self.slots
            .get(slot)
            .and_then(Option::as_ref)
            .and_then(|node| node.next)
    }

    // Follows `position` links starting at the head.
    fn slot_at(&self, position: usize) -> Link {
        let mut current = self.head;
        for _ in 0..position {
            current = self.next_of(current?);
        }
        current
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        if let Some(slot) = self.free_list.pop() {
            self.slots[slot] = Some(node);
            slot
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }
}

impl<T: fmt::Display> Container<Option<T>> {
    /// Renders like `Display` does for other containers, showing the `None`
    /// sentinel as `None`.
    pub fn display_nullable(&self) -> DisplayNullable<'_, T> {
        DisplayNullable { container: self }
    }
}

/// Front-to-back iterator over a [`Container`].
pub struct Iter<'a, T> {
    slots: &'a [Option<Node<T>>],
    next: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        let node = slots.get(self.next?)?.as_ref()?;
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut container = Container::new();
        container.extend(iter);
        container
    }
}

impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Container<T> {}

impl<T> Index<usize> for Container<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.iter(), |f, elem| write!(f, "{elem}"))
    }
}

pub struct DisplayNullable<'a, T> {
    container: &'a Container<Option<T>>,
}

impl<T: fmt::Display> fmt::Display for DisplayNullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.container.iter(), |f, elem| match elem {
            Some(elem) => write!(f, "{elem}"),
            None => f.write_str("None"),
        })
    }
}

fn write_bracketed<I, F>(f: &mut fmt::Formatter<'_>, items: I, mut write_item: F) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    f.write_str("]")
}
