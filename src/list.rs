/*
A singly linked list that owns its nodes through `Option<Box<Node<T>>>` links.

Every node is owned by exactly one link: the list's `head` or the `next` of the
node before it. Unlinking a node is always `take()` on the owning link followed by
reassigning that link to the removed node's `next`, so the chain is repaired before
the removed `Box` is dropped.

`size` is cached and must always equal the number of nodes reachable from `head`.
*/

use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};

pub struct List<T> {
    head: Link<T>,
    size: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { value, next })
    }
}

fn reject(op: &str, err: Error) -> Error {
    debug!("{op} rejected: {err}");
    err
}

impl<T> List<T> {
    pub fn new() -> Self {
        List {
            head: None,
            size: 0,
        }
    }

    /// Number of elements, read from the cached size.
    pub fn length(&self) -> usize {
        self.size
    }

    pub fn empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every node and leaves the list empty.
    pub fn clear(&mut self) {
        let released = self.size;
        self.release();
        trace!("clear: released {released} nodes");
    }

    pub fn front_ref(&self) -> Result<&T> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or_else(|| reject("front", Error::EmptyContainer))
    }

    pub fn last_ref(&self) -> Result<&T> {
        if self.empty() {
            return Err(reject("last", Error::EmptyContainer));
        }

        self.node(self.size - 1)
            .map(|node| &node.value)
            .ok_or_else(|| reject("last", Error::EmptyContainer))
    }

    /// Borrows the element at `index`, walking `index` links from the head.
    pub fn get_ref(&self, index: usize) -> Result<&T> {
        let out_of_range = || {
            reject(
                "get",
                Error::IndexOutOfRange {
                    index,
                    size: self.size,
                },
            )
        };

        if index >= self.size {
            return Err(out_of_range());
        }

        self.node(index)
            .map(|node| &node.value)
            .ok_or_else(out_of_range)
    }

    pub fn push_front(&mut self, value: T) {
        self.head = Some(Node::new(value, self.head.take()));
        self.size += 1;
        trace!("push_front: size={}", self.size);
    }

    /// Appends after the current tail. The tail is found by walking the chain.
    pub fn push_back(&mut self, value: T) {
        if self.empty() {
            self.push_front(value);
            return;
        }

        *self.tail_link() = Some(Node::new(value, None));
        self.size += 1;
        trace!("push_back: size={}", self.size);
    }

    /// Inserts `value` so that it becomes element `index`. Elements previously at
    /// `index` and after move one position towards the tail.
    ///
    /// `index == length()` is accepted and appends.
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<()> {
        let size = self.size;
        if index > size {
            return Err(reject("insert_at", Error::IndexOutOfRange { index, size }));
        }

        if index == 0 {
            self.push_front(value);
            return Ok(());
        }

        match self.link(index) {
            Some(link) => {
                let next = link.take();
                *link = Some(Node::new(value, next));
            }
            None => return Err(reject("insert_at", Error::IndexOutOfRange { index, size })),
        }

        self.size += 1;
        trace!("insert_at({index}): size={}", self.size);
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<T> {
        let value = self
            .head
            .take()
            .map(|node| {
                self.head = node.next;
                self.size -= 1;
                node.value
            })
            .ok_or_else(|| reject("pop_front", Error::EmptyContainer))?;

        trace!("pop_front: size={}", self.size);
        Ok(value)
    }

    pub fn pop_back(&mut self) -> Result<T> {
        match self.size {
            0 => Err(reject("pop_back", Error::EmptyContainer)),
            1 => self.pop_front(),
            size => {
                let value = self
                    .unlink(size - 1)
                    .ok_or_else(|| reject("pop_back", Error::EmptyContainer))?;
                trace!("pop_back: size={}", self.size);
                Ok(value)
            }
        }
    }

    /// Removes and returns element `index`. Elements after it move one position
    /// towards the head.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let size = self.size;
        if size == 0 {
            return Err(reject("remove_at", Error::EmptyContainer));
        }
        if index >= size {
            return Err(reject("remove_at", Error::IndexOutOfRange { index, size }));
        }

        if index == 0 {
            return self.pop_front();
        }

        let value = self
            .unlink(index)
            .ok_or_else(|| reject("remove_at", Error::IndexOutOfRange { index, size }))?;
        trace!("remove_at({index}): size={}", self.size);
        Ok(value)
    }

    // node holding element `index`
    fn node(&self, index: usize) -> Option<&Node<T>> {
        let mut cur = self.head.as_deref();
        for _ in 0..index {
            cur = cur?.next.as_deref();
        }
        cur
    }

    // link that owns element `index`; `index == size` yields the empty link past the tail
    fn link(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    fn unlink(&mut self, index: usize) -> Option<T> {
        let link = self.link(index)?;
        let mut node = link.take()?;
        *link = node.next.take();
        self.size -= 1;
        Some(node.value)
    }

    // iterative so a long chain is not dropped recursively
    fn release(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.size = 0;
    }
}

impl<T: PartialEq> List<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Position of the first element equal to `value`, or `None` if there is none.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let mut cur = self.head.as_deref();
        let mut index = 0;
        while let Some(node) = cur {
            if node.value == *value {
                return Some(index);
            }
            cur = node.next.as_deref();
            index += 1;
        }
        None
    }
}

impl<T: Clone> List<T> {
    pub fn front(&self) -> Result<T> {
        self.front_ref().cloned()
    }

    pub fn last(&self) -> Result<T> {
        self.last_ref().cloned()
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.get_ref(index).cloned()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            write!(f, "{}", node.value)?;
            if node.next.is_some() {
                write!(f, ", ")?;
            }
            cur = node.next.as_deref();
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = Vec::with_capacity(self.size);
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            elements.push(&node.value);
            cur = node.next.as_deref();
        }

        f.debug_struct("List")
            .field("size", &self.size)
            .field("elements", &elements)
            .finish()
    }
}
