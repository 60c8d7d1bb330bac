use alloc::boxed::Box;
use core::fmt::Debug;

/// A singly linked list used as a collision chain.
///
/// Each bucket of the [`HashTable`](crate::HashTable) owns one of these.
/// Entries keep their insertion order: `push_back` walks to the tail, and
/// removal is positional. The list caches its length so `len` is O(1).
///
/// # Examples
///
/// ```rust
/// use chain_hash::LinkedList;
///
/// let mut chain = LinkedList::new();
/// chain.push_back("a");
/// chain.push_back("b");
///
/// assert_eq!(chain.len(), 2);
/// assert_eq!(chain.position(|&e| e == "b"), Some(1));
/// assert_eq!(chain.remove_at(0), Some("a"));
/// assert_eq!(chain.len(), 1);
/// ```
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Returns the number of entries in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `value` at the tail of the list.
    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Returns the position of the first entry matching `pred`, or `None` if
    /// no entry matches.
    pub fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    /// Removes and returns the entry at `index`.
    ///
    /// Returns `None` when `index` is past the end of the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::LinkedList;
    ///
    /// let mut chain = LinkedList::new();
    /// chain.push_back(1);
    /// chain.push_back(2);
    ///
    /// assert_eq!(chain.remove_at(1), Some(2));
    /// assert_eq!(chain.remove_at(1), None);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return None,
            }
        }

        let mut node = cursor.take()?;
        *cursor = node.next.take();
        self.len -= 1;
        Some(node.value)
    }

    /// Returns an iterator over the entries in chain order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Returns an iterator yielding mutable references in chain order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut cloned = LinkedList::new();
        let mut tail = &mut cloned.head;
        for value in self.iter() {
            let node = Box::new(Node {
                value: value.clone(),
                next: None,
            });
            tail = &mut tail.insert(node).next;
        }
        cloned.len = self.len;
        cloned
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for LinkedList<T> {
    // Unlink iteratively so dropping a long chain cannot overflow the stack.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Iter { next: None }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

/// A mutably borrowing iterator over a [`LinkedList`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref_mut();
        Some(&mut node.value)
    }
}
