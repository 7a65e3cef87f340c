//! Capped LIFO stack that forgets its oldest entry on overflow.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// A stack holding at most `capacity` entries.
///
/// Pushing onto a full stack evicts the oldest (bottom) entry. Backed by
/// `im::Vector`, so cloning the stack is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "StackData<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct BoundedStack<T: Clone> {
    items: Vector<T>,
    capacity: usize,
}

/// Unchecked wire form of a [`BoundedStack`].
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct StackData<T: Clone> {
    items: Vector<T>,
    capacity: usize,
}

impl<T: Clone> TryFrom<StackData<T>> for BoundedStack<T> {
    type Error = ConfigError;

    fn try_from(data: StackData<T>) -> Result<Self, Self::Error> {
        if data.capacity == 0 {
            return Err(ConfigError::ZeroHistoryDepth);
        }
        if data.items.len() > data.capacity {
            return Err(ConfigError::HistoryOverflow {
                capacity: data.capacity,
                len: data.items.len(),
            });
        }
        Ok(Self {
            items: data.items,
            capacity: data.capacity,
        })
    }
}

impl<T: Clone> BoundedStack<T> {
    /// Create an empty stack.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Stack capacity must be at least 1");
        Self {
            items: Vector::new(),
            capacity,
        }
    }

    /// Push an entry on top.
    ///
    /// Returns the evicted bottom entry if the stack was already full.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.items.push_back(item);
        if self.items.len() > self.capacity {
            self.items.pop_front()
        } else {
            None
        }
    }

    /// Remove and return the top entry.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// The top entry, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of entries kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate from oldest (bottom) to newest (top).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
