//! Indexed Slot Cache Module
//!
//! Fixed-capacity storage addressed by explicit slot index.

use std::fmt;

use tracing::debug;

use crate::error::{CacheError, Result};

// == Indexed Slot Cache ==
/// Fixed-capacity cache storing values at caller-chosen slots.
///
/// Storage is allocated once at construction and never resized:
/// - Every slot is either empty or holds exactly one value
/// - Valid indices are `0..capacity`
/// - By-value operations use `PartialEq`, so equal values are interchangeable
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedSlotCache<T> {
    /// Slot storage, length == capacity
    slots: Box<[Option<T>]>,
}

impl<T> IndexedSlotCache<T> {
    // == Constructor ==
    /// Creates a cache with `capacity` empty slots.
    ///
    /// A capacity of 0 is allowed; every index is then out of range.
    pub fn new(capacity: usize) -> Self {
        let slots = (0..capacity).map(|_| None).collect::<Vec<_>>();
        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    // == Capacity ==
    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(CacheError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                capacity: self.slots.len(),
            })
        }
    }

    // == Add ==
    /// Stores `value` at `index`, overwriting any occupant.
    ///
    /// Returns the displaced occupant, if any. An out-of-range index fails
    /// with `IndexOutOfRange` and leaves the cache unchanged.
    pub fn add(&mut self, value: T, index: usize) -> Result<Option<T>> {
        if let Err(err) = self.check_index(index) {
            debug!("Rejected add: {}", err);
            return Err(err);
        }
        Ok(self.slots[index].replace(value))
    }

    // == Get ==
    /// Returns the value stored at `index`, or `None` if the slot is empty.
    ///
    /// # Errors
    /// `IndexOutOfRange` when `index >= capacity`.
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        self.check_index(index)?;
        Ok(self.slots[index].as_ref())
    }

    // == Is Slot Occupied ==
    /// Returns true iff the slot at `index` holds a value.
    ///
    /// Out-of-range indices read as not occupied.
    pub fn is_slot_occupied(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    // == Clear ==
    /// Empties every slot. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| None);
    }

    // == Shift Elements Left ==
    /// Empties the slot at `index` and leaves every other slot untouched.
    ///
    /// Despite the name nothing is relocated; see [`compact_left`] for the
    /// variant that actually moves later elements down. Out-of-range indices
    /// are a no-op.
    ///
    /// [`compact_left`]: IndexedSlotCache::compact_left
    pub fn shift_elements_left(&mut self, index: usize) -> Option<T> {
        match self.slots.get_mut(index) {
            Some(slot) => slot.take(),
            None => {
                debug!(
                    "shift_elements_left ignored: index {} out of range for capacity {}",
                    index,
                    self.slots.len()
                );
                None
            }
        }
    }

    // == Compact Left ==
    /// Removes the value at `index` and moves every later slot one position
    /// left. The last slot becomes empty. Out-of-range indices are a no-op.
    pub fn compact_left(&mut self, index: usize) -> Option<T> {
        if index >= self.slots.len() {
            debug!(
                "compact_left ignored: index {} out of range for capacity {}",
                index,
                self.slots.len()
            );
            return None;
        }
        let removed = self.slots[index].take();
        // The emptied slot rotates to the end.
        self.slots[index..].rotate_left(1);
        removed
    }

    // == Occupied Count ==
    /// Returns the number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    // == Is Empty ==
    /// Returns true if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Raw view of every slot in index order.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Iterates occupied slots as `(index, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }
}

impl<T: PartialEq> IndexedSlotCache<T> {
    // == Position Of ==
    /// Returns the lowest index whose occupant equals `value`.
    pub fn position_of(&self, value: &T) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
    }

    // == Contains Value ==
    /// Returns true iff any occupied slot equals `value`.
    pub fn contains_value(&self, value: &T) -> bool {
        self.position_of(value).is_some()
    }

    // == Delete ==
    /// Empties the lowest-indexed slot whose occupant equals `value`.
    ///
    /// Returns the cleared index, or `None` when nothing matched. Later slots
    /// are not relocated.
    pub fn delete(&mut self, value: &T) -> Option<usize> {
        let index = self.position_of(value);
        match index {
            Some(index) => self.slots[index] = None,
            None => debug!("delete ignored: no matching value"),
        }
        index
    }
}

impl<T: fmt::Display> IndexedSlotCache<T> {
    // == Print Cache ==
    /// Writes a human-readable dump of every slot to stdout.
    ///
    /// Goes to stdout on purpose, not through `tracing`: it is a direct
    /// console dump. Services log the `Display` form instead.
    pub fn print_cache(&self) {
        println!("{}", self);
    }
}

impl<T: fmt::Display> fmt::Display for IndexedSlotCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexedSlotCache(capacity={})[", self.slots.len())?;
        for (index, slot) in self.slots.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(value) => write!(f, "{}: {}", index, value)?,
                None => write!(f, "{}: <empty>", index)?,
            }
        }
        write!(f, "]")
    }
}
