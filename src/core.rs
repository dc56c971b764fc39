use alloc::boxed::Box;
use core::iter;
use core::mem;

use crate::config::SequenceConfig;
use crate::error::SequenceError;

/// A growable, bounds-checked sequence backed by a single owned buffer
///
/// Slots `[0, len)` always hold an element, slots `[len, capacity)` are empty.
#[derive(Clone)]
pub struct GrowableSequence<T> {
    slots: Box<[Option<T>]>,
    count: usize,
    config: SequenceConfig,
}

fn allocate_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> GrowableSequence<T> {
    /// Creates an empty sequence with the default baseline capacity (16).
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(SequenceConfig::new())
    }

    /// Creates an empty sequence with a custom growth configuration.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InvalidConfiguration` if the config does not
    /// pass `SequenceConfig::validate`.
    pub fn with_config(config: SequenceConfig) -> Result<Self, SequenceError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: SequenceConfig) -> Self {
        Self {
            slots: allocate_slots(config.baseline_capacity),
            count: 0,
            config,
        }
    }

    /// Creates a sequence holding `items` in order.
    ///
    /// Capacity stays at the baseline unless more items than the baseline
    /// are supplied.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut sequence = Self::new();
        sequence.add_range(items);
        sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots in the backing buffer. Never less than `len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    fn out_of_range(&self, index: usize) -> SequenceError {
        SequenceError::IndexOutOfRange {
            index,
            length: self.count,
        }
    }

    fn check_bounds(&self, index: usize) -> Result<(), SequenceError> {
        if index >= self.count {
            Err(self.out_of_range(index))
        } else {
            Ok(())
        }
    }

    /// Reallocates so that `required` elements fit, following the growth
    /// policy. Live elements are moved, not cloned.
    fn grow_for(&mut self, required: usize) {
        let current = self.capacity();
        let target = self.config.grown_capacity(current, required);
        if target == current {
            return;
        }

        log::debug!(
            "growing sequence buffer from {current} to {target} slots ({} live)",
            self.count
        );
        let mut slots = allocate_slots(target);
        for (moved, old) in slots.iter_mut().zip(self.slots[..self.count].iter_mut()) {
            *moved = old.take();
        }
        self.slots = slots;
    }

    /// Grows the buffer so that at least `additional` more elements fit
    /// without another reallocation.
    pub fn reserve(&mut self, additional: usize) {
        self.grow_for(self.count.saturating_add(additional));
    }

    pub(crate) fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.count].iter().flatten()
    }

    /// Gets the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.check_bounds(index)?;
        self.slots[index]
            .as_ref()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Gets a mutable reference to the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::IndexOutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        self.check_bounds(index)?;
        let error = self.out_of_range(index);
        self.slots[index].as_mut().ok_or(error)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::IndexOutOfRange` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, SequenceError> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Appends an element, growing the buffer first when it is full.
    pub fn add(&mut self, item: T) {
        self.grow_for(self.count + 1);
        self.slots[self.count] = Some(item);
        self.count += 1;
    }

    /// Appends all `items` in order.
    ///
    /// The buffer is grown once for the iterator's lower size bound, so
    /// exact-size sources never reallocate more than once.
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let items = items.into_iter();
        let (lower, _) = items.size_hint();
        self.reserve(lower);
        for item in items {
            self.add(item);
        }
    }

    /// Inserts `item` at `index`, shifting later elements towards the end.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::IndexOutOfRange` if `index > len()`.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<(), SequenceError> {
        if index > self.count {
            return Err(self.out_of_range(index));
        }

        self.grow_for(self.count + 1);
        self.slots[self.count] = Some(item);
        self.slots[index..=self.count].rotate_right(1);
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// towards the start. Capacity is kept.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::IndexOutOfRange` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        self.check_bounds(index)?;
        let removed = self.slots[index]
            .take()
            .ok_or_else(|| self.out_of_range(index))?;

        // The emptied slot travels to the end of the live range.
        self.slots[index..self.count].rotate_left(1);
        self.count -= 1;
        Ok(removed)
    }

    /// Swaps the elements at `first` and `second`.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::IndexOutOfRange` if either index is `>= len()`.
    pub fn exchange(&mut self, first: usize, second: usize) -> Result<(), SequenceError> {
        self.check_bounds(first)?;
        self.check_bounds(second)?;
        self.slots.swap(first, second);
        Ok(())
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        log::trace!(
            "clearing {} elements, keeping {} slots",
            self.count,
            self.capacity()
        );
        for slot in &mut self.slots[..self.count] {
            *slot = None;
        }
        self.count = 0;
    }
}
