//! Virtual infinite-position model.
//!
//! The backing list is addressed with indices far from both edges so that a
//! slider can wrap in either direction without special-casing the first or
//! last item. The real item is always `virtual mod real_count`.

use crate::error::SliderError;

/// Number of "laps" placed before the anchor of the first real item.
pub const MULTIPLIER: usize = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionModel {
    virtual_index: i64,
}

impl PositionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current unbounded index.
    pub fn virtual_index(&self) -> i64 {
        self.virtual_index
    }

    /// Jump to real item `position`, anchored `MULTIPLIER` laps into the list.
    pub fn set_absolute(&mut self, position: i64, real_count: usize) -> Result<(), SliderError> {
        if position < 0 || position >= real_count as i64 {
            return Err(SliderError::out_of_range(position, real_count));
        }
        self.virtual_index = anchor(real_count) + position;
        Ok(())
    }

    /// Adopt an index reported by the list, e.g. after a snap settled.
    pub fn set_virtual(&mut self, virtual_index: i64) {
        self.virtual_index = virtual_index;
    }

    pub fn advance(&mut self) {
        self.virtual_index += 1;
    }

    pub fn retreat(&mut self) {
        self.virtual_index -= 1;
    }

    pub fn real_position(&self, real_count: usize) -> Result<usize, SliderError> {
        if real_count == 0 {
            return Err(SliderError::IllegalState {
                reason: "slider has no items",
            });
        }
        Ok(self.virtual_index.rem_euclid(real_count as i64) as usize)
    }

    /// List index to scroll to for the current position.
    ///
    /// An index outside `0..2 * real_count * MULTIPLIER` is re-anchored onto
    /// the same real item first, so the returned index is always addressable.
    /// This covers long forward runs as well as a list that shrank.
    pub fn scroll_target(&mut self, real_count: usize) -> usize {
        if self.virtual_index < 0 || self.virtual_index >= 2 * anchor(real_count) {
            if let Ok(real) = self.real_position(real_count) {
                log::debug!(
                    "virtual index {} left the list, re-anchoring on item {real}",
                    self.virtual_index
                );
                self.virtual_index = anchor(real_count) + real as i64;
            } else {
                self.virtual_index = 0;
            }
        }
        self.virtual_index as usize
    }
}

fn anchor(real_count: usize) -> i64 {
    (real_count * MULTIPLIER) as i64
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod tests;
