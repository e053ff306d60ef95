use smallvec::SmallVec;

use super::range::StringRange;
use crate::error::{RichTextError, RichTextResult};

/// Identifier of an interned attribute set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(pub(crate) u32);

impl StyleId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Classes active on one character, in slot order
pub type Slots = SmallVec<[StyleId; 4]>;

/// Per-character class slots with a fixed capacity.
#[derive(Debug, Clone)]
pub struct ClassTable {
    slots: Vec<Slots>,
    capacity: usize,
}

impl ClassTable {
    #[must_use]
    pub fn new(len: usize, capacity: usize) -> Self {
        Self {
            slots: vec![Slots::new(); len],
            capacity,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Put `style` in the next free slot of every character in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`RichTextError::TooMuchStyle`] naming the first full character;
    /// the table is left untouched in that case.
    pub fn assign(&mut self, style: StyleId, range: StringRange) -> RichTextResult<()> {
        let range = range.fit_in(self.slots.len()).as_range();

        if let Some(offset) = self.slots[range.clone()]
            .iter()
            .position(|s| s.len() >= self.capacity)
        {
            return Err(RichTextError::too_much_style(
                range.start + offset,
                self.capacity,
            ));
        }

        for slots in &mut self.slots[range] {
            slots.push(style);
        }
        Ok(())
    }

    #[must_use]
    pub fn at(&self, index: usize) -> &[StyleId] {
        self.slots.get(index).map_or(&[], |s| s.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &[StyleId]> {
        self.slots.iter().map(|s| s.as_slice())
    }
}
