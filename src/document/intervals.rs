use super::{range::StringRange, span::Span};

/// Spans indexed by their start character.
///
/// Spans sharing a start are kept longest first, so walking a list in order
/// opens outer spans before inner ones.
#[derive(Debug, Clone, Default)]
pub struct SpanList {
    starts: Vec<Vec<Span>>,
}

impl SpanList {
    /// Empty list for a buffer of `len` characters
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            starts: vec![Vec::new(); len],
        }
    }

    /// Number of character slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Record `class_name` over `range`.
    ///
    /// A span with the same start and length absorbs the class instead of a
    /// new span being added. Empty ranges and ranges starting past the buffer
    /// are ignored.
    pub fn insert(&mut self, range: StringRange, class_name: &str, url: Option<&str>) {
        if range.is_empty() {
            return;
        }
        let Some(list) = self.starts.get_mut(range.location()) else {
            return;
        };

        if let Some(existing) = list.iter_mut().find(|s| s.range == range) {
            existing.add_class(class_name);
            if existing.url.is_none() {
                existing.url = url.map(str::to_string);
            }
            return;
        }

        let at = list
            .iter()
            .position(|s| s.range.length() < range.length())
            .unwrap_or(list.len());
        list.insert(at, Span::new(range, class_name, url.map(str::to_string)));
    }

    /// Spans starting at `index`, outermost first
    #[must_use]
    pub fn starting_at(&self, index: usize) -> &[Span] {
        self.starts.get(index).map_or(&[], Vec::as_slice)
    }

    /// Every span in start order
    pub fn iter(&self) -> impl Iterator<Item = &Span> {
        self.starts.iter().flatten()
    }
}
