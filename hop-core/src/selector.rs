use unicode_segmentation::UnicodeSegmentation;

/// Input events the engine understands. The TUI layer is responsible for
/// translating raw terminal input into these; `Resize` carries the number
/// of list rows that fit on screen, not the raw terminal height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    Insert(char),
    Backspace,
    Resize { page_size: usize },
}

/// Outcome of processing one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Confirmed(String),
    Cancelled,
}

/// Interactive branch selection state: the candidate list, the live
/// filter, the cursor, and the scrolling viewport. All mutation goes
/// through [`Selector::handle`], which applies one transition and then a
/// single normalization pass, so the invariants (cursor in bounds,
/// viewport contains cursor, viewport width bounded by the page size)
/// hold between any two events.
#[derive(Debug, Clone)]
pub struct Selector {
    candidates: Vec<String>,
    filter: String,
    /// Indices into `candidates`, in candidate order.
    filtered: Vec<usize>,
    cursor: usize,
    visible_start: usize,
    visible_end: usize,
    page_size: usize,
}

impl Selector {
    /// Create a selector over a non-empty candidate list. An empty list
    /// is the caller's "no branches found" case and never reaches the
    /// engine.
    pub fn new(candidates: Vec<String>) -> Self {
        let len = candidates.len();
        Self {
            candidates,
            filter: String::new(),
            filtered: (0..len).collect(),
            cursor: 0,
            visible_start: 0,
            visible_end: len,
            page_size: len.max(1),
        }
    }

    pub fn handle(&mut self, event: SelectorEvent) -> Step {
        let step = self.apply(event);
        self.normalize();
        step
    }

    fn apply(&mut self, event: SelectorEvent) -> Step {
        match event {
            SelectorEvent::Cancel => return Step::Cancelled,
            SelectorEvent::Confirm => {
                // Confirming with nothing to confirm is a cancellation.
                return match self.filtered.get(self.cursor) {
                    Some(&idx) => Step::Confirmed(self.candidates[idx].clone()),
                    None => Step::Cancelled,
                };
            }
            SelectorEvent::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
                if self.cursor < self.visible_start {
                    self.visible_start = self.cursor;
                    self.visible_end =
                        (self.visible_start + self.page_size).min(self.filtered.len());
                }
            }
            SelectorEvent::MoveDown => {
                if !self.filtered.is_empty() {
                    self.cursor = (self.cursor + 1).min(self.filtered.len() - 1);
                    if self.cursor >= self.visible_end {
                        self.visible_end = self.cursor + 1;
                        self.visible_start = self.visible_end.saturating_sub(self.page_size);
                    }
                }
            }
            SelectorEvent::Resize { page_size } => {
                self.page_size = page_size.max(1);
                self.visible_start = 0;
                self.visible_end = self.page_size.min(self.filtered.len());
            }
            SelectorEvent::Insert(c) => {
                self.filter.push(c);
                self.refilter();
            }
            SelectorEvent::Backspace => {
                if let Some((idx, _)) = self.filter.grapheme_indices(true).last() {
                    self.filter.truncate(idx);
                    self.refilter();
                }
            }
        }
        Step::Continue
    }

    /// Recompute the filtered view from scratch: case-insensitive
    /// substring containment, candidate order preserved. Lists are small
    /// (17 entries in the common path), so no incremental diffing.
    fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.filtered = if needle.is_empty() {
            (0..self.candidates.len()).collect()
        } else {
            self.candidates
                .iter()
                .enumerate()
                .filter(|(_, name)| name.to_lowercase().contains(&needle))
                .map(|(i, _)| i)
                .collect()
        };
        self.cursor = 0;
    }

    /// Restore the invariants after a transition. Cursor is re-clamped
    /// before the viewport, since the viewport bounds depend on a valid
    /// cursor; the final branch slides the window so it contains the
    /// cursor even after the filter shrank the list out from under it.
    fn normalize(&mut self) {
        let len = self.filtered.len();
        if self.cursor >= len {
            self.cursor = 0;
        }
        self.visible_end = self.visible_end.min(len);
        self.visible_start = self
            .visible_start
            .min(self.visible_end.saturating_sub(self.page_size));
        if len == 0 {
            self.visible_start = 0;
            return;
        }
        if self.cursor < self.visible_start {
            self.visible_start = self.cursor;
            self.visible_end = (self.visible_start + self.page_size).min(len);
        } else if self.cursor >= self.visible_end {
            self.visible_end = self.cursor + 1;
            self.visible_start = self.visible_end.saturating_sub(self.page_size);
        }
    }

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    /// Number of candidates matching the current filter.
    pub fn match_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_count(&self) -> usize {
        self.candidates.len()
    }

    /// The rows currently inside the viewport, as `(is_cursor, name)`
    /// pairs in display order.
    pub fn visible_rows(&self) -> impl Iterator<Item = (bool, &str)> {
        self.filtered[self.visible_start..self.visible_end]
            .iter()
            .enumerate()
            .map(move |(offset, &idx)| {
                (
                    self.visible_start + offset == self.cursor,
                    self.candidates[idx].as_str(),
                )
            })
    }
}
