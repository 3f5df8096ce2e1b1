//! Progressive "load more" disclosure.
//!
//! Client-side only: the full list is already in memory, the counter just
//! decides how much of it is shown.

/// Items shown before the first "load more".
pub const DEFAULT_REVEAL_INITIAL: usize = 6;
/// Items added by each "load more".
pub const DEFAULT_REVEAL_STEP: usize = 6;

/// Reveal counter. `visible_count` grows without an upper cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    visible_count: usize,
    step: usize,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_INITIAL, DEFAULT_REVEAL_STEP)
    }
}

impl Reveal {
    pub fn new(initial: usize, step: usize) -> Self {
        Self {
            visible_count: initial,
            step,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Adds one step and returns the new count.
    pub fn load_more(&mut self) -> usize {
        self.visible_count = self.visible_count.saturating_add(self.step);
        self.visible_count
    }

    /// Leading slice of `items` currently shown.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..items.len().min(self.visible_count)]
    }

    /// Whether the "load more" control should be offered for `total` items.
    pub fn has_more(&self, total: usize) -> bool {
        self.visible_count < total
    }

    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.visible_count)
    }
}

#[cfg(test)]
mod tests {
    use super::Reveal;

    #[test]
    fn zero_step_never_advances() {
        let mut reveal = Reveal::new(2, 0);
        assert_eq!(reveal.load_more(), 2);
        assert_eq!(reveal.visible(&[1, 2, 3]), &[1, 2]);
    }
}
