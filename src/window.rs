//! Sliding window boundaries
//!
//! Every window start is derived from its index (`start + k * step`), so the
//! iterator can be cloned, reversed or re-created and always yields the same
//! positions.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Half-open `[start, end)` range of sequence positions
pub type Window = Range<usize>;

/// Clamp optional bounds to `[0, len]`, with `end` never below `start`.
pub fn clamp_bounds(len: usize, start: Option<usize>, end: Option<usize>) -> (usize, usize) {
    let start = start.unwrap_or(0).min(len);
    let end = end.unwrap_or(len).clamp(start, len);
    (start, end)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Windows {
    start: usize,
    width: usize,
    step: usize,
    front: usize,
    back: usize,
}

impl Windows {
    /// Window starting `k` steps after the range start
    fn nth_window(&self, k: usize) -> Window {
        let pos = self.start + k * self.step;
        pos..pos + self.width
    }
}

/// Windows of `width` bases every `step` bases over a sequence of length `len`,
/// restricted to the clamped `[start, end)` range.
pub fn windows(
    len: usize,
    width: NonZeroUsize,
    step: NonZeroUsize,
    start: Option<usize>,
    end: Option<usize>,
) -> Windows {
    let (start, end) = clamp_bounds(len, start, end);
    let (width, step) = (width.get(), step.get());
    let count = if end - start >= width {
        (end - start - width) / step + 1
    } else {
        0
    };
    Windows {
        start,
        width,
        step,
        front: 0,
        back: count,
    }
}

impl Iterator for Windows {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.front == self.back {
            return None;
        }
        let window = self.nth_window(self.front);
        self.front += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Windows {
    fn next_back(&mut self) -> Option<Window> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.nth_window(self.back))
    }
}

impl ExactSizeIterator for Windows {}
