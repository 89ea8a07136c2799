use std::num::NonZeroUsize;

use log::debug;
use serde::Serialize;

use crate::composition::composition;
use crate::error::{Error, Result};
use crate::window::{clamp_bounds, windows};

/// Window geometry and optional analysis range.
///
/// `start`/`end` are 0-based, half-open, and clamped to the sequence only when
/// [`analyze`] runs, since the sequence length is not known before loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    window: NonZeroUsize,
    step: NonZeroUsize,
    start: Option<usize>,
    end: Option<usize>,
}

impl WindowConfig {
    pub fn new(window: usize, step: usize, start: Option<usize>, end: Option<usize>) -> Result<Self> {
        let window = NonZeroUsize::new(window)
            .ok_or_else(|| Error::InvalidParameter("window size must be at least 1".into()))?;
        let step = NonZeroUsize::new(step)
            .ok_or_else(|| Error::InvalidParameter("step size must be at least 1".into()))?;
        if let (Some(s), Some(e)) = (start, end) {
            if s >= e {
                return Err(Error::InvalidParameter(format!(
                    "start ({s}) must be less than end ({e})"
                )));
            }
        }
        Ok(WindowConfig {
            window,
            step,
            start,
            end,
        })
    }

    /// Same as [`WindowConfig::new`] but with bounds as a user types them:
    /// 1-based, both ends inclusive.
    pub fn with_one_based_bounds(
        window: usize,
        step: usize,
        start: Option<usize>,
        end: Option<usize>,
    ) -> Result<Self> {
        let start = match start {
            Some(0) => {
                return Err(Error::InvalidParameter(
                    "start position is 1-based and must be at least 1".into(),
                ))
            }
            Some(s) => Some(s - 1),
            None => None,
        };
        if end == Some(0) {
            return Err(Error::InvalidParameter(
                "end position is 1-based and must be at least 1".into(),
            ));
        }
        Self::new(window, step, start, end)
    }

    pub fn window(&self) -> usize {
        self.window.get()
    }

    pub fn step(&self) -> usize {
        self.step.get()
    }

    pub fn start(&self) -> Option<usize> {
        self.start
    }

    pub fn end(&self) -> Option<usize> {
        self.end
    }
}

/// One output row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowResult {
    /// 1-based start of the window
    pub position: usize,
    pub gt_proportion: f64,
    /// Undefined (`None`) when the window contains no T
    pub g_to_t_ratio: Option<f64>,
}

/// Run the sliding window over `seq` and collect one row per window, in
/// ascending position order.
///
/// An empty result is not an error: it just means no full window fits in the
/// range.
pub fn analyze(seq: &[u8], config: &WindowConfig) -> Result<Vec<WindowResult>> {
    let (start, end) = clamp_bounds(seq.len(), config.start, config.end);
    if start >= end {
        return Err(Error::InvalidParameter(format!(
            "empty analysis range [{start}, {end}) for a sequence of {} bases",
            seq.len()
        )));
    }
    if config.start.is_some_and(|s| s > start) || config.end.is_some_and(|e| e > end) {
        debug!("bounds clamped to [{start}, {end}) for a sequence of {} bases", seq.len());
    }

    windows(seq.len(), config.window, config.step, Some(start), Some(end))
        .map(|w| -> Result<WindowResult> {
            let comp = composition(&seq[w.clone()], w.start)?;
            Ok(WindowResult {
                position: w.start + 1,
                gt_proportion: comp.gt_proportion,
                g_to_t_ratio: comp.g_to_t_ratio,
            })
        })
        .collect()
}
