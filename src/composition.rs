use crate::error::{Error, Result};

/// Per-base tally of one window. Lower- and upper-case bases count the same;
/// anything outside ACGT (N, IUPAC codes, gaps) lands in `other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    pub other: usize,
}

impl BaseCounts {
    pub fn from_bases(seq: &[u8]) -> Self {
        let mut counts = BaseCounts::default();
        for b in seq {
            match b.to_ascii_uppercase() {
                b'A' => counts.a += 1,
                b'C' => counts.c += 1,
                b'G' => counts.g += 1,
                b'T' => counts.t += 1,
                _ => counts.other += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t + self.other
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    pub counts: BaseCounts,
    /// (G + T) / window length, in `[0, 1]`
    pub gt_proportion: f64,
    /// G / T, `None` when the window holds no T
    pub g_to_t_ratio: Option<f64>,
}

/// G+T proportion and G/T ratio of one window.
///
/// Fails with [`Error::DegenerateWindow`] on an empty slice; `start` is only
/// used to report where that happened.
pub fn composition(window: &[u8], start: usize) -> Result<Composition> {
    if window.is_empty() {
        return Err(Error::DegenerateWindow { start });
    }
    let counts = BaseCounts::from_bases(window);
    let gt_proportion = (counts.g + counts.t) as f64 / window.len() as f64;
    let g_to_t_ratio = if counts.t > 0 {
        Some(counts.g as f64 / counts.t as f64)
    } else {
        None
    };
    Ok(Composition {
        counts,
        gt_proportion,
        g_to_t_ratio,
    })
}
