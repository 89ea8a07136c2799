// lib.rs - sliding-window G+T / G/T composition profiles

pub mod analysis;
pub mod composition;
pub mod error;
pub mod loader;
pub mod plot;
pub mod report;
pub mod window;

pub use analysis::{analyze, WindowConfig, WindowResult};
pub use composition::{composition, BaseCounts, Composition};
pub use error::{Error, Result};
pub use loader::{load, SeqFormat, Sequence};
pub use report::{output_stem, to_csv, write_report, OutputPaths};
pub use window::{clamp_bounds, windows, Window, Windows};
