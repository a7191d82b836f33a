//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod info;
mod init;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use info::{InfoReport, Stats};
pub use init::InitReport;
pub use output::{Report, TerminalOutput};
