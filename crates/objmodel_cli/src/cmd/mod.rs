/// Strict single-selector evaluation command.
pub mod eval;
/// Tolerant status report command.
pub mod report;
/// Schema table listing command.
pub mod tables;

mod util;
