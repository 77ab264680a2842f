//! Application layer: turns a resolved animation spec into encoded output.
//!
//! Controllers drive the domain actions in `core/` and hand the results to
//! a presenter through the ports defined in [`ports`].

pub mod cli;
pub mod ports;
