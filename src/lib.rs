//! Atlas library exports for testing

pub mod cli;
pub mod core;
pub mod report;
pub mod source;
pub mod tui;

#[cfg(test)]
pub mod test_support;
