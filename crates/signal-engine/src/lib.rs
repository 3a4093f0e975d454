pub mod aggregator;
pub mod composer;
pub mod config;
pub mod indicators;
pub mod patterns;

#[cfg(test)]
mod patterns_tests;

pub use aggregator::*;
pub use composer::*;
pub use config::*;
pub use indicators::*;
pub use patterns::*;
