pub mod aggregate;
pub mod config;
pub mod data;
pub mod domain;
pub mod filter;
pub mod pipeline;
pub mod pitch;
pub mod plot;
pub mod print;
pub mod selection;
pub mod source;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
