#![forbid(unsafe_code)]

pub mod case;
pub mod model;

pub use case::{CaseFile, Verdict};
