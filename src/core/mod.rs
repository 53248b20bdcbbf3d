pub use errors::{FeatureError, Result};

pub mod classify;
pub mod composition;
pub mod config;
pub mod dna;
pub mod errors;
pub mod io;
pub mod read;
pub mod rpileup;
pub mod run;
pub mod stats;
