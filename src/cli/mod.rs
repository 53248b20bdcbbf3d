pub use app::{cmd, run};

mod app;
pub mod args;
pub mod output;
pub mod parse;
pub mod resformat;
pub mod style;
pub mod validate;
