pub mod clean;

pub use clean::{run_clean, run_clean_impl};
