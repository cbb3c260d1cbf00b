pub mod classifier;
pub mod diagnostics;
