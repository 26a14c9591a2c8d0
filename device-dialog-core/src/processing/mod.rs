pub mod classifier;
pub mod composer;
pub mod inline_failure;
