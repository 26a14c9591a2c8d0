pub mod dialog_renderer;
pub mod preference_store;
pub mod translator;
