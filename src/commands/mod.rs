pub mod prerender;

// Re-export command functions for convenience
pub use prerender::{load_config, prerender};
