pub mod config;
pub mod handlers;

// Re-export commonly used helpers for convenience
pub use config::{Backend, Config};
pub use handlers::{
    parse_region_type, render_map, render_progress, render_region_list, resolve_toggle_target,
};
