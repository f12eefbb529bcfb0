//! Section renderers for the preferences panel

mod behaviour;
mod paths;
mod terminal;
mod toolchain;

pub use behaviour::render_section_behaviour;
pub use paths::render_section_paths;
pub use terminal::render_section_terminal;
pub use toolchain::render_section_toolchain;
