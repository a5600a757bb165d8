// ui/mod.rs - UI module definitions

pub mod renderer;
pub mod theme;
pub mod widgets;

// Re-export commonly used types
pub use theme::Theme;
