// ui/widgets/mod.rs - UI widgets

pub mod command_panel;
pub mod dir_tree;
pub mod editor_pane;
pub mod gutter;
pub mod key_bar;
pub mod title_bar;
