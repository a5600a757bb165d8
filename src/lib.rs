// lib.rs - Library root for the quill editor shell

pub mod app;
pub mod buffer;
pub mod cli;
pub mod command;
pub mod command_panel;
pub mod config;
pub mod cursor;
pub mod dir_tree;
pub mod editor;
pub mod event;
pub mod keymap;
pub mod mode;
pub mod services;
pub mod syntax;
pub mod ui;
pub mod viewport;
