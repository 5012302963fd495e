//! Main module for runguide library functionality

pub mod ast;
pub mod characters;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod navigation;
pub mod parsing;
pub mod testing;
