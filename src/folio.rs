//! Main module for folio library functionality

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod formats;
pub mod grammar;
pub mod inlines;
pub mod parsing;
pub mod processor;
pub mod testing;
