#[macro_use]
extern crate rust_i18n;

pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod startup;
pub mod summary;
pub mod utils;

pub use interpreter::{interpret, interpret_now, Category, ParsedEvent};

// Initialize i18n
i18n!("locales", fallback = "en");
