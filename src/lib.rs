pub mod app;
pub mod calculator;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod input;

#[cfg(test)]
pub mod test_utils;
