//! HTTP request handlers

pub mod git;
pub mod health;
pub mod quotes;
pub mod system;
