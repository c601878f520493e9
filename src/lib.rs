// src/lib.rs

//! ttscrape library

pub mod error;
pub mod handler;
pub mod models;
pub mod services;
pub mod sink;
pub mod utils;
