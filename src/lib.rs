// src/lib.rs

pub mod cli;
pub mod config;
pub mod constants;
pub mod logic;
pub mod model;
pub mod storage;
pub mod system;
