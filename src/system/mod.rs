// src/system/mod.rs

pub mod io;
