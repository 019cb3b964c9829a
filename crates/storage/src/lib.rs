#![forbid(unsafe_code)]

pub mod sheets;
pub mod repository;
