use crate::error::Error;

pub mod api;
pub mod config;
pub mod error;
pub mod model;

pub type Result<T> = std::result::Result<T, Error>;
