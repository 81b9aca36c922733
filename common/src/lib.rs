pub mod convert;
pub mod dtos;
pub mod error;
pub mod models;
pub mod provider;
pub mod util;
