pub mod cli;
pub mod config;
pub mod error;
pub mod httpx;
pub mod stringx;
pub mod timex;

pub use config::Config;
pub use error::{Error, Result};
