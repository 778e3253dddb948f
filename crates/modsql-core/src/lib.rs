mod config;
pub use config::Config;

pub mod driver;
pub use driver::Connection;

mod engine;
pub use engine::Engine;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Schema;

pub mod stmt;

pub use async_trait::async_trait;

pub type Result<T, E = Error> = core::result::Result<T, E>;
