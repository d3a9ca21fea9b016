pub mod app;
pub mod greeter;

pub use crate::domain::model::Greeting;
pub use crate::domain::ports::{Console, Greeter};
pub use crate::utils::error::Result;
