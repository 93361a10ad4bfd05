//! Shared configuration types.

mod environment;

pub use environment::{Environment, ParseEnvironmentError};
