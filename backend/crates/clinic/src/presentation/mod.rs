//! Presentation Layer
//!
//! Invocation DTOs and the entrypoint dispatch.

pub mod dispatch;
pub mod dto;

pub use dispatch::{Dispatcher, Operation};
pub use dto::{Invocation, InvokeResponse};
