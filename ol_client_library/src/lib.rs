//! Client side of a function invocation.
//!
//! Turns command line intent into one HTTP `POST <base>/invoke/<function>` and
//! makes the outcome presentable.

pub mod config;
pub mod error;
pub mod invoker;
pub mod render;
pub mod request;

pub use error::InvokeError;
pub use invoker::{invoke, InvocationResult, Invoker};
pub use render::RenderedBody;
pub use request::{BodySource, InvocationRequest, InvokeOptions};
