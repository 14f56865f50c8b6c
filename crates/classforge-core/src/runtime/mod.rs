//! Default materialization runtime.
//!
//! - [`TypeLoader`] - the in-process live type space ([`crate::Materializer`] impl)
//! - [`Instance`] - a live, callable instance of a loaded class
//! - [`LoadedClass`] - the immutable member snapshot instances share

mod eval;
mod instance;
mod loader;

pub use instance::Instance;
pub use loader::{LoadedClass, TypeLoader};
