#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs, missing_debug_implementations)]
extern crate alloc;
mod cache;
mod config;
mod error;
mod lifecycle;
mod pool;

pub use cache::*;
pub use config::*;
pub use error::*;
pub use lifecycle::*;
pub use pool::*;
