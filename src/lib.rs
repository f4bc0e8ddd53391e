#![forbid(unsafe_code)]
#![recursion_limit = "2048"]
#![warn(clippy::all, clippy::correctness)]
#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod bitstream;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod id3;
pub mod mpeg;

pub use decoder::{Decoder, Frames};
pub use error::{MpegError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
extern crate log;
