//! Minimal animated GIF89a encoder for palette-indexed frames.

#[macro_use]
extern crate log;
extern crate custom_error;

pub mod common;
pub mod errors;
pub mod lzw;
pub mod options;
pub mod writer;

pub use common::{Animation, Color, ColorTable, Frame};
pub use errors::GIFWriterError;
pub use options::{GIFWriterOptions, OPTION_LOOP, OPTION_LOOP_COUNT};
pub use writer::{build, build_image_block, write_sub_blocks, GIFWriter};
