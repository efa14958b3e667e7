//! Image loading for the crop widget.
//!
//! This module provides:
//! - [`decode_image`] - synchronous decode of in-memory bytes (JPEG, PNG, GIF, WebP, BMP)
//! - [`load_image`] - asynchronous read-then-decode from any `AsyncRead`
//!
//! # Architecture
//!
//! Loading has two stages that always run in order: the whole input is read
//! into memory, then decoded. Read failures surface as [`LoadError::Read`],
//! decode failures as [`LoadError::Decode`]; no partial result is returned.
//!
//! Decoded pixels are RGBA8 so they can be copied straight into a canvas
//! `ImageData`.
//!
//! # Examples
//!
//! ```ignore
//! use cropbox_core::decode::load_image;
//!
//! let file = futures::io::Cursor::new(std::fs::read("photo.jpg")?);
//! let info = futures::executor::block_on(load_image(file))?;
//! println!("Loaded {}x{} image", info.width, info.height);
//! ```

mod load;
mod raster;
mod types;

pub use load::load_image;
pub use raster::{decode_image, extract_orientation};
pub use types::{DecodeError, DecodedImage, ImageInfo, LoadError, Orientation};
