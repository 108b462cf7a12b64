//!
//! # Usage
//!
//! This can be used by adding `rid3` to your dependencies in your project's `Cargo.toml`.
//!
//! ```toml
//! [dependencies]
//! rid3 = "0.3"
//! ```
//!
//! and this to your crate root:
//!
//! ```rust
//! extern crate rid3;
//! ```
//!
//! # Example: decoding a tag
//!
//! A tag is decoded from a byte buffer with [MetadataReader](metadata/struct.MetadataReader.html).
//! Every frame is a [FrameBody](frame/enum.FrameBody.html) variant.
//!
//! ```rust
//! use rid3::frame::{Frame, FrameBody, TEXT, TextEncoding};
//! use rid3::metadata::{EncodeOptions, MetadataReader, MetadataWriter};
//!
//! # let frame = Frame::new(FrameBody::TIT2(TEXT {
//! #     text_encoding: TextEncoding::ISO88591,
//! #     text: "Hello".to_string(),
//! # }));
//! # let mut options = EncodeOptions::default();
//! # options.version = Some(3);
//! # let bytes = MetadataWriter::new(options).write(vec![frame]).unwrap();
//! let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
//!
//! for frame in &tag.frames {
//!     if let FrameBody::TIT2(ref body) = frame.body {
//!         assert_eq!("Hello", body.text);
//!     }
//! }
//! ```
//!
//! # Example: encoding a tag
//!
//! Frames are encoded with [MetadataWriter](metadata/struct.MetadataWriter.html). When no
//! version is pinned the writer picks the highest version every frame and option supports.
//!
//! ```rust
//! use rid3::frame::{Frame, FrameBody, TEXT, TextEncoding};
//! use rid3::metadata::{EncodeOptions, MetadataWriter};
//!
//! let frame = Frame::new(FrameBody::TALB(TEXT {
//!     text_encoding: TextEncoding::UTF8,
//!     text: "Album!".to_string(),
//! }));
//!
//! let bytes = MetadataWriter::new(EncodeOptions::default())
//!     .write(vec![frame])
//!     .unwrap();
//!
//! assert_eq!(&bytes[0..3], b"ID3");
//! assert_eq!(bytes[3], 4);
//! ```
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod errors;
pub mod frame;
pub mod metadata;
pub mod readable;
pub mod writable;
pub mod util;
