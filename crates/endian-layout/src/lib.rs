#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod endian;
pub mod error;
#[cfg(feature = "std")]
pub mod io;
pub mod layout;
pub mod record;
pub mod span;
pub mod verify;

pub use endian::{ByteOrder, Scalar};
pub use error::{Error, Result};
pub use record::{TestRecord, RECORD_LEN, RECORD_OFFSETS};
pub use span::{Span, SpanMut};
