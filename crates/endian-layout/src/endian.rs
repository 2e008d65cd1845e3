//! Big- and little-endian byte conversion for fixed-width scalars.
//!
//! Every multi-byte value in an encoded record is stored in one declared byte
//! order. This module provides the [`ByteOrder`] selector, the [`Scalar`] trait
//! for reading and writing a single value at the front of a byte slice, and
//! bulk in-place conversions between a declared order and native order.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use bytemuck::{pod_collect_to_vec, Pod};

use crate::error::Error;

/// The order in which the bytes of a multi-byte value are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most-significant byte first.
    Big,
    /// Least-significant byte first.
    Little,
}

impl ByteOrder {
    /// The byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;
    /// The byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;

    /// Both byte orders, big first.
    pub const ALL: [ByteOrder; 2] = [ByteOrder::Big, ByteOrder::Little];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ByteOrder::Big => "big",
            ByteOrder::Little => "little",
        }
    }

    /// Returns `true` if values in this order must be byte-swapped on this platform.
    #[inline]
    pub fn is_swapped(self) -> bool {
        self != ByteOrder::NATIVE
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ByteOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "big" | "be" => Ok(ByteOrder::Big),
            "little" | "le" => Ok(ByteOrder::Little),
            _ => Err(Error::InvalidByteOrder),
        }
    }
}

/// A fixed-width plain value that can be encoded in either byte order.
pub trait Scalar: Pod + PartialEq + fmt::Debug {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Read a value in `order` from the first `WIDTH` bytes of the slice.
    ///
    /// # Panics
    /// Panics if `buf.len() < WIDTH`.
    fn read(buf: &[u8], order: ByteOrder) -> Self;

    /// Write the value in `order` into the first `WIDTH` bytes of the slice.
    ///
    /// # Panics
    /// Panics if `buf.len() < WIDTH`.
    fn write(self, buf: &mut [u8], order: ByteOrder);
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                const WIDTH: usize = core::mem::size_of::<$t>();

                #[inline]
                fn read(buf: &[u8], order: ByteOrder) -> Self {
                    let mut bytes = [0u8; core::mem::size_of::<$t>()];
                    bytes.copy_from_slice(&buf[..Self::WIDTH]);
                    match order {
                        ByteOrder::Big => <$t>::from_be_bytes(bytes),
                        ByteOrder::Little => <$t>::from_le_bytes(bytes),
                    }
                }

                #[inline]
                fn write(self, buf: &mut [u8], order: ByteOrder) {
                    let bytes = match order {
                        ByteOrder::Big => self.to_be_bytes(),
                        ByteOrder::Little => self.to_le_bytes(),
                    };
                    buf[..Self::WIDTH].copy_from_slice(&bytes);
                }
            }
        )*
    };
}

impl_scalar!(u8, i8, i16, u16, i32, u32, i64, u64, f32, f64);

/// Read a big-endian value from the front of the slice.
#[inline]
pub fn read_be<S: Scalar>(buf: &[u8]) -> S {
    S::read(buf, ByteOrder::Big)
}

/// Read a little-endian value from the front of the slice.
#[inline]
pub fn read_le<S: Scalar>(buf: &[u8]) -> S {
    S::read(buf, ByteOrder::Little)
}

/// Write `val` big-endian into the front of the slice.
#[inline]
pub fn write_be<S: Scalar>(buf: &mut [u8], val: S) {
    val.write(buf, ByteOrder::Big)
}

/// Write `val` little-endian into the front of the slice.
#[inline]
pub fn write_le<S: Scalar>(buf: &mut [u8], val: S) {
    val.write(buf, ByteOrder::Little)
}

// --- Bulk conversions ---
//
// Swapping is symmetric, so converting to native and converting from native
// are the same operation. Both names are kept so call sites read in the
// direction the data flows. On a platform whose order matches `order`, these
// are no-ops.

fn swap_chunks(buf: &mut [u8], width: usize, order: ByteOrder) {
    assert!(
        buf.len().is_multiple_of(width),
        "buffer length must be a multiple of {}",
        width
    );
    if width == 1 || !order.is_swapped() {
        return;
    }
    for chunk in buf.chunks_exact_mut(width) {
        chunk.reverse();
    }
}

/// Convert a buffer of `S` values stored in `order` to native order in place.
///
/// # Panics
/// Panics if `buf.len()` is not a multiple of `S::WIDTH`.
pub fn buf_to_native<S: Scalar>(buf: &mut [u8], order: ByteOrder) {
    swap_chunks(buf, S::WIDTH, order);
}

/// Convert a buffer of native-order `S` values to `order` in place.
///
/// # Panics
/// Panics if `buf.len()` is not a multiple of `S::WIDTH`.
pub fn buf_native_to<S: Scalar>(buf: &mut [u8], order: ByteOrder) {
    swap_chunks(buf, S::WIDTH, order);
}

/// Serialize a slice of values into a new buffer in `order`.
pub fn collect_bytes<S: Scalar>(values: &[S], order: ByteOrder) -> Vec<u8> {
    // Copy the native bytes via bytemuck, then swap in place if needed
    let mut buf: Vec<u8> = pod_collect_to_vec(values);
    buf_native_to::<S>(&mut buf, order);
    buf
}
