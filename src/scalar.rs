use core::fmt::Debug;
use std::borrow::Cow;

use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::error::{Error, Result};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width value that can be read from and written to a `BinaryFile`.
///
/// This trait is sealed. It is implemented for `i8`, `i16`, `i32`, `i64`, `f32` and `f64`.
pub trait Scalar: FromBytes + IntoBytes + Immutable + Copy + Debug + sealed::Sealed {
    /// Number of bytes a value occupies.
    const WIDTH: usize;

    /// One-character format code naming the kind of value, as used by `struct`-style packing
    /// descriptors: `b`, `h`, `i`, `q` for integers and `f`, `d` for floats.
    const FORMAT: char;

    /// Reverses the order of the bytes of the value.
    fn swap_bytes(self) -> Self;
}

macro_rules! int_scalar {
    ($t:ty, $format:literal) => {
        impl sealed::Sealed for $t {}

        impl Scalar for $t {
            const WIDTH: usize = core::mem::size_of::<$t>();
            const FORMAT: char = $format;

            #[inline(always)]
            fn swap_bytes(self) -> Self {
                <$t>::swap_bytes(self)
            }
        }
    };
}

macro_rules! float_scalar {
    ($t:ty, $format:literal) => {
        impl sealed::Sealed for $t {}

        impl Scalar for $t {
            const WIDTH: usize = core::mem::size_of::<$t>();
            const FORMAT: char = $format;

            #[inline(always)]
            fn swap_bytes(self) -> Self {
                <$t>::from_bits(self.to_bits().swap_bytes())
            }
        }
    };
}

int_scalar!(i8, 'b');
int_scalar!(i16, 'h');
int_scalar!(i32, 'i');
int_scalar!(i64, 'q');
float_scalar!(f32, 'f');
float_scalar!(f64, 'd');

/// Byte order used to encode multi-byte scalars.
///
/// The default is the host's native order, which means files are only portable between hosts
/// with the same endianness. Select `Little` or `Big` when a file must be exchanged with other
/// hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// The byte order of the host.
    #[default]
    Native,
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Returns `true` if this order matches the host's order, so that values can be copied
    /// without swapping.
    pub const fn is_native(self) -> bool {
        match self {
            ByteOrder::Native => true,
            ByteOrder::Little => cfg!(target_endian = "little"),
            ByteOrder::Big => cfg!(target_endian = "big"),
        }
    }
}

/// The result of a typed read: a bare value when one value was requested, otherwise the
/// values in file order.
#[derive(Debug, Clone, PartialEq)]
pub enum Values<T> {
    /// A single value. Produced when exactly one value was requested.
    One(T),
    /// Two or more values.
    Many(Vec<T>),
}

impl<T> Values<T> {
    /// Number of values.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Always `false`; a typed read never produces zero values.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the value if this is `One`.
    pub fn scalar(self) -> Option<T> {
        match self {
            Values::One(value) => Some(value),
            Values::Many(_) => None,
        }
    }

    /// Views the values as a slice, regardless of shape.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Values::One(value) => core::slice::from_ref(value),
            Values::Many(values) => values,
        }
    }

    /// Converts the values into a `Vec`, regardless of shape.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Values::One(value) => vec![value],
            Values::Many(values) => values,
        }
    }

    /// Converts each value, keeping the shape.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Values<U> {
        match self {
            Values::One(value) => Values::One(f(value)),
            Values::Many(values) => Values::Many(values.into_iter().map(f).collect()),
        }
    }
}

/// Input to a typed write: either a single scalar or an array-like run of scalars.
///
/// The number of values written is always the length of the input, so there is no count
/// parameter on the write side.
pub trait ScalarSource<T: Scalar> {
    /// Views the input as a run of values.
    fn as_scalars(&self) -> &[T];
}

impl<T: Scalar> ScalarSource<T> for T {
    fn as_scalars(&self) -> &[T] {
        core::slice::from_ref(self)
    }
}

impl<T: Scalar> ScalarSource<T> for [T] {
    fn as_scalars(&self) -> &[T] {
        self
    }
}

impl<T: Scalar, const N: usize> ScalarSource<T> for [T; N] {
    fn as_scalars(&self) -> &[T] {
        self
    }
}

impl<T: Scalar> ScalarSource<T> for Vec<T> {
    fn as_scalars(&self) -> &[T] {
        self
    }
}

impl<T: Scalar> ScalarSource<T> for Values<T> {
    fn as_scalars(&self) -> &[T] {
        self.as_slice()
    }
}

/// Decodes a single value. `bytes` must be exactly `T::WIDTH` long.
pub(crate) fn unpack_one<T: Scalar>(bytes: &[u8], order: ByteOrder) -> Result<T> {
    let value = T::read_from_bytes(bytes).map_err(|_| Error::ShortRead {
        expected: T::WIDTH,
        actual: bytes.len(),
    })?;
    Ok(if order.is_native() {
        value
    } else {
        value.swap_bytes()
    })
}

/// Decodes `count` values. `bytes` must be exactly `count * T::WIDTH` long; any other length
/// fails with `Error::ShortRead`.
pub(crate) fn unpack<T: Scalar>(bytes: &[u8], count: usize, order: ByteOrder) -> Result<Vec<T>> {
    let expected = count.checked_mul(T::WIDTH).ok_or(Error::InvalidCount)?;
    if bytes.len() != expected {
        return Err(Error::ShortRead {
            expected,
            actual: bytes.len(),
        });
    }

    bytes
        .chunks_exact(T::WIDTH)
        .map(|chunk| unpack_one(chunk, order))
        .collect()
}

/// Encodes `values` as one packed run. In native order this borrows the values' own bytes.
pub(crate) fn pack<T: Scalar>(values: &[T], order: ByteOrder) -> Cow<'_, [u8]> {
    if order.is_native() {
        Cow::Borrowed(values.as_bytes())
    } else {
        let swapped: Vec<T> = values.iter().map(|v| v.swap_bytes()).collect();
        Cow::Owned(swapped.as_bytes().to_vec())
    }
}
