use std::io::Write;

use tracing::trace;

use crate::encoding::Encoding;
use crate::error::Result;
use crate::file::BinaryFile;
use crate::scalar::{self, Scalar, ScalarSource};

impl BinaryFile {
    /// Writes `bytes` to the file.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.handle()?.write_all(bytes)?;
        Ok(())
    }

    /// Encodes `text` and writes the resulting bytes. Nothing is written if `text` contains a
    /// character that `encoding` cannot represent.
    pub fn write_str(&mut self, text: &str, encoding: Encoding) -> Result<()> {
        let mut bytes = Vec::with_capacity(text.len());
        encoding.encode_into(text, &mut bytes)?;
        self.write(&bytes)
    }

    /// Writes a single value or a run of values of type `T`. The number of values written is
    /// the length of `value`; a single scalar counts as a run of one.
    pub fn write_type<T: Scalar, V: ScalarSource<T> + ?Sized>(&mut self, value: &V) -> Result<()> {
        let values = value.as_scalars();
        let code = T::FORMAT;
        trace!(%code, count = values.len(), "packing values");
        let bytes = scalar::pack(values, self.order);
        self.write(&bytes)
    }

    /// Writes 1-byte signed integers.
    pub fn write_int1<V: ScalarSource<i8> + ?Sized>(&mut self, value: &V) -> Result<()> {
        self.write_type::<i8, V>(value)
    }

    /// Writes 2-byte signed integers.
    pub fn write_int2<V: ScalarSource<i16> + ?Sized>(&mut self, value: &V) -> Result<()> {
        self.write_type::<i16, V>(value)
    }

    /// Writes 4-byte signed integers.
    pub fn write_int4<V: ScalarSource<i32> + ?Sized>(&mut self, value: &V) -> Result<()> {
        self.write_type::<i32, V>(value)
    }

    /// Writes 8-byte signed integers.
    pub fn write_int8<V: ScalarSource<i64> + ?Sized>(&mut self, value: &V) -> Result<()> {
        self.write_type::<i64, V>(value)
    }

    /// Same as `write_int4`.
    pub fn write_int<V: ScalarSource<i32> + ?Sized>(&mut self, value: &V) -> Result<()> {
        self.write_int4(value)
    }

    /// Writes 4-byte floats.
    pub fn write_float<V: ScalarSource<f32> + ?Sized>(&mut self, value: &V) -> Result<()> {
        self.write_type::<f32, V>(value)
    }

    /// Writes 8-byte floats.
    pub fn write_double<V: ScalarSource<f64> + ?Sized>(&mut self, value: &V) -> Result<()> {
        self.write_type::<f64, V>(value)
    }
}
