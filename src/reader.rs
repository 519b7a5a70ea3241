use std::io::Read;

use crate::encoding::Encoding;
use crate::error::{Error, Result};
use crate::file::BinaryFile;
use crate::scalar::{self, Scalar, Values};

impl BinaryFile {
    /// Reads up to `n` raw bytes from the current position.
    ///
    /// Fewer than `n` bytes are returned only when the end of the file is reached; this is not
    /// an error. The typed `read_*` methods turn a short buffer into `Error::ShortRead`.
    pub fn read(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.handle()?.take(n as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Reads a single value of type `T`.
    pub fn read_one<T: Scalar>(&mut self) -> Result<T> {
        let bytes = self.read(T::WIDTH)?;
        if bytes.len() != T::WIDTH {
            return Err(Error::ShortRead {
                expected: T::WIDTH,
                actual: bytes.len(),
            });
        }
        scalar::unpack_one(&bytes, self.order)
    }

    /// Reads `n` consecutive values of type `T`, stored as one packed run of `n * T::WIDTH`
    /// bytes. `n` must be at least 1.
    ///
    /// If the file ends before the run does, the available bytes are consumed and the read
    /// fails with `Error::ShortRead`.
    pub fn read_many<T: Scalar>(&mut self, n: usize) -> Result<Vec<T>> {
        if n == 0 {
            return Err(Error::InvalidCount);
        }
        let len = n.checked_mul(T::WIDTH).ok_or(Error::InvalidCount)?;
        let bytes = self.read(len)?;
        let mut values = scalar::unpack(&bytes, n, self.order)?;
        values.truncate(n);
        Ok(values)
    }

    /// Reads `n` values of type `T`. Returns `Values::One` when `n` is 1 and `Values::Many`
    /// otherwise.
    pub fn read_values<T: Scalar>(&mut self, n: usize) -> Result<Values<T>> {
        if n == 1 {
            self.read_one().map(Values::One)
        } else {
            self.read_many(n).map(Values::Many)
        }
    }

    /// Reads `n` 1-byte signed integers.
    pub fn read_int1(&mut self, n: usize) -> Result<Values<i8>> {
        self.read_values(n)
    }

    /// Reads `n` 2-byte signed integers.
    pub fn read_int2(&mut self, n: usize) -> Result<Values<i16>> {
        self.read_values(n)
    }

    /// Reads `n` 4-byte signed integers.
    pub fn read_int4(&mut self, n: usize) -> Result<Values<i32>> {
        self.read_values(n)
    }

    /// Reads `n` 8-byte signed integers.
    pub fn read_int8(&mut self, n: usize) -> Result<Values<i64>> {
        self.read_values(n)
    }

    /// Same as `read_int4`.
    pub fn read_int(&mut self, n: usize) -> Result<Values<i32>> {
        self.read_int4(n)
    }

    /// Reads `n` 4-byte floats and converts each one to `R`.
    pub fn read_float_as<R: From<f32>>(&mut self, n: usize) -> Result<Values<R>> {
        Ok(self.read_values::<f32>(n)?.map(R::from))
    }

    /// Reads `n` 4-byte floats, widened to `f64`.
    pub fn read_float(&mut self, n: usize) -> Result<Values<f64>> {
        self.read_float_as(n)
    }

    /// Reads `n` 4-byte floats as `f32`.
    pub fn read_real4(&mut self, n: usize) -> Result<Values<f32>> {
        self.read_float_as(n)
    }

    /// Reads `n` 4-byte floats as `f64`.
    pub fn read_real8(&mut self, n: usize) -> Result<Values<f64>> {
        self.read_float_as(n)
    }

    /// Reads `n` 8-byte floats.
    pub fn read_double(&mut self, n: usize) -> Result<Values<f64>> {
        self.read_values(n)
    }

    /// Reads one byte and decodes it as one character. Returns `None` at the end of the file.
    pub fn read_char(&mut self, encoding: Encoding) -> Result<Option<char>> {
        match self.read(1)?.first() {
            Some(&byte) => encoding.decode_byte(byte).map(Some),
            None => Ok(None),
        }
    }

    /// Reads characters up to and including the next `'\n'`, or up to the end of the file.
    ///
    /// The newline is kept in the returned string. At the end of the file this returns an empty
    /// string. Each character costs one read call, so this is meant for short header lines, not
    /// bulk text.
    pub fn readline(&mut self, encoding: Encoding) -> Result<String> {
        let mut line = String::new();
        while let Some(ch) = self.read_char(encoding)? {
            line.push(ch);
            if ch == '\n' {
                break;
            }
        }
        Ok(line)
    }

    /// Reads bytes up to and including the next `b'\n'`, or up to the end of the file, without
    /// decoding them.
    #[cfg(feature = "bstr")]
    pub fn read_line_bstr(&mut self) -> Result<bstr::BString> {
        let mut line = Vec::new();
        while let Some(&byte) = self.read(1)?.first() {
            line.push(byte);
            if byte == b'\n' {
                break;
            }
        }
        Ok(bstr::BString::from(line))
    }
}
