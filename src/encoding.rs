use core::fmt;

use crate::error::{Error, Result};

/// Text encoding used by the character and line operations.
///
/// Characters are decoded one byte at a time, so only single-byte characters can be decoded.
/// For UTF-8 this means only the ASCII subset; any other byte fails with `Error::Decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8
    #[default]
    Utf8,
    /// 7-bit ASCII
    Ascii,
    /// ISO-8859-1, where every byte is the code point of the same value
    Latin1,
}

impl Encoding {
    /// Looks up an encoding by name. Names are case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Encoding::Utf8),
            "ascii" | "us-ascii" => Some(Encoding::Ascii),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Some(Encoding::Latin1),
            _ => None,
        }
    }

    /// The canonical name of this encoding.
    pub const fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Ascii => "ascii",
            Encoding::Latin1 => "latin-1",
        }
    }

    /// Decodes a single byte as a single character.
    pub fn decode_byte(&self, byte: u8) -> Result<char> {
        match self {
            Encoding::Utf8 | Encoding::Ascii if byte.is_ascii() => Ok(char::from(byte)),
            Encoding::Utf8 | Encoding::Ascii => Err(Error::Decode {
                encoding: *self,
                byte,
            }),
            Encoding::Latin1 => Ok(char::from(byte)),
        }
    }

    /// Encodes `text`, appending the bytes to `out`.
    pub fn encode_into(&self, text: &str, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Encoding::Utf8 => out.extend_from_slice(text.as_bytes()),
            Encoding::Ascii => {
                if let Some(ch) = text.chars().find(|c| !c.is_ascii()) {
                    return Err(Error::Encode {
                        encoding: *self,
                        ch,
                    });
                }
                out.extend_from_slice(text.as_bytes());
            }
            Encoding::Latin1 => {
                out.reserve(text.len());
                for ch in text.chars() {
                    let byte = u8::try_from(ch).map_err(|_| Error::Encode {
                        encoding: *self,
                        ch,
                    })?;
                    out.push(byte);
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
