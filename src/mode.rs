//! Open-mode strings.
//!
//! ```text
//! mode ::= [rwax] b? +?
//! ```
//!
//! - `r`: read an existing file
//! - `w`: write, creating or truncating the file
//! - `a`: write, creating the file and appending to its end
//! - `x`: write, creating the file and failing if it already exists
//! - `b`: binary; accepted and ignored, since files are always opened in binary mode
//! - `+`: update, adding the access the primary letter lacks
//!
//! The letters after the primary one may appear in any order, but each at most once.

use core::fmt;
use std::fs::OpenOptions;

/// Parsed open mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMode {
    /// Read access
    pub read: bool,
    /// Write access
    pub write: bool,
    /// Writes go to the end of the file
    pub append: bool,
    /// Truncate the file on open
    pub truncate: bool,
    /// Create the file, failing if it exists
    pub exclusive: bool,
}

impl FileMode {
    /// Read-only mode, `"r"`.
    pub const READ: Self = Self {
        read: true,
        write: false,
        append: false,
        truncate: false,
        exclusive: false,
    };

    /// Parses a mode string such as `"r"`, `"wb"` or `"rb+"`.
    pub fn parse(mode: &str) -> Result<Self, ParseModeError> {
        let mut chars = mode.chars();
        let mut result = match chars.next() {
            None => return Err(ParseModeError::Empty),
            Some('r') => Self::READ,
            Some('w') => Self {
                read: false,
                write: true,
                truncate: true,
                ..Self::READ
            },
            Some('a') => Self {
                read: false,
                write: true,
                append: true,
                ..Self::READ
            },
            Some('x') => Self {
                read: false,
                write: true,
                exclusive: true,
                ..Self::READ
            },
            Some(c @ ('b' | '+')) => return Err(ParseModeError::MissingPrimary(c)),
            Some(c) => return Err(ParseModeError::InvalidCharacter(c)),
        };

        let mut seen_b = false;
        let mut seen_plus = false;
        for c in chars {
            match c {
                'b' if !seen_b => seen_b = true,
                '+' if !seen_plus => {
                    seen_plus = true;
                    result.read = true;
                    result.write = true;
                }
                'b' | '+' | 'r' | 'w' | 'a' | 'x' => {
                    return Err(ParseModeError::InvalidMode(mode.to_string()))
                }
                c => return Err(ParseModeError::InvalidCharacter(c)),
            }
        }

        Ok(result)
    }

    /// Converts the mode to `OpenOptions`.
    pub fn to_open_options(&self) -> OpenOptions {
        let mut opts = OpenOptions::new();
        opts.read(self.read)
            .write(self.write && !self.append)
            .append(self.append)
            .truncate(self.truncate)
            .create((self.truncate || self.append) && !self.exclusive)
            .create_new(self.exclusive);
        opts
    }
}

impl Default for FileMode {
    fn default() -> Self {
        Self::READ
    }
}

impl core::str::FromStr for FileMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats the canonical mode string. The binary marker is always present.
impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let primary = if self.exclusive {
            "x"
        } else if self.append {
            "a"
        } else if self.truncate {
            "w"
        } else {
            "r"
        };
        let update = if self.read && self.write { "+" } else { "" };
        write!(f, "{primary}b{update}")
    }
}

/// Error parsing a mode string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseModeError {
    /// The mode string was empty.
    #[error("mode string cannot be empty")]
    Empty,
    /// The mode string does not start with one of `r`, `w`, `a`, `x`.
    #[error("mode must start with one of 'r', 'w', 'a', 'x', not '{0}'")]
    MissingPrimary(char),
    /// A character that has no meaning in a mode string.
    #[error("invalid mode character: '{0}'")]
    InvalidCharacter(char),
    /// A repeated or conflicting letter.
    #[error("invalid mode: '{0}'")]
    InvalidMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_modes() {
        let r = FileMode::parse("r").unwrap();
        assert!(r.read && !r.write);

        let w = FileMode::parse("w").unwrap();
        assert!(!w.read && w.write && w.truncate);

        let a = FileMode::parse("a").unwrap();
        assert!(a.write && a.append && !a.truncate);

        let x = FileMode::parse("x").unwrap();
        assert!(x.write && x.exclusive);
    }

    #[test]
    fn binary_marker_is_ignored() {
        for (with_b, without_b) in [("rb", "r"), ("wb", "w"), ("ab", "a"), ("rb+", "r+")] {
            assert_eq!(FileMode::parse(with_b), FileMode::parse(without_b));
        }
        assert_eq!(FileMode::parse("r+b"), FileMode::parse("rb+"));
    }

    #[test]
    fn update_mode() {
        let m = FileMode::parse("w+").unwrap();
        assert!(m.read && m.write && m.truncate);

        let m = FileMode::parse("r+").unwrap();
        assert!(m.read && m.write && !m.truncate);
    }

    #[test]
    fn rejected_modes() {
        assert_eq!(FileMode::parse(""), Err(ParseModeError::Empty));
        assert_eq!(FileMode::parse("b"), Err(ParseModeError::MissingPrimary('b')));
        assert_eq!(FileMode::parse("rt"), Err(ParseModeError::InvalidCharacter('t')));
        assert_eq!(FileMode::parse("q"), Err(ParseModeError::InvalidCharacter('q')));
        assert_eq!(
            FileMode::parse("rw"),
            Err(ParseModeError::InvalidMode("rw".to_string()))
        );
        assert_eq!(
            FileMode::parse("rbb"),
            Err(ParseModeError::InvalidMode("rbb".to_string()))
        );
    }

    #[test]
    fn display_is_canonical() {
        for (input, canonical) in [
            ("r", "rb"),
            ("wb", "wb"),
            ("a", "ab"),
            ("x", "xb"),
            ("r+b", "rb+"),
            ("a+", "ab+"),
        ] {
            assert_eq!(FileMode::parse(input).unwrap().to_string(), canonical);
        }
    }
}
