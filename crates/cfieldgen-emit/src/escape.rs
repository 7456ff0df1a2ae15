//! Escaping strings for C string literals

use thiserror::Error;

/// Reasons a string cannot pass through a C string literal unchanged
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
    /// A NUL byte would terminate the generated `char[]` early
    #[error("interior NUL byte at offset {offset}")]
    InteriorNul { offset: usize },

    /// An escape sequence in a literal body could not be decoded
    #[error("malformed escape sequence at offset {offset}")]
    Malformed { offset: usize },
}

/// Escape `raw` for use between the quotes of a C string literal.
///
/// Quotes, backslashes, and the common control characters use their
/// named escapes; every other byte outside printable ASCII becomes a
/// three-digit octal escape, so multi-byte UTF-8 is preserved byte for
/// byte.
///
/// # Examples
///
/// ```
/// use cfieldgen_emit::c_escape;
///
/// assert_eq!(c_escape("say \"hi\"\n").unwrap(), "say \\\"hi\\\"\\n");
/// assert_eq!(c_escape("é").unwrap(), "\\303\\251");
/// ```
pub fn c_escape(raw: &str) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(raw.len());

    for (offset, byte) in raw.bytes().enumerate() {
        match byte {
            0 => return Err(EscapeError::InteriorNul { offset }),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b'"' => out.push_str("\\\""),
            b'\'' => out.push_str("\\'"),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(char::from(byte)),
            _ => out.push_str(&format!("\\{byte:03o}")),
        }
    }

    Ok(out)
}

/// Decode the body of a C string literal back into bytes.
///
/// Accepts the escapes [`c_escape`] produces plus `\?`, `\a`, `\b`,
/// `\f`, `\v`, and one-to-three digit octal escapes.
pub fn c_unescape(literal: &str) -> Result<Vec<u8>, EscapeError> {
    let bytes = literal.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let start = i;
        let code = *bytes
            .get(i + 1)
            .ok_or(EscapeError::Malformed { offset: start })?;
        i += 2;
        let decoded = match code {
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'a' => 0x07,
            b'b' => 0x08,
            b'f' => 0x0c,
            b'v' => 0x0b,
            b'"' | b'\'' | b'\\' | b'?' => code,
            b'0'..=b'7' => {
                let mut value = u32::from(code - b'0');
                let mut digits = 1;
                while digits < 3 {
                    match bytes.get(i).copied() {
                        Some(d @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(d - b'0');
                            i += 1;
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                u8::try_from(value).map_err(|_| EscapeError::Malformed { offset: start })?
            }
            _ => return Err(EscapeError::Malformed { offset: start }),
        };
        out.push(decoded);
    }

    Ok(out)
}

#[cfg(test)]
#[path = "escape/escape_tests.rs"]
mod escape_tests;
