//! A code point reader over any buffered byte source.

use std::io::{self, BufRead};

/// Decodes UTF-8 code points from a [`BufRead`], with one code point of lookahead.
///
/// Invalid UTF-8 is reported as an [`io::ErrorKind::InvalidData`] error.
pub struct CharReader<R: BufRead> {
    inner: R,
    peeked: Option<Option<char>>,
}

impl<R: BufRead> CharReader<R> {
    pub fn new(inner: R) -> Self {
        CharReader {
            inner,
            peeked: None,
        }
    }

    /// Read the next code point, or `None` at end of input.
    pub fn read_char(&mut self) -> io::Result<Option<char>> {
        match self.peeked.take() {
            Some(c) => Ok(c),
            None => self.decode(),
        }
    }

    /// Look at the next code point without consuming it.
    pub fn peek_char(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.peeked {
            return Ok(c);
        }
        let c = self.decode()?;
        self.peeked = Some(c);
        Ok(c)
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => {
                    let byte = buf[0];
                    self.inner.consume(1);
                    return Ok(Some(byte));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn decode(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };

        let width = match first {
            0x00..=0x7F => return Ok(Some(char::from(first))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(invalid_utf8(&[first])),
        };

        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.read_byte()? {
                Some(b) => *slot = b,
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "truncated UTF-8 sequence",
                    ));
                }
            }
        }

        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(|| invalid_utf8(&bytes[..width]))
    }
}

fn invalid_utf8(bytes: &[u8]) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid UTF-8 sequence {bytes:02x?}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn read_all<R: BufRead>(reader: &mut CharReader<R>) -> io::Result<String> {
        let mut s = String::new();
        while let Some(c) = reader.read_char()? {
            s.push(c);
        }
        Ok(s)
    }

    #[test]
    fn test_multibyte() {
        let text = "a£€𝄞 naïve";
        let mut reader = CharReader::new(Cursor::new(text));
        assert_eq!(read_all(&mut reader).unwrap(), text);
    }

    #[test]
    fn test_small_buffer_boundaries() {
        let text = "日本語のテキスト";
        let mut reader = CharReader::new(BufReader::with_capacity(1, text.as_bytes()));
        assert_eq!(read_all(&mut reader).unwrap(), text);
    }

    #[test]
    fn test_peek() {
        let mut reader = CharReader::new(Cursor::new("ab"));
        assert_eq!(reader.peek_char().unwrap(), Some('a'));
        assert_eq!(reader.peek_char().unwrap(), Some('a'));
        assert_eq!(reader.read_char().unwrap(), Some('a'));
        assert_eq!(reader.read_char().unwrap(), Some('b'));
        assert_eq!(reader.peek_char().unwrap(), None);
        assert_eq!(reader.read_char().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8() {
        let mut reader = CharReader::new(Cursor::new(vec![b'a', 0xFF, b'b']));
        assert_eq!(reader.read_char().unwrap(), Some('a'));
        let err = reader.read_char().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_truncated_sequence() {
        let mut reader = CharReader::new(Cursor::new(vec![0xE2, 0x82]));
        let err = reader.read_char().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
