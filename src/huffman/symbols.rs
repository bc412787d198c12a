use std::io::{self, Read};
use std::str;

use super::Symbol;

/// Pulls UTF-8 encoded symbols out of a byte reader, one symbol per call to `next`.
///
/// Read errors and malformed UTF-8 are handed to the caller as `Err` items.
pub struct SymbolReader<R: Read> {
    reader: R,
}

impl<R: Read> SymbolReader<R> {
    pub fn new(reader: R) -> Self {
        SymbolReader { reader }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_symbol(&mut self) -> io::Result<Option<Symbol>> {
        let Some(leading_byte) = self.read_byte()? else {
            return Ok(None);
        };
        let width = encoded_width(leading_byte)?;
        let mut buffer = [leading_byte, 0, 0, 0];
        for byte in buffer.iter_mut().take(width).skip(1) {
            *byte = self
                .read_byte()?
                .ok_or_else(|| invalid_data("UTF-8 sequence cut off by end of stream"))?;
        }
        let decoded = str::from_utf8(&buffer[..width])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(decoded.chars().next())
    }
}

fn encoded_width(leading_byte: u8) -> io::Result<usize> {
    match leading_byte {
        0x00..=0x7F => Ok(1),
        0xC0..=0xDF => Ok(2),
        0xE0..=0xEF => Ok(3),
        0xF0..=0xF7 => Ok(4),
        _ => Err(invalid_data("byte is not the start of a UTF-8 sequence")),
    }
}

fn invalid_data(message: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

impl<R: Read> Iterator for SymbolReader<R> {
    type Item = io::Result<Symbol>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_symbol().transpose()
    }
}

#[cfg(test)]
mod test {
    use std::io::{self, Read};

    use super::SymbolReader;

    fn read_all(bytes: &[u8]) -> io::Result<String> {
        SymbolReader::new(bytes).collect()
    }

    #[test]
    fn test_read_ascii_symbols() {
        let symbols = read_all(b"mississippi").unwrap();
        assert_eq!(symbols, "mississippi");
    }

    #[test]
    fn test_read_multi_byte_symbols() {
        let text = "Grüße, 世界 🦀\n";
        let symbols = read_all(text.as_bytes()).unwrap();
        assert_eq!(symbols, text);
    }

    #[test]
    fn test_empty_stream_yields_no_symbols() {
        let mut reader = SymbolReader::new(&b""[..]);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_invalid_leading_byte_is_reported() {
        let error = read_all(&[b'a', 0xFF, b'b']).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_truncated_sequence_is_reported() {
        let error = read_all(&[b'a', 0xE4, 0xB8]).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_invalid_continuation_byte_is_reported() {
        let error = read_all(&[0xC3, b'a']).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away"))
        }
    }

    #[test]
    fn test_read_errors_are_passed_through() {
        let mut reader = SymbolReader::new(FailingReader);
        let error = reader.next().expect("an error item").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
