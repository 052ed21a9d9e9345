//! Length-prefixed text codec.
//!
//! Stream layout, all integers `u64` little-endian:
//!
//! ```text
//! [count]
//! count times: [length][length bytes of the element's `Display` text]
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};
use core::str::{self, FromStr};

use embedded_io::{Error as _, Read, ReadExactError, Write};

use crate::core::GrowVec;
use crate::error::CodecError;

const FIELD_SIZE: usize = 8;
const CHUNK_SIZE: usize = 512;

/// Writer wrapper that tracks the byte position for error reports
struct Sink<'w, W: Write> {
    writer: &'w mut W,
    position: usize,
}

impl<'w, W: Write> Sink<'w, W> {
    fn new(writer: &'w mut W) -> Self {
        Self {
            writer,
            position: 0,
        }
    }

    fn put_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let position = self.position;
        self.writer
            .write_all(bytes)
            .map_err(|e| CodecError::Io {
                kind: e.kind(),
                position,
            })?;
        self.position += bytes.len();
        Ok(())
    }

    fn put_field(&mut self, value: usize) -> Result<(), CodecError> {
        self.put_bytes(&(value as u64).to_le_bytes())
    }

    fn flush(&mut self) -> Result<(), CodecError> {
        let position = self.position;
        self.writer.flush().map_err(|e| CodecError::Io {
            kind: e.kind(),
            position,
        })
    }
}

/// Reader wrapper that tracks the byte position for error reports
struct Source<'r, R: Read> {
    reader: &'r mut R,
    position: usize,
}

impl<'r, R: Read> Source<'r, R> {
    fn new(reader: &'r mut R) -> Self {
        Self {
            reader,
            position: 0,
        }
    }

    fn fill(&mut self, buf: &mut [u8], field_start: usize) -> Result<(), CodecError> {
        self.reader.read_exact(buf).map_err(|e| match e {
            ReadExactError::UnexpectedEof => CodecError::UnexpectedEof {
                position: field_start,
            },
            ReadExactError::Other(e) => CodecError::Io {
                kind: e.kind(),
                position: field_start,
            },
        })?;
        self.position += buf.len();
        Ok(())
    }

    fn take_field(&mut self) -> Result<usize, CodecError> {
        let mut bytes = [0u8; FIELD_SIZE];
        self.fill(&mut bytes, self.position)?;
        let value = u64::from_le_bytes(bytes);
        usize::try_from(value).map_err(|_| CodecError::LengthOverflow { value })
    }

    /// Reads `length` bytes into `out` in bounded chunks, so a corrupt length
    /// fails at end of input instead of allocating up front.
    fn take_bytes(&mut self, length: usize, out: &mut Vec<u8>) -> Result<(), CodecError> {
        let field_start = self.position;
        let mut chunk = [0u8; CHUNK_SIZE];
        let mut remaining = length;
        out.clear();
        while remaining > 0 {
            let n = remaining.min(CHUNK_SIZE);
            self.fill(&mut chunk[..n], field_start)?;
            out.extend_from_slice(&chunk[..n]);
            remaining -= n;
        }
        Ok(())
    }
}

impl<T: fmt::Display> GrowVec<T> {
    /// Writes the element count, then every element's `Display` text with a
    /// length prefix, and flushes the writer.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// `CodecError::Io` if the writer fails.
    ///
    /// # Panics
    ///
    /// Panics if an element's `Display` implementation returns an error.
    #[allow(clippy::expect_used)]
    pub fn serialize_to<W: Write>(&self, writer: &mut W) -> Result<usize, CodecError> {
        let mut sink = Sink::new(writer);
        sink.put_field(self.len())?;

        let mut text = String::new();
        for element in self {
            text.clear();
            write!(text, "{element}").expect("Display implementation returned an error");
            sink.put_field(text.len())?;
            sink.put_bytes(text.as_bytes())?;
        }
        sink.flush()?;

        log::debug!("serialized {} elements into {} bytes", self.len(), sink.position);
        Ok(sink.position)
    }
}

impl<T: FromStr> GrowVec<T> {
    /// Reads a stream written by `serialize_to` and appends its elements.
    ///
    /// Elements are parsed with `FromStr` and appended one by one, so the
    /// usual growth policy applies. Returns the number of elements appended.
    ///
    /// # Errors
    ///
    /// Any `CodecError` except `Open`. On error the vector is truncated back
    /// to the length it had before the call.
    pub fn deserialize_from<R: Read>(&mut self, reader: &mut R) -> Result<usize, CodecError> {
        let original_len = self.len();
        let result = self.append_decoded(reader);
        if result.is_err() {
            self.resize(original_len);
        }
        result
    }

    /// Decodes a whole stream into a new vector.
    ///
    /// # Errors
    ///
    /// As for `deserialize_from`.
    pub fn decode_from<R: Read>(reader: &mut R) -> Result<Self, CodecError> {
        let mut decoded = Self::new();
        decoded.deserialize_from(reader)?;
        Ok(decoded)
    }

    fn append_decoded<R: Read>(&mut self, reader: &mut R) -> Result<usize, CodecError> {
        let mut source = Source::new(reader);
        let count = source.take_field()?;
        let mut bytes: Vec<u8> = Vec::new();

        for index in 0..count {
            let length = source.take_field()?;
            let position = source.position;
            source.take_bytes(length, &mut bytes)?;

            let text = str::from_utf8(&bytes).map_err(|_| CodecError::InvalidUtf8 { index, position })?;
            let element = text
                .parse::<T>()
                .map_err(|_| CodecError::Parse { index, position })?;
            log::trace!("decoded element {index} from {length} bytes");
            self.push_back(element);
        }

        log::debug!("deserialized {} elements from {} bytes", count, source.position);
        Ok(count)
    }
}

#[cfg(feature = "std")]
mod file {
    use core::fmt;
    use core::str::FromStr;
    use std::fs::File;
    use std::io::{BufReader, BufWriter};
    use std::path::Path;

    use embedded_io_adapters::std::FromStd;

    use crate::core::GrowVec;
    use crate::error::CodecError;

    fn open_error(error: &std::io::Error) -> CodecError {
        CodecError::Open {
            kind: embedded_io::Error::kind(error),
        }
    }

    impl<T: fmt::Display> GrowVec<T> {
        /// Serializes into the file at `path`, creating or truncating it.
        ///
        /// # Errors
        ///
        /// `CodecError::Open` if the file cannot be created, otherwise as
        /// for `serialize_to`.
        pub fn serialize<P: AsRef<Path>>(&self, path: P) -> Result<usize, CodecError> {
            let file = File::create(path).map_err(|e| open_error(&e))?;
            let mut writer = FromStd::new(BufWriter::new(file));
            self.serialize_to(&mut writer)
        }
    }

    impl<T: FromStr> GrowVec<T> {
        /// Appends the elements stored in the file at `path`.
        ///
        /// # Errors
        ///
        /// `CodecError::Open` if the file cannot be opened, otherwise as for
        /// `deserialize_from`.
        pub fn deserialize<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, CodecError> {
            let file = File::open(path).map_err(|e| open_error(&e))?;
            let mut reader = FromStd::new(BufReader::new(file));
            self.deserialize_from(&mut reader)
        }
    }
}
