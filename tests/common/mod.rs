#![allow(dead_code)]

use std::fmt;
use std::str::FromStr;

/// Structured element whose text form carries labels and punctuation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        Person {
            name: name.to_string(),
            age,
        }
    }
}

impl From<(&str, u32)> for Person {
    fn from((name, age): (&str, u32)) -> Self {
        Person::new(name, age)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}\tAge: {}", self.name, self.age)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct PersonParseError;

/// Reads the four whitespace-separated tokens `Display` writes.
/// Names containing whitespace do not survive the round trip.
impl FromStr for Person {
    type Err = PersonParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some("Name:"), Some(name), Some("Age:"), Some(age), None) = (
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
        ) else {
            return Err(PersonParseError);
        };
        let age = age.parse().map_err(|_| PersonParseError)?;
        Ok(Person::new(name, age))
    }
}

/// Reader that hands out at most one byte per call
pub struct OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    iter: I,
}

impl<I> OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    pub fn new(iter: I) -> Self {
        OneByteReader { iter }
    }
}

impl<I> embedded_io::ErrorType for OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    type Error = embedded_io::ErrorKind;
}

impl<I> embedded_io::Read for OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        if let Some(next_byte) = self.iter.next() {
            buf[0] = next_byte;
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

/// Writer that accepts `limit` bytes and then fails
pub struct FailingWriter {
    pub written: Vec<u8>,
    pub limit: usize,
}

impl FailingWriter {
    pub fn new(limit: usize) -> Self {
        FailingWriter {
            written: Vec::new(),
            limit,
        }
    }
}

impl embedded_io::ErrorType for FailingWriter {
    type Error = embedded_io::ErrorKind;
}

impl embedded_io::Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let room = self.limit - self.written.len();
        if room == 0 {
            return Err(embedded_io::ErrorKind::BrokenPipe);
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Reader that fails on every call
pub struct BrokenReader;

impl embedded_io::ErrorType for BrokenReader {
    type Error = embedded_io::ErrorKind;
}

impl embedded_io::Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        Err(embedded_io::ErrorKind::Other)
    }
}
