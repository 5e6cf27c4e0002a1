//! Input framing
//!
//! The input stream is one text line followed by pattern lines:
//!
//! - the text runs up to the first `\n` (or end of stream) and keeps a
//!   trailing `\n`, which also makes its last suffix unique
//! - each pattern is one line without its `\n`
//! - patterns stop at the first blank line or at end of stream
//!
//! Carriage returns are dropped everywhere, so CRLF input reads the same.

use crate::error::{Error, Result};
use memchr::memchr;
use memmap2::Mmap;
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

/// Raw input bytes, memory-mapped for files or buffered for stdin
pub enum InputData {
    Mapped(Mmap),
    Buffered(Vec<u8>),
}

impl Deref for InputData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            InputData::Mapped(mmap) => mmap,
            InputData::Buffered(buf) => buf,
        }
    }
}

impl InputData {
    /// Read from `path`, or from stdin when `path` is `None`
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::from_stdin(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let read_err = |source| Error::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_err)?;
        // Zero-length files cannot be mapped on every platform
        if file.metadata().map_err(read_err)?.len() == 0 {
            return Ok(InputData::Buffered(Vec::new()));
        }

        let mmap = unsafe { Mmap::map(&file) }.map_err(read_err)?;
        Ok(InputData::Mapped(mmap))
    }

    pub fn from_stdin() -> Result<Self> {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(Error::Stdin)?;
        Ok(InputData::Buffered(buf))
    }
}

/// Split the stream into the text (with its trailing `\n`) and the rest
pub fn split_text(data: &[u8]) -> (Vec<u8>, &[u8]) {
    let (line, rest) = match memchr(b'\n', data) {
        Some(pos) => (&data[..pos], &data[pos + 1..]),
        None => (data, &data[data.len()..]),
    };

    let mut text = strip_cr(line).into_owned();
    text.push(b'\n');
    (text, rest)
}

/// Iterator over pattern lines
pub struct PatternLines<'a> {
    rest: &'a [u8],
    done: bool,
}

impl<'a> PatternLines<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            rest: data,
            done: false,
        }
    }
}

impl<'a> Iterator for PatternLines<'a> {
    type Item = Cow<'a, [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.rest.is_empty() {
            return None;
        }

        let line = match memchr(b'\n', self.rest) {
            Some(pos) => {
                let line = &self.rest[..pos];
                self.rest = &self.rest[pos + 1..];
                line
            }
            None => std::mem::take(&mut self.rest),
        };

        let line = strip_cr(line);
        if line.is_empty() {
            self.done = true;
            return None;
        }

        Some(line)
    }
}

/// Split a whole input stream into text and patterns
pub fn parse_input(data: &[u8]) -> (Vec<u8>, PatternLines<'_>) {
    let (text, rest) = split_text(data);
    (text, PatternLines::new(rest))
}

fn strip_cr(line: &[u8]) -> Cow<'_, [u8]> {
    if memchr(b'\r', line).is_none() {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(line.iter().copied().filter(|&b| b != b'\r').collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn patterns(data: &[u8]) -> Vec<Vec<u8>> {
        let (_, lines) = parse_input(data);
        lines.map(|p| p.into_owned()).collect()
    }

    #[test]
    fn test_text_keeps_newline() {
        let (text, rest) = split_text(b"banana\nana\nna\n");
        assert_eq!(text, b"banana\n");
        assert_eq!(rest, b"ana\nna\n");
    }

    #[test]
    fn test_text_at_end_of_stream() {
        let (text, rest) = split_text(b"banana");
        assert_eq!(text, b"banana\n");
        assert!(rest.is_empty());

        let (text, _) = split_text(b"");
        assert_eq!(text, b"\n");
    }

    #[test]
    fn test_carriage_returns_dropped() {
        let (text, rest) = split_text(b"ban\rana\r\nna\r\n");
        assert_eq!(text, b"banana\n");
        assert_eq!(patterns(b"x\r\nana\r\nn\ra\r\n")[..], [b"ana".to_vec(), b"na".to_vec()]);
        assert_eq!(rest, b"na\r\n");
    }

    #[test]
    fn test_patterns_stop_at_blank_line() {
        assert_eq!(
            patterns(b"text\nab\ncd\n\nef\n"),
            vec![b"ab".to_vec(), b"cd".to_vec()]
        );
        // A line with only a carriage return counts as blank
        assert_eq!(patterns(b"text\nab\n\r\ncd\n"), vec![b"ab".to_vec()]);
    }

    #[test]
    fn test_last_pattern_without_newline() {
        assert_eq!(
            patterns(b"text\nab\ncd"),
            vec![b"ab".to_vec(), b"cd".to_vec()]
        );
    }

    #[test]
    fn test_no_patterns() {
        assert!(patterns(b"text\n").is_empty());
        assert!(patterns(b"text").is_empty());
    }

    #[test]
    fn test_open_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, b"banana\nana\n").unwrap();

        let data = InputData::open(Some(&path)).unwrap();
        assert_eq!(&data[..], b"banana\nana\n");
    }

    #[test]
    fn test_open_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, b"").unwrap();

        let data = InputData::from_file(&path).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_open_missing_file() {
        let err = InputData::from_file(Path::new("/nonexistent/input.txt"))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Read { .. }));
    }
}
