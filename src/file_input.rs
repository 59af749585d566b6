use crate::types::InputError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum InputPath {
    Stdin,
    File(PathBuf),
}

impl InputPath {
    /// Parses an `@file` argument; `@-` means stdin.
    pub fn from_arg(arg: &str) -> Option<Self> {
        let stripped = arg.strip_prefix('@')?;
        if stripped == "-" {
            Some(InputPath::Stdin)
        } else {
            Some(InputPath::File(PathBuf::from(stripped)))
        }
    }
}

pub enum FileReader {
    Stdin(BufReader<io::Stdin>),
    File(BufReader<File>),
}

impl BufRead for FileReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            FileReader::Stdin(reader) => reader.fill_buf(),
            FileReader::File(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            FileReader::Stdin(reader) => reader.consume(amt),
            FileReader::File(reader) => reader.consume(amt),
        }
    }
}

impl Read for FileReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            FileReader::Stdin(reader) => reader.read(buf),
            FileReader::File(reader) => reader.read(buf),
        }
    }
}

pub fn create_file_reader(path: &InputPath) -> Result<FileReader, io::Error> {
    match path {
        InputPath::Stdin => Ok(FileReader::Stdin(BufReader::new(io::stdin()))),
        InputPath::File(p) => {
            let file = File::open(p).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", p.display(), e))
            })?;
            Ok(FileReader::File(BufReader::new(file)))
        }
    }
}

/// Raw latitude/longitude text from one input line. Either side may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPair {
    pub line: usize,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Splits a pair line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_pair_line(line: &str, line_number: usize) -> Result<Option<RawPair>, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = if trimmed.contains(',') {
        trimmed.split(',').map(str::trim).collect()
    } else {
        trimmed.split_whitespace().collect()
    };

    if fields.len() > 2 {
        return Err(InputError::TooManyFields {
            line: line_number,
            found: fields.len(),
            text: trimmed.to_string(),
        });
    }

    let mut fields = fields.into_iter().map(str::to_string);
    Ok(Some(RawPair {
        line: line_number,
        latitude: fields.next(),
        longitude: fields.next(),
    }))
}

/// Streams pairs from a reader, skipping blank and comment lines.
pub struct PairFileIterator<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> PairFileIterator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for PairFileIterator<R> {
    type Item = Result<RawPair, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    match parse_pair_line(&line, self.line_number) {
                        Ok(Some(pair)) => return Some(Ok(pair)),
                        Ok(None) => continue,
                        Err(e) => return Some(Err(e)),
                    }
                }
                Err(e) => {
                    self.line_number += 1;
                    return Some(Err(InputError::Read {
                        line: self.line_number,
                        source: e,
                    }));
                }
            }
        }
    }
}
