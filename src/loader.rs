//! FASTA/FASTQ loading (first record only)

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::Path;

use fastq::Record;
use flate2::read::MultiGzDecoder;
use log::{debug, info};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqFormat {
    Fasta,
    Fastq,
}

impl fmt::Display for SeqFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqFormat::Fasta => write!(f, "FASTA"),
            SeqFormat::Fastq => write!(f, "FASTQ"),
        }
    }
}

/// First record of a sequence file. Bases keep the case they had in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub id: String,
    pub format: SeqFormat,
    pub bases: Vec<u8>,
}

impl Sequence {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|source| Error::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        Ok(Box::new(BufReader::with_capacity(1 << 20, MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::with_capacity(1 << 20, file)))
    }
}

/// Undecodable bytes (bad gzip stream, non-UTF-8 text) are a format problem;
/// anything else means the file could not be read.
fn read_error(path: &Path, e: io::Error) -> Error {
    match e.kind() {
        io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput | io::ErrorKind::UnexpectedEof => {
            Error::Format {
                path: path.to_path_buf(),
                msg: e.to_string(),
            }
        }
        _ => Error::NotFound {
            path: path.to_path_buf(),
            source: e,
        },
    }
}

/// Load the first record of a FASTA or FASTQ file (`.gz` is decompressed).
///
/// The format is taken from the first non-empty line: `>` for FASTA, `@` for
/// FASTQ. Any later records are ignored.
pub fn load(path: impl AsRef<Path>) -> Result<Sequence> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;

    let mut first = String::new();
    loop {
        first.clear();
        if reader.read_line(&mut first).map_err(|e| read_error(path, e))? == 0 {
            return Err(Error::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        if !first.trim().is_empty() {
            break;
        }
    }
    let first = first.trim_start();

    let seq = match first.as_bytes()[0] {
        b'>' => read_fasta(path, first, reader)?,
        b'@' => read_fastq(path, first, reader)?,
        _ => {
            let shown: String = first.trim_end().chars().take(40).collect();
            return Err(Error::Format {
                path: path.to_path_buf(),
                msg: format!("expected '>' (FASTA) or '@' (FASTQ) header, found {shown:?}"),
            });
        }
    };

    if seq.is_empty() {
        return Err(Error::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    info!(
        "Loaded {} record '{}' ({} bases) from {}",
        seq.format,
        seq.id,
        seq.len(),
        path.display()
    );
    Ok(seq)
}

fn read_fasta(path: &Path, header: &str, mut reader: Box<dyn BufRead>) -> Result<Sequence> {
    let id = header[1..].trim().to_string();
    let mut bases = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).map_err(|e| read_error(path, e))? == 0 {
            break;
        }
        if line.starts_with('>') {
            debug!("Skipping records after '{}'", id);
            break;
        }
        bases.extend(line.bytes().filter(|b| !b.is_ascii_whitespace()));
    }
    Ok(Sequence {
        id,
        format: SeqFormat::Fasta,
        bases,
    })
}

fn read_fastq(path: &Path, header: &str, reader: Box<dyn BufRead>) -> Result<Sequence> {
    // the header line was already consumed for format detection; the trailing
    // newline lets a final quality line without one parse as complete
    let input = Cursor::new(header.as_bytes().to_vec())
        .chain(reader)
        .chain(&b"\n"[..]);
    let mut first = None;
    fastq::Parser::new(input)
        .each(|rec| {
            let head = rec.head();
            let head = head.strip_prefix(b"@").unwrap_or(head);
            first = Some(Sequence {
                id: String::from_utf8_lossy(head).trim().to_string(),
                format: SeqFormat::Fastq,
                bases: rec
                    .seq()
                    .iter()
                    .copied()
                    .filter(|b| !b.is_ascii_whitespace())
                    .collect(),
            });
            false
        })
        .map_err(|e| Error::Format {
            path: path.to_path_buf(),
            msg: e.to_string(),
        })?;

    first.ok_or_else(|| Error::Format {
        path: path.to_path_buf(),
        msg: "incomplete FASTQ record".into(),
    })
}
