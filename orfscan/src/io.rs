//! FASTA input and ORF output for orfscan.
//!
//! Input is read whole, optionally gunzipped, and split on `>` into records.
//! Output is one block per record: a `> id` header, one ORF per line and a
//! blank separator line.

use flate2::{Compression, read::MultiGzDecoder, write::GzEncoder};
use log::{info, warn};

use std::{
    collections::HashMap,
    fmt::Debug,
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Read, Write},
    path::{Path, PathBuf},
};

use crate::error::{OrfError, Result};

/// A named nucleotide sequence from the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

/// Unique ORFs found for a single input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrfSet {
    pub id: String,
    pub orfs: Vec<String>,
}

/// Parses FASTA text into records, keeping the order identifiers are first seen.
///
/// Each `>`-delimited chunk is split on whitespace: the first token is the
/// identifier and every remaining token is concatenated into the sequence.
/// Chunks without tokens or without sequence are skipped. A repeated
/// identifier replaces the sequence of the earlier record in place.
///
/// # Example
///
/// ```rust,ignore
/// let records = parse_fasta(b">seq1 sample\nATG\nTAA\n");
/// assert_eq!(records[0].seq, b"sampleATGTAA");
/// ```
pub fn parse_fasta(text: &[u8]) -> Vec<FastaRecord> {
    let mut records: Vec<FastaRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for chunk in text.trim_ascii().split(|&b| b == b'>') {
        let mut tokens = chunk
            .split(|b| b.is_ascii_whitespace())
            .filter(|token| !token.is_empty());

        let Some(label) = tokens.next() else {
            continue;
        };

        let id = String::from_utf8_lossy(label).into_owned();
        let seq: Vec<u8> = tokens.flatten().copied().collect();

        if seq.is_empty() {
            warn!("WARN: skipping record {} with no sequence", id);
            continue;
        }

        match index.get(&id) {
            Some(&idx) => records[idx].seq = seq,
            None => {
                index.insert(id.clone(), records.len());
                records.push(FastaRecord { id, seq });
            }
        }
    }

    records
}

/// Reads and parses a FASTA file, gunzipping it when the extension is `.gz`.
pub fn read_fasta<F: AsRef<Path> + Debug>(f: F) -> Result<Vec<FastaRecord>> {
    let path = f.as_ref();
    info!("Reading sequences from file {}", path.display());

    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => OrfError::FileNotFound(path.to_path_buf()),
        _ => OrfError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut reader: Box<dyn Read> = if is_gzip(path) {
        Box::new(MultiGzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut text = Vec::new();
    reader
        .read_to_end(&mut text)
        .map_err(|source| OrfError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let records = parse_fasta(&text);
    info!("Read {} sequences from file {:#?}", records.len(), f);

    Ok(records)
}

/// Writes every ORF set to `path` and returns the path actually written.
///
/// With `compress`, output is gzip-encoded and `.gz` is appended to the path
/// when missing.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[OrfSet], compress: bool) -> Result<PathBuf> {
    let output_path = with_gzip_extension(path.as_ref().to_path_buf(), compress);
    let to_write_error = |source| OrfError::Write {
        path: output_path.clone(),
        source,
    };

    let file = File::create(&output_path).map_err(to_write_error)?;

    if compress {
        let mut writer = GzEncoder::new(BufWriter::new(file), Compression::default());
        write_orf_sets(records, &mut writer).map_err(to_write_error)?;
        writer
            .finish()
            .and_then(|mut inner| inner.flush())
            .map_err(to_write_error)?;
    } else {
        let mut writer = BufWriter::new(file);
        write_orf_sets(records, &mut writer).map_err(to_write_error)?;
        writer.flush().map_err(to_write_error)?;
    }

    Ok(output_path)
}

/// Serializes ORF sets into `writer`, one block per record.
pub fn write_orf_sets<W: Write>(records: &[OrfSet], writer: &mut W) -> std::io::Result<()> {
    for record in records {
        writer.write_all(b"> ")?;
        writer.write_all(record.id.as_bytes())?;
        writer.write_all(b"\n")?;

        for orf in &record.orfs {
            writer.write_all(orf.as_bytes())?;
            writer.write_all(b"\n")?;
        }

        writer.write_all(b"\n")?;
    }

    Ok(())
}

fn is_gzip(path: &Path) -> bool {
    matches!(path.extension().and_then(|ext| ext.to_str()), Some("gz"))
}

fn with_gzip_extension(mut path: PathBuf, compress: bool) -> PathBuf {
    if compress && !is_gzip(&path) {
        path.as_mut_os_string().push(".gz");
    }

    path
}
