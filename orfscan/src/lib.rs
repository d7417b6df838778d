//! extract open reading frames from both strands of FASTA sequences
//!
//! Every `ATG` on the forward strand and on its reverse complement opens a
//! reading frame that is translated codon by codon until the first in-frame
//! stop. The unique peptides of each sequence are written back out, one
//! `> id` block per input record and in input order.
//!
//! # Usage
//!
//! ```bash
//! Usage: orfscan [OPTIONS] --input <INPUT> --output <OUTPUT>
//!
//! Options:
//!   -i, --input <INPUT>      Path to input FASTA file (.fa, .fasta, or .gz)
//!   -o, --output <OUTPUT>    Path to output file
//!   -t, --threads <THREADS>  Number of threads used to scan sequences [default: 1]
//!   -Z, --compress           Gzip-compress the output file
//!   -L, --level <LEVEL>      Logging verbosity level [default: info]
//!   -h, --help               Print help
//!   -V, --version            Print version
//! ```

pub mod cli;
pub mod consts;
pub mod core;
pub mod error;
pub mod io;

pub use crate::core::{
    Translation, find_orfs, orfscan, process_sequence, reverse_complement, translate_codon,
};
pub use cli::Args;
pub use error::{OrfError, Result};
pub use io::{FastaRecord, OrfSet, parse_fasta, read_fasta, write_records};
