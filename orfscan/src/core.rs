use crate::{
    cli::Args,
    consts::{CODON_TABLE, START_CODON, STOP_SYMBOL},
    error::{OrfError, Result},
    io::{FastaRecord, OrfSet, read_fasta, write_records},
};

use log::{debug, error, info};
use rayon::{ThreadPoolBuilder, prelude::*};

use std::collections::HashSet;

/// Outcome of translating a single codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    Amino(u8),
    Stop,
}

impl Translation {
    /// One-letter symbol, `*` for stop codons.
    pub fn symbol(&self) -> u8 {
        match self {
            Translation::Amino(aa) => *aa,
            Translation::Stop => STOP_SYMBOL,
        }
    }
}

/// Main processing function: reads the input FASTA, scans every record on
/// both strands and writes the unique ORFs of each record in input order.
pub fn orfscan(args: Args) -> Result<()> {
    let Args {
        input,
        output,
        threads,
        compress,
        ..
    } = args;

    let records = read_fasta(&input)?;
    let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;

    info!(
        "Scanning {} sequences using {} threads",
        records.len(),
        pool.current_num_threads()
    );

    let results = pool.install(|| {
        records
            .par_iter()
            .map(scan_record)
            .collect::<Result<Vec<OrfSet>>>()
    })?;

    debug!("{:?}", results);

    let total: usize = results.iter().map(|set| set.orfs.len()).sum();
    info!(
        "Found {} unique ORFs across {} sequences",
        total,
        results.len()
    );

    let written = write_records(&output, &results, compress)?;
    info!("Wrote ORFs to {}", written.display());

    Ok(())
}

fn scan_record(record: &FastaRecord) -> Result<OrfSet> {
    let orfs = process_sequence(&record.seq)
        .inspect_err(|e| error!("ERROR: cannot scan sequence {}: {}", record.id, e))?;

    Ok(OrfSet {
        id: record.id.clone(),
        orfs,
    })
}

/// Finds the unique ORFs of a sequence across the forward strand and its
/// reverse complement.
///
/// Forward hits come first, then reverse hits; only the first occurrence of
/// each peptide is kept.
///
/// # Example
///
/// ```rust,ignore
/// let orfs = process_sequence(b"ATGTTTTAA").unwrap();
/// assert_eq!(orfs, vec!["F".to_string()]);
/// ```
pub fn process_sequence(seq: &[u8]) -> Result<Vec<String>> {
    let reverse = reverse_complement(seq);

    let mut orfs = find_orfs(seq)?;
    orfs.extend(find_orfs(&reverse)?);

    let mut seen = HashSet::with_capacity(orfs.len());
    orfs.retain(|orf| seen.insert(orf.clone()));

    Ok(orfs)
}

/// Finds every ORF on a single strand.
///
/// Each `ATG` starts its own walk, nested starts included. Translation runs
/// from the codon after the start codon up to the first in-frame stop, so
/// neither the start nor the stop codon ends up in the ORF. Walks that reach
/// the end of the strand without a stop produce nothing. Results keep
/// discovery order and may contain duplicates.
///
/// # Errors
///
/// `OrfError::InvalidCodon` if a walk reads a codon with a base outside
/// {A,C,G,T}. The position is the codon offset within `strand`.
pub fn find_orfs(strand: &[u8]) -> Result<Vec<String>> {
    let mut orfs = Vec::new();

    for start in 0..strand.len().saturating_sub(2) {
        if &strand[start..start + 3] != START_CODON {
            continue;
        }

        if let Some(orf) = walk_frame(strand, start)? {
            orfs.push(orf);
        }
    }

    Ok(orfs)
}

/// Translates the codons after the start codon at `start` until a stop;
/// `None` if the strand ends first.
fn walk_frame(strand: &[u8], start: usize) -> Result<Option<String>> {
    let mut peptide = String::new();

    for position in (start + 3..strand.len().saturating_sub(2)).step_by(3) {
        match translate_at(strand, position)? {
            Translation::Amino(aa) => peptide.push(char::from(aa)),
            Translation::Stop => return Ok(Some(peptide)),
        }
    }

    Ok(None)
}

/// Reverse complement of a DNA sequence.
///
/// Only uppercase A, C, G and T are complemented; any other byte is kept
/// as is.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&base| match base {
            b'A' => b'T',
            b'C' => b'G',
            b'G' => b'C',
            b'T' => b'A',
            other => other,
        })
        .collect()
}

/// Translates a codon into an amino acid or a stop.
///
/// # Errors
///
/// `OrfError::InvalidCodon` (position 0) unless `codon` is exactly three
/// uppercase bases from {A,C,G,T}.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(translate_codon(b"ATG").unwrap(), Translation::Amino(b'M'));
/// assert_eq!(translate_codon(b"TGA").unwrap(), Translation::Stop);
/// ```
pub fn translate_codon(codon: &[u8]) -> Result<Translation> {
    if codon.len() != 3 {
        return Err(invalid_codon(codon, 0));
    }

    translate_at(codon, 0)
}

fn translate_at(strand: &[u8], position: usize) -> Result<Translation> {
    let codon = strand
        .get(position..position + 3)
        .ok_or_else(|| invalid_codon(&strand[position.min(strand.len())..], position))?;

    CODON_TABLE
        .iter()
        .find(|(table_codon, _)| *table_codon == codon)
        .map(|&(_, symbol)| match symbol {
            STOP_SYMBOL => Translation::Stop,
            aa => Translation::Amino(aa),
        })
        .ok_or_else(|| invalid_codon(codon, position))
}

fn invalid_codon(codon: &[u8], position: usize) -> OrfError {
    OrfError::InvalidCodon {
        codon: String::from_utf8_lossy(codon).into_owned(),
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{AMINO_ACIDS, STOP_CODONS};

    fn orfs(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_codon_table_is_total_and_unique() {
        let bases = [b'A', b'C', b'G', b'T'];
        let mut seen = HashSet::new();

        for a in bases {
            for b in bases {
                for c in bases {
                    let codon = [a, b, c];
                    let translation = translate_codon(&codon).unwrap();

                    match translation {
                        Translation::Stop => assert!(STOP_CODONS.contains(&&codon[..])),
                        Translation::Amino(aa) => assert!(AMINO_ACIDS.contains(&aa)),
                    }

                    seen.insert(codon);
                }
            }
        }

        assert_eq!(seen.len(), 64);

        let table: HashSet<&[u8]> = CODON_TABLE.iter().map(|(codon, _)| *codon).collect();
        assert_eq!(table.len(), 64);
    }

    #[test]
    fn test_translate_codon_standard_code() {
        assert_eq!(translate_codon(b"ATG").unwrap(), Translation::Amino(b'M'));
        assert_eq!(translate_codon(b"TTT").unwrap(), Translation::Amino(b'F'));
        assert_eq!(translate_codon(b"AGA").unwrap(), Translation::Amino(b'R'));
        assert_eq!(translate_codon(b"TGG").unwrap(), Translation::Amino(b'W'));
        assert_eq!(translate_codon(b"TAA").unwrap(), Translation::Stop);
        assert_eq!(translate_codon(b"TAG").unwrap(), Translation::Stop);
        assert_eq!(translate_codon(b"TGA").unwrap(), Translation::Stop);
        assert_eq!(Translation::Stop.symbol(), b'*');
    }

    #[test]
    fn test_translate_codon_rejects_invalid_input() {
        for codon in [&b"ANG"[..], b"atg", b"AT", b"ATGA", b""] {
            assert!(matches!(
                translate_codon(codon),
                Err(OrfError::InvalidCodon { position: 0, .. })
            ));
        }
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(b"ATGTTTTAA"), b"TTAAAACAT");
        assert_eq!(reverse_complement(b"ACGNt"), b"tNCGT");
        assert_eq!(reverse_complement(b""), b"");
    }

    #[test]
    fn test_find_orfs_single_orf() {
        assert_eq!(find_orfs(b"ATGTTTTAA").unwrap(), orfs(&["F"]));
    }

    #[test]
    fn test_find_orfs_start_followed_by_stop_is_empty_orf() {
        assert_eq!(find_orfs(b"ATGTAA").unwrap(), orfs(&[""]));
    }

    #[test]
    fn test_find_orfs_discards_unterminated_walks() {
        assert!(find_orfs(b"ATGTTTTTT").unwrap().is_empty());
        assert!(find_orfs(b"ATGTTTTA").unwrap().is_empty());
        assert!(find_orfs(b"AT").unwrap().is_empty());
    }

    #[test]
    fn test_find_orfs_nested_starts_scan_independently() {
        // start at 0 reads ATG TAA after itself; start at 3 hits TAA right away
        assert_eq!(find_orfs(b"ATGATGTAA").unwrap(), orfs(&["M", ""]));
    }

    #[test]
    fn test_find_orfs_out_of_frame_start_uses_own_frame() {
        // start at 0: CAT GTT TAA -> "HV"; start at 4: TTT AA -> runs off
        assert_eq!(find_orfs(b"ATGCATGTTTAA").unwrap(), orfs(&["HV"]));
    }

    #[test]
    fn test_find_orfs_stops_at_first_stop() {
        assert_eq!(find_orfs(b"ATGAAATAGCCCTAA").unwrap(), orfs(&["K"]));
    }

    #[test]
    fn test_find_orfs_invalid_base_in_walk() {
        let err = find_orfs(b"CCATGANATAA").unwrap_err();

        match err {
            OrfError::InvalidCodon { codon, position } => {
                assert_eq!(codon, "ANA");
                assert_eq!(position, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_find_orfs_ignores_invalid_bases_outside_walks() {
        assert_eq!(find_orfs(b"NNNATGTAANNNN").unwrap(), orfs(&[""]));
    }

    #[test]
    fn test_process_sequence_no_start_codon() {
        assert!(process_sequence(b"CCCCCC").unwrap().is_empty());
    }

    #[test]
    fn test_process_sequence_forward_only() {
        assert_eq!(process_sequence(b"ATGTTTTAA").unwrap(), orfs(&["F"]));
    }

    #[test]
    fn test_process_sequence_merges_reverse_strand() {
        // reverse complement of TTACATATGAAATAA is TTATTTCATATGTAA
        assert_eq!(
            process_sequence(b"TTACATATGAAATAA").unwrap(),
            orfs(&["K", ""])
        );
    }

    #[test]
    fn test_process_sequence_dedupes_across_strands() {
        // palindromic: reverse complement is the same sequence
        let seq = b"ATGTAATTACAT";
        assert_eq!(reverse_complement(seq), seq);
        assert_eq!(process_sequence(seq).unwrap(), orfs(&[""]));
    }
}
