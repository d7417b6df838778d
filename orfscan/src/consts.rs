//! Standard genetic code and codon constants used by the ORF scanner.

pub const START_CODON: &[u8] = b"ATG";
pub const STOP_CODONS: [&[u8]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Marker used in [`CODON_TABLE`] for stop codons.
pub const STOP_SYMBOL: u8 = b'*';

/// Amino acid symbols a sense codon can translate to.
pub const AMINO_ACIDS: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Standard genetic code, one entry per codon over {A,C,G,T}.
pub const CODON_TABLE: [(&[u8], u8); 64] = [
    // TTN
    (b"TTT", b'F'),
    (b"TTC", b'F'),
    (b"TTA", b'L'),
    (b"TTG", b'L'),
    // TCN
    (b"TCT", b'S'),
    (b"TCC", b'S'),
    (b"TCA", b'S'),
    (b"TCG", b'S'),
    // TAN
    (b"TAT", b'Y'),
    (b"TAC", b'Y'),
    (b"TAA", b'*'),
    (b"TAG", b'*'),
    // TGN
    (b"TGT", b'C'),
    (b"TGC", b'C'),
    (b"TGA", b'*'),
    (b"TGG", b'W'),
    // CTN
    (b"CTT", b'L'),
    (b"CTC", b'L'),
    (b"CTA", b'L'),
    (b"CTG", b'L'),
    // CCN
    (b"CCT", b'P'),
    (b"CCC", b'P'),
    (b"CCA", b'P'),
    (b"CCG", b'P'),
    // CAN
    (b"CAT", b'H'),
    (b"CAC", b'H'),
    (b"CAA", b'Q'),
    (b"CAG", b'Q'),
    // CGN
    (b"CGT", b'R'),
    (b"CGC", b'R'),
    (b"CGA", b'R'),
    (b"CGG", b'R'),
    // ATN
    (b"ATT", b'I'),
    (b"ATC", b'I'),
    (b"ATA", b'I'),
    (b"ATG", b'M'),
    // ACN
    (b"ACT", b'T'),
    (b"ACC", b'T'),
    (b"ACA", b'T'),
    (b"ACG", b'T'),
    // AAN
    (b"AAT", b'N'),
    (b"AAC", b'N'),
    (b"AAA", b'K'),
    (b"AAG", b'K'),
    // AGN
    (b"AGT", b'S'),
    (b"AGC", b'S'),
    (b"AGA", b'R'),
    (b"AGG", b'R'),
    // GTN
    (b"GTT", b'V'),
    (b"GTC", b'V'),
    (b"GTA", b'V'),
    (b"GTG", b'V'),
    // GCN
    (b"GCT", b'A'),
    (b"GCC", b'A'),
    (b"GCA", b'A'),
    (b"GCG", b'A'),
    // GAN
    (b"GAT", b'D'),
    (b"GAC", b'D'),
    (b"GAA", b'E'),
    (b"GAG", b'E'),
    // GGN
    (b"GGT", b'G'),
    (b"GGC", b'G'),
    (b"GGA", b'G'),
    (b"GGG", b'G'),
];
