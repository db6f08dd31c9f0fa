//! Lossless Huffman compression of text.
//!
//! Symbols are counted, a Huffman tree is grown from the counts and the codes read off it
//! are written after a small JSON header that makes the artifact self-describing.
//!
//! ```
//! let compressed = huffman_text_codec::compress("abracadabra".chars()).unwrap();
//!
//! let text = huffman_text_codec::decompress_str(&compressed).unwrap();
//! assert_eq!(text, "abracadabra");
//! ```

mod bitvec;
pub mod code;
pub mod codec;
pub mod container;
pub mod error;
pub mod frequency;
pub mod symbol;
pub mod tree;

use log::debug;

pub use bitvec::{BitVec, BitView};
pub use code::{Code, CodeTable, InverseCodeTable};
pub use container::Header;
pub use error::{DecodingError, EncodingError, Error, FormatError, Result};
pub use symbol::Symbol;


/// Sizes observed while compressing. Never printed by the library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {

    pub original_symbols: usize,
    pub original_bytes: usize,
    pub distinct_symbols: usize,
    pub encoded_bits: usize,
    pub artifact_bytes: usize,
    /// Shannon entropy of the input in bits per symbol
    pub entropy: f64,

}

impl CompressionStats {

    /// Artifact size relative to the original size. Above 1 means the data grew.
    pub fn ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            self.artifact_bytes as f64 / self.original_bytes as f64
        }
    }


    /// Bits spent per symbol. Huffman codes keep this within one bit above the entropy.
    pub fn average_code_len(&self) -> f64 {
        if self.original_symbols == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.original_symbols as f64
        }
    }

}


pub fn compress<T>(data: impl Iterator<Item = T> + Clone) -> Result<Vec<u8>>
where
    T: Symbol
{
    compress_with_stats(data)
        .map(|(artifact, _)| artifact)
}


/// Compresses `data`, which is walked twice: once to count and once to encode.
pub fn compress_with_stats<T>(data: impl Iterator<Item = T> + Clone) -> Result<(Vec<u8>, CompressionStats)>
where
    T: Symbol
{

    let frequencies = frequency::analyze(data.clone());
    debug!("{} distinct symbols in {}", frequencies.len(), frequencies.total());

    let root = tree::build(&frequencies);
    let (codes, _) = code::generate(root.as_ref())?;

    let encoded = codec::encode(data, &codes)?;
    let (packed, pad) = encoded.as_padded_bytes();

    let header = Header::new(&codes, pad, frequencies.total());
    let artifact = container::serialize(&header, packed)?;

    let stats = CompressionStats {
        original_symbols: frequencies.total(),
        original_bytes: frequencies.iter()
            .map(|(value, count)| value.byte_len() * count)
            .sum(),
        distinct_symbols: frequencies.len(),
        encoded_bits: encoded.len_bits(),
        artifact_bytes: artifact.len(),
        entropy: frequencies.entropy(),
    };

    Ok((artifact, stats))
}


pub fn decompress<T>(artifact: &[u8]) -> Result<Box<[T]>>
where
    T: Symbol
{

    let (header, payload) = container::parse(artifact)?;
    let inverse = header.inverse_table::<T>()?;

    let bits = BitView::from_padded_bytes(payload, header.pad)?;
    let decoded = codec::decode(&bits, &inverse)?;

    match header.count {
        Some(expected) if expected != decoded.len() =>
            Err(DecodingError::LengthMismatch { expected, actual: decoded.len() }.into()),
        _ => Ok(decoded)
    }
}


pub fn decompress_str(artifact: &[u8]) -> Result<String> {
    Ok(decompress::<char>(artifact)?
        .iter()
        .collect())
}
