//! The compressed artifact:
//!
//! ```text
//! <header json> "\n------\n" <packed bits>
//! ```
//!
//! The header is compact JSON, which escapes every control character,
//! so it never contains a raw newline and therefore never the delimiter.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::code::{Code, CodeTable, InverseCodeTable};
use crate::error::FormatError;
use crate::symbol::Symbol;


pub const DELIMITER: &[u8] = b"\n------\n";


/// Everything needed to decode the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {

    /// Code point of every symbol and its code as text, e.g. `"101"`
    pub codes: BTreeMap<u32, String>,
    /// Zero bits padding the last payload byte
    pub pad: u8,
    /// Number of encoded symbols. Older artifacts may lack it, then no length check is made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>

}

impl Header {

    pub fn new<T>(codes: &CodeTable<T>, pad: u8, count: usize) -> Self
    where
        T: Symbol
    {
        Self {
            codes: codes.iter()
                .map(|(value, code)| (value.code_point(), code.to_string()))
                .collect(),
            pad,
            count: Some(count)
        }
    }


    /// Parses the codes back, rejecting any table that could not have come out of a Huffman tree.
    pub fn code_table<T>(&self) -> Result<CodeTable<T>, FormatError>
    where
        T: Symbol
    {
        Ok(self.parse_codes()?
            .into_iter()
            .collect())
    }


    pub fn inverse_table<T>(&self) -> Result<InverseCodeTable<T>, FormatError>
    where
        T: Symbol
    {
        Ok(self.parse_codes()?
            .into_iter()
            .map(|(value, code)| (code, value))
            .collect())
    }


    fn parse_codes<T>(&self) -> Result<Vec<(T, Code)>, FormatError>
    where
        T: Symbol
    {

        let mut seen: HashMap<Code, &str> = HashMap::with_capacity(self.codes.len());
        let mut parsed = Vec::with_capacity(self.codes.len());

        for (&code_point, text) in &self.codes {

            let value = T::from_code_point(code_point)
                .ok_or(FormatError::InvalidSymbol(code_point))?;

            let code: Code = text.parse()?;

            if seen.insert(code, text.as_str()).is_some() {
                return Err(FormatError::DuplicateCode(text.clone()));
            }

            parsed.push((value, code));
        }

        // Once sorted, a code that prefixes others is directly followed by one of them
        let mut texts = seen.into_values().collect::<Vec<_>>();
        texts.sort_unstable();

        if let Some(pair) = texts.windows(2).find(|pair| pair[1].starts_with(pair[0])) {
            return Err(FormatError::NotPrefixFree(pair[0].to_owned(), pair[1].to_owned()));
        }

        Ok(parsed)
    }

}


pub fn serialize(header: &Header, packed: &[u8]) -> Result<Vec<u8>, FormatError> {

    let mut artifact = serde_json::to_vec(header)?;

    artifact.reserve(DELIMITER.len() + packed.len());
    artifact.extend_from_slice(DELIMITER);
    artifact.extend_from_slice(packed);

    debug!("artifact: {} header bytes, {} payload bytes", artifact.len() - DELIMITER.len() - packed.len(), packed.len());

    Ok(artifact)
}


/// Splits the artifact on the first delimiter and parses the header in front of it.
pub fn parse(artifact: &[u8]) -> Result<(Header, &[u8]), FormatError> {

    let split = artifact.windows(DELIMITER.len())
        .position(|window| window == DELIMITER)
        .ok_or(FormatError::MissingDelimiter)?;

    let header: Header = serde_json::from_slice(&artifact[..split])?;

    if header.pad > 7 {
        return Err(FormatError::InvalidPadding(header.pad));
    }

    Ok((header, &artifact[split + DELIMITER.len()..]))
}
