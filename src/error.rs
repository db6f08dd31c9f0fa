use std::fmt;


pub type Result<T> = std::result::Result<T, Error>;


/// Any failure of the compression pipeline.
#[derive(Debug)]
pub enum Error {

    Encoding(EncodingError),
    Decoding(DecodingError),
    Format(FormatError),

}


/// Encode-time contract failures. These indicate a code table that does not belong to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {

    /// The symbol with this code point has no entry in the code table
    UnknownSymbol(u32),
    /// A root-to-leaf path does not fit into a code
    CodeTooLong,

}


/// The packed bit stream is corrupt or truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodingError {

    /// The bits read so far are longer than any code without matching one
    InvalidEncoding,
    /// Bits were left over after the last complete code
    TrailingBits { bits: u8 },
    /// The padding does not fit the payload
    InvalidPadding { pad: u8 },
    /// The number of decoded symbols differs from the one recorded at compression
    LengthMismatch { expected: usize, actual: usize },

}


/// The artifact is not a well-formed container.
#[derive(Debug)]
pub enum FormatError {

    MissingDelimiter,
    InvalidHeader(serde_json::Error),
    /// The code point does not name a symbol of the requested type
    InvalidSymbol(u32),
    /// Empty, non-binary, or too long
    InvalidCode(String),
    DuplicateCode(String),
    /// The first code is a prefix of the second one
    NotPrefixFree(String, String),
    InvalidPadding(u8),

}


impl fmt::Display for Error {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Encoding(err) => write!(f, "{err}"),
            Error::Decoding(err) => write!(f, "{err}"),
            Error::Format(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for EncodingError {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::UnknownSymbol(code_point) =>
                write!(f, "symbol U+{code_point:04X} is missing from the code table"),
            EncodingError::CodeTooLong =>
                write!(f, "huffman code exceeds {} bits", crate::code::MAX_CODE_LEN),
        }
    }
}

impl fmt::Display for DecodingError {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corrupt or truncated compressed stream: ")?;
        match self {
            DecodingError::InvalidEncoding =>
                write!(f, "bit sequence matches no code"),
            DecodingError::TrailingBits { bits } =>
                write!(f, "{bits} trailing bits do not form a complete code"),
            DecodingError::InvalidPadding { pad } =>
                write!(f, "invalid padding of {pad} bits"),
            DecodingError::LengthMismatch { expected, actual } =>
                write!(f, "expected {expected} symbols, decoded {actual}"),
        }
    }
}

impl fmt::Display for FormatError {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corrupt or invalid compressed file: ")?;
        match self {
            FormatError::MissingDelimiter => write!(f, "header delimiter not found"),
            FormatError::InvalidHeader(err) => write!(f, "malformed header: {err}"),
            FormatError::InvalidSymbol(code_point) => write!(f, "invalid symbol code point {code_point}"),
            FormatError::InvalidCode(code) => write!(f, "invalid code {code:?}"),
            FormatError::DuplicateCode(code) => write!(f, "code {code:?} is assigned twice"),
            FormatError::NotPrefixFree(prefix, code) => write!(f, "code {prefix:?} is a prefix of {code:?}"),
            FormatError::InvalidPadding(pad) => write!(f, "padding of {pad} bits is out of range"),
        }
    }
}


impl std::error::Error for Error {

    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Encoding(err) => Some(err),
            Error::Decoding(err) => Some(err),
            Error::Format(err) => Some(err),
        }
    }
}

impl std::error::Error for EncodingError {}

impl std::error::Error for DecodingError {}

impl std::error::Error for FormatError {

    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::InvalidHeader(err) => Some(err),
            _ => None,
        }
    }
}


/// Enable using the `?` operator on encoding results
impl From<EncodingError> for Error {
    fn from(err: EncodingError) -> Self {
        Error::Encoding(err)
    }
}

/// Enable using the `?` operator on decoding results
impl From<DecodingError> for Error {
    fn from(err: DecodingError) -> Self {
        Error::Decoding(err)
    }
}

/// Enable using the `?` operator on container results
impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Error::Format(err)
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::InvalidHeader(err)
    }
}
