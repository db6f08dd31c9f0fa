use std::fmt::Debug;
use std::hash::Hash;


/// An atomic unit of input data.
///
/// Symbols travel through the container header as numeric code points, never as raw text,
/// so a symbol that happens to be a newline or part of the delimiter cannot corrupt the header.
pub trait Symbol: Eq + Hash + Clone + Debug {

    fn code_point(&self) -> u32;

    fn from_code_point(code_point: u32) -> Option<Self>;

    /// How many bytes the symbol occupies in its uncompressed form
    fn byte_len(&self) -> usize;

}

impl Symbol for char {

    fn code_point(&self) -> u32 {
        *self as u32
    }


    fn from_code_point(code_point: u32) -> Option<Self> {
        char::from_u32(code_point)
    }


    fn byte_len(&self) -> usize {
        self.len_utf8()
    }

}

impl Symbol for u8 {

    fn code_point(&self) -> u32 {
        u32::from(*self)
    }


    fn from_code_point(code_point: u32) -> Option<Self> {
        u8::try_from(code_point).ok()
    }


    fn byte_len(&self) -> usize {
        1
    }

}


#[cfg(test)]
mod tests {

    use super::*;


    #[test]
    fn char_code_points() {

        for ch in ['a', '\n', '-', 'é', '🦀'] {
            assert_eq!(char::from_code_point(ch.code_point()), Some(ch));
        }

        assert_eq!('é'.byte_len(), 2);
        // Surrogates are not valid chars
        assert_eq!(char::from_code_point(0xD800), None);
    }


    #[test]
    fn byte_code_points() {

        assert_eq!(u8::from_code_point(255), Some(255));
        assert_eq!(u8::from_code_point(256), None);
        assert_eq!(b'x'.byte_len(), 1);
    }

}
