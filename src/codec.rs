use log::debug;

use crate::bitvec::{BitVec, BitView};
use crate::code::{Code, CodeTable, InverseCodeTable};
use crate::error::{DecodingError, EncodingError};
use crate::symbol::Symbol;


/// Concatenates the code of every value, in order, without separators.
pub fn encode<T>(data: impl IntoIterator<Item = T>, codes: &CodeTable<T>) -> Result<BitVec, EncodingError>
where
    T: Symbol
{

    let data = data.into_iter();

    // Every value takes at least the shortest code
    let shortest = codes.values()
        .map(Code::len)
        .min()
        .unwrap_or(0);

    let mut encoded = BitVec::with_capacity(data.size_hint().0 * shortest as usize);

    for value in data {

        let code = codes.get(&value)
            .ok_or_else(|| EncodingError::UnknownSymbol(value.code_point()))?;

        encoded.extend_from_code(code);
    }

    debug!("encoded {} bits", encoded.len_bits());

    Ok(encoded)
}


/// Reads bits until they spell a code, emits its value and starts over.
///
/// The table is prefix-free, so the first match is the only possible one.
pub fn decode<T>(encoding: &BitView, inverse: &InverseCodeTable<T>) -> Result<Box<[T]>, DecodingError>
where
    T: Symbol
{

    let longest = inverse.keys()
        .map(Code::len)
        .max()
        .unwrap_or(0);

    let mut decoded = Vec::new();
    let mut buffer = Code::new_zeroed();

    for bit in encoding.iter_bits() {

        buffer = buffer.step(bit)
            .filter(|code| code.len() <= longest)
            .ok_or(DecodingError::InvalidEncoding)?;

        if let Some(value) = inverse.get(&buffer) {
            decoded.push(value.clone());
            buffer = Code::new_zeroed();
        }
    }

    if !buffer.is_empty() {
        return Err(DecodingError::TrailingBits { bits: buffer.len() });
    }

    debug!("decoded {} symbols", decoded.len());

    Ok(decoded.into_boxed_slice())
}


#[cfg(test)]
mod tests {

    use crate::code::generate;
    use crate::frequency::analyze;
    use crate::tree::build;

    use super::*;


    fn tables(text: &str) -> (CodeTable<char>, InverseCodeTable<char>) {
        generate(build(&analyze(text.chars())).as_ref()).unwrap()
    }


    fn roundtrip(text: &str) -> String {

        let (codes, inverse) = tables(text);

        let encoded = encode(text.chars(), &codes).unwrap();
        let (bytes, pad) = encoded.as_padded_bytes();

        let view = BitView::from_padded_bytes(bytes, pad).unwrap();

        decode(&view, &inverse)
            .unwrap()
            .iter()
            .collect()
    }


    #[test]
    fn small_coherency() {

        for text in ["He", "aaaa", "abracadabra", "line\nbreaks\n------\n", "ünïcödé 🦀🦀"] {
            assert_eq!(roundtrip(text), text);
        }
    }


    #[test]
    fn abracadabra_bits() {

        let (codes, _) = tables("abracadabra");

        let encoded = encode("abracadabra".chars(), &codes).unwrap();

        assert_eq!(encoded.len_bits(), 23);
        assert_eq!(encoded.as_padded_bytes(), (&[0x6E, 0x8A, 0xDC][..], 1));
    }


    #[test]
    fn encodes_owned_input() {

        let text = "aaaaaaaabbc";
        let (codes, _) = tables(text);

        let data = text.bytes().map(char::from).collect::<Vec<_>>();
        let encoded = encode(data, &codes).unwrap();

        // c and b merge first, so a sits on the right: a: 1, c: 00, b: 01
        assert_eq!(encoded.len_bits(), 8 + 2 * 2 + 2);
        assert_eq!(encoded.least_len_bytes(), 2);

        let expected = [true; 8].into_iter()
            .chain([false, true, false, true, false, false])
            .collect::<Vec<_>>();
        assert_eq!(*encoded.to_bool_slice(), *expected);
    }


    #[test]
    fn unknown_symbol() {

        let (codes, _) = tables("abc");

        assert_eq!(
            encode("abz".chars(), &codes).unwrap_err(),
            EncodingError::UnknownSymbol('z' as u32)
        );
    }


    #[test]
    fn empty_stream() {

        let (codes, inverse) = tables("");

        let encoded = encode("".chars(), &codes).unwrap();
        assert_eq!(encoded.as_padded_bytes(), (&[][..], 0));

        assert!(decode(&encoded.as_bit_view(), &inverse).unwrap().is_empty());
    }


    #[test]
    fn trailing_bits() {

        let (_, inverse) = tables("abracadabra");

        // "0" decodes to 'a', "11" is the start of 'b' or 'r'
        let bits = BitVec::from_bool_slice(&[false, true, true]);

        assert_eq!(
            decode(&bits.as_bit_view(), &inverse).unwrap_err(),
            DecodingError::TrailingBits { bits: 2 }
        );
    }


    #[test]
    fn bits_without_table() {

        let bits = BitVec::from_bool_slice(&[true]);

        assert_eq!(
            decode::<char>(&bits.as_bit_view(), &InverseCodeTable::new()).unwrap_err(),
            DecodingError::InvalidEncoding
        );
    }


    #[test]
    fn no_match_within_longest_code() {

        // An incomplete table, no code starts with "11"
        let inverse: InverseCodeTable<char> = [("0".parse::<Code>().unwrap(), 'a'), ("10".parse::<Code>().unwrap(), 'b')]
            .into_iter()
            .collect();

        let bits = BitVec::from_bool_slice(&[false, true, true, true]);

        assert_eq!(
            decode(&bits.as_bit_view(), &inverse).unwrap_err(),
            DecodingError::InvalidEncoding
        );
    }

}
