use crate::code::Code;
use crate::error::DecodingError;


/// Growable bit sequence packed into bytes, most significant bit first.
#[derive(Debug, PartialEq)]
pub struct BitVec {

    /// The actual raw bits
    raw_data: Vec<u8>,
    /// How many bits of padding the last byte contains.
    /// Padding bits are zero and have no meaning
    last_byte_padding: u8

}

impl BitVec {

    pub fn new() -> Self {
        Self {
            raw_data: Vec::new(),
            last_byte_padding: 0
        }
    }


    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw_data: Vec::with_capacity(least_bytes_repr_for_bits(capacity)),
            last_byte_padding: 0
        }
    }


    pub fn len_bits(&self) -> usize {
        self.raw_data.len() * 8 - self.last_byte_padding as usize
    }


    #[cfg(test)]
    pub fn least_len_bytes(&self) -> usize {
        self.raw_data.len()
    }


    pub fn append_bit(&mut self, bit: bool) {

        if self.last_byte_padding == 0 {

            self.raw_data.push((bit as u8) << 7);
            self.last_byte_padding = 7;

        } else if let Some(last_byte) = self.raw_data.last_mut() {

            // An empty vec has no padding, so there always is a last byte here
            *last_byte |= (bit as u8) << (self.last_byte_padding - 1);

            self.last_byte_padding -= 1;
        }
    }


    pub fn extend_from_code(&mut self, code: &Code) {
        for bit in code.iter_bits() {
            self.append_bit(bit)
        }
    }


    pub fn as_bit_view(&self) -> BitView {
        BitView {
            raw_data: &self.raw_data,
            last_byte_padding: self.last_byte_padding
        }
    }


    #[cfg(test)]
    pub fn iter_bits(&self) -> BitIterator {
        BitIterator {
            bits: self.as_bit_view(),
            i: 0,
        }
    }


    /// The packed bytes and how many zero bits pad the last one
    pub fn as_padded_bytes(&self) -> (&[u8], u8) {
        (
            &self.raw_data,
            self.last_byte_padding
        )
    }


    #[cfg(test)]
    pub fn from_bool_slice(bools: &[bool]) -> Self {

        let mut res = Self::with_capacity(bools.len());

        for &b in bools {
            res.append_bit(b)
        }

        res
    }


    #[cfg(test)]
    pub fn to_bool_slice(&self) -> Box<[bool]> {
        self.iter_bits()
            .collect()
    }

}

impl Default for BitVec {
    fn default() -> Self {
        Self::new()
    }
}


const fn least_bytes_repr_for_bits(bit_count: usize) -> usize {
    bit_count / 8 + (bit_count % 8 != 0) as usize
}


/// Borrowed bit sequence, typically the payload of a compressed artifact.
#[derive(Debug, Clone)]
pub struct BitView<'a> {

    raw_data: &'a [u8],
    last_byte_padding: u8

}

impl<'a> BitView<'a> {

    /// Views `bytes` as a bit sequence whose last `last_byte_padding` bits are dropped.
    pub fn from_padded_bytes(bytes: &'a [u8], last_byte_padding: u8) -> Result<BitView<'a>, DecodingError> {

        if last_byte_padding > 7 || (bytes.is_empty() && last_byte_padding != 0) {
            return Err(DecodingError::InvalidPadding { pad: last_byte_padding });
        }

        Ok(Self {
            raw_data: bytes,
            last_byte_padding
        })
    }


    pub fn len_bits(&self) -> usize {
        self.raw_data.len() * 8 - self.last_byte_padding as usize
    }


    pub fn iter_bits(&self) -> BitIterator<'a> {
        BitIterator {
            bits: self.clone(),
            i: 0
        }
    }


    #[cfg(test)]
    pub fn to_bool_slice(&self) -> Box<[bool]> {
        self.iter_bits()
            .collect()
    }

}


pub struct BitIterator<'a> {

    bits: BitView<'a>,
    i: usize

}

impl<'a> Iterator for BitIterator<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {

        if self.i >= self.bits.len_bits() {
            return None;
        }

        let byte = self.bits.raw_data[self.i / 8];
        let bit_in_byte_i = (self.i % 8) as u8;

        self.i += 1;

        Some(
            (byte & (1_u8 << (7 - bit_in_byte_i))) != 0
        )
    }


    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.len_bits().saturating_sub(self.i);
        (remaining, Some(remaining))
    }
}
