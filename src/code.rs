use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::{EncodingError, FormatError};
use crate::symbol::Symbol;
use crate::tree::Node;


/// The longest code a `Code` can hold
pub const MAX_CODE_LEN: u8 = u64::BITS as u8;


pub type CodeTable<T> = HashMap<T, Code>;

pub type InverseCodeTable<T> = HashMap<Code, T>;


/// The path from the root of the tree to a value.
/// Left is 0, right is 1, the first step is the most significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {

    /// The actual path, right-aligned
    bits: u64,
    /// How many bits have meaning
    meaningful: u8

}

impl Code {

    pub const fn new_zeroed() -> Self {
        Self {
            bits: 0,
            meaningful: 0
        }
    }


    /// Extends the path by one step. Returns `None` once the code is full.
    pub const fn step(&self, right: bool) -> Option<Self> {

        if self.meaningful == MAX_CODE_LEN {
            return None;
        }

        Some(Self {
            bits: (self.bits << 1) | right as u64,
            meaningful: self.meaningful + 1
        })
    }


    pub const fn step_left(&self) -> Option<Self> {
        self.step(false)
    }


    pub const fn step_right(&self) -> Option<Self> {
        self.step(true)
    }


    pub const fn len(&self) -> u8 {
        self.meaningful
    }


    pub const fn is_empty(&self) -> bool {
        self.meaningful == 0
    }


    pub fn iter_bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.meaningful)
            .rev()
            .map(|i| (self.bits & (1_u64 << i)) != 0)
    }

}

impl fmt::Display for Code {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter_bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {

        if s.is_empty() {
            return Err(FormatError::InvalidCode(s.to_owned()));
        }

        s.chars().try_fold(Code::new_zeroed(), |code, ch| {
            match ch {
                '0' => code.step_left(),
                '1' => code.step_right(),
                _ => None
            }
        })
        .ok_or_else(|| FormatError::InvalidCode(s.to_owned()))
    }
}


/// Walks the tree and assigns every leaf its root-to-leaf path.
///
/// A tree that is a single leaf gives its value the one-bit code `0`.
/// No tree gives two empty tables.
pub fn generate<T>(root: Option<&Node<T>>) -> Result<(CodeTable<T>, InverseCodeTable<T>), EncodingError>
where
    T: Symbol
{

    let mut codes = CodeTable::new();
    let mut inverse = InverseCodeTable::new();

    let Some(root) = root else {
        return Ok((codes, inverse));
    };

    let mut stack = vec![(root, Code::new_zeroed())];

    while let Some((node, code)) = stack.pop() {

        match node {

            Node::Parent { left, right, .. } => {
                // Right goes first so that left is visited first
                stack.push((right, code.step_right().ok_or(EncodingError::CodeTooLong)?));
                stack.push((left, code.step_left().ok_or(EncodingError::CodeTooLong)?));
            },

            Node::Leaf { value, count } => {

                let code = if code.is_empty() {
                    code.step_left().ok_or(EncodingError::CodeTooLong)?
                } else {
                    code
                };

                trace!("{value:?} ({count} occurrences) -> {code}");

                codes.insert(value.clone(), code);
                inverse.insert(code, value.clone());
            },
        }
    }

    Ok((codes, inverse))
}
