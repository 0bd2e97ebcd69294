//! Bit-level stream primitives used by the codec.
//!
//! Bits are packed most-significant first, so the first bit written lands in
//! the high bit of the first byte.

use bitvec::prelude::*;

use crate::error::{Error, Result};

pub type BitSequence = BitVec<u8, Msb0>;

/// Renders a bit sequence as a string of `'0'` and `'1'` characters.
pub fn to_bit_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

/// Parses a string of `'0'` and `'1'` characters into a bit sequence.
pub fn from_bit_string(s: &str) -> Result<BitSequence> {
    s.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(Error::InvalidBitString(other)),
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct BitWriter {
    bits: BitSequence,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn write(&mut self, bits: &BitSlice<u8, Msb0>) {
        self.bits.extend_from_bitslice(bits);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Packs the written bits into bytes. Bits past `len()` in the last byte
    /// are zero.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bits.set_uninitialized(false);
        self.bits.into_vec()
    }
}

#[derive(Debug)]
pub struct BitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    position: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bits: bytes.view_bits::<Msb0>(),
            position: 0,
        }
    }

    /// Total number of bits available in the underlying bytes.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn read(&mut self) -> Option<bool> {
        let bit = *self.bits.get(self.position)?;
        self.position += 1;
        Some(bit)
    }
}
