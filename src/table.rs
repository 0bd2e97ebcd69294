use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bits::{to_bit_string, BitSequence};
use crate::error::{Error, Result};
use crate::tree::HuffmanTree;

/// Symbol to prefix code mapping, shortest codes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "SerializablePrefixCodeTable",
    try_from = "SerializablePrefixCodeTable"
)]
pub struct PrefixCodeTable {
    symbols: Vec<u8>,
    codes: Vec<BitSequence>,
}

impl PrefixCodeTable {
    /// Traces every leaf back to the root. Entries are ordered by code length;
    /// codes of equal length stay in byte order.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut entries: Vec<(u8, BitSequence)> = tree
            .leaves()
            .iter()
            .filter_map(|&leaf| {
                let symbol = tree.node(leaf).symbol()?;
                Some((symbol, tree.arena().build_bit_sequence(leaf)))
            })
            .collect();

        entries.sort_by_key(|(_, code)| code.len());

        let (symbols, codes) = entries.into_iter().unzip();
        Self { symbols, codes }
    }

    pub fn from_pairs(symbols: Vec<u8>, codes: Vec<BitSequence>) -> Result<Self> {
        if symbols.len() != codes.len() {
            return Err(Error::InvalidTable {
                symbols: symbols.len(),
                codes: codes.len(),
            });
        }

        Ok(Self { symbols, codes })
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn codes(&self) -> &[BitSequence] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> + '_ {
        self.symbols
            .iter()
            .copied()
            .zip(self.codes.iter().map(|c| c.as_bitslice()))
    }

    pub fn encode(&self, symbol: u8) -> Result<&BitSlice<u8, Msb0>> {
        self.iter()
            .find(|&(s, _)| s == symbol)
            .map(|(_, code)| code)
            .ok_or(Error::UnknownSymbol(symbol))
    }

    pub fn decode(&self, code: &BitSlice<u8, Msb0>) -> Result<u8> {
        self.iter()
            .find(|&(_, c)| c == code)
            .map(|(symbol, _)| symbol)
            .ok_or_else(|| Error::UnknownCode(to_bit_string(code)))
    }

    pub fn contains(&self, code: &BitSlice<u8, Msb0>) -> bool {
        self.codes.iter().any(|c| c.as_bitslice() == code)
    }

    /// Whether no code is a prefix of (or equal to) another.
    pub fn is_prefix_free(&self) -> bool {
        self.codes.iter().enumerate().all(|(i, a)| {
            self.codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || b.len() < a.len() || b[..a.len()] != a[..])
        })
    }
}

/// Serde form of a [`PrefixCodeTable`]: each code is stored as its bit length
/// and its packed bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializablePrefixCodeTable {
    symbols: Vec<u8>,
    codes: Vec<(usize, Vec<u8>)>,
}

impl From<PrefixCodeTable> for SerializablePrefixCodeTable {
    fn from(table: PrefixCodeTable) -> Self {
        Self {
            symbols: table.symbols,
            codes: table
                .codes
                .into_iter()
                .map(|code| (code.len(), code.into_vec()))
                .collect(),
        }
    }
}

impl TryFrom<SerializablePrefixCodeTable> for PrefixCodeTable {
    type Error = Error;

    fn try_from(other: SerializablePrefixCodeTable) -> Result<Self> {
        let codes = other
            .codes
            .into_iter()
            .map(|(len, bytes)| {
                let mut bv = BitSequence::from_vec(bytes);
                bv.resize(len, false);
                bv
            })
            .collect();

        Self::from_pairs(other.symbols, codes)
    }
}
