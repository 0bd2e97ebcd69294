use log::debug;
use serde::{Deserialize, Serialize};

use crate::bits::{BitReader, BitSequence, BitWriter};
use crate::error::{Error, Result};
use crate::histogram::FrequencyHistogram;
use crate::table::PrefixCodeTable;
use crate::tree::HuffmanTree;

/// Packed payload plus everything needed to unpack it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionResult {
    data: Vec<u8>,
    table: PrefixCodeTable,
    bit_length: usize,
}

impl CompressionResult {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn table(&self) -> &PrefixCodeTable {
        &self.table
    }

    /// Number of meaningful bits in `data`; the last byte may be padded.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    pub fn into_parts(self) -> (Vec<u8>, PrefixCodeTable, usize) {
        (self.data, self.table, self.bit_length)
    }

    pub fn decompress(&self) -> Result<Vec<u8>> {
        decompress(&self.data, &self.table, self.bit_length)
    }
}

/// Builds a code table from the byte frequencies of `data` and encodes `data`
/// with it.
pub fn compress(data: &[u8]) -> Result<CompressionResult> {
    let histogram = FrequencyHistogram::build(data);
    let tree = HuffmanTree::from_histogram(&histogram);
    let table = PrefixCodeTable::from_tree(&tree);

    compress_with(data, table)
}

/// Encodes `data` with an existing table.
pub fn compress_with(data: &[u8], table: PrefixCodeTable) -> Result<CompressionResult> {
    let mut out = BitWriter::new();
    for &b in data {
        out.write(table.encode(b)?);
    }

    let bit_length = out.len();
    debug!("compressed {} bytes into {} bits", data.len(), bit_length);

    Ok(CompressionResult {
        data: out.into_bytes(),
        table,
        bit_length,
    })
}

/// Decodes the first `bit_length` bits of `data` with `table`.
pub fn decompress(data: &[u8], table: &PrefixCodeTable, bit_length: usize) -> Result<Vec<u8>> {
    let mut input = BitReader::new(data);
    if bit_length > input.len() {
        return Err(Error::BitLengthOutOfRange {
            bit_length,
            available: input.len(),
        });
    }

    let mut out = Vec::new();
    let mut buffer = BitSequence::new();
    while input.position() < bit_length {
        let bit = input.read().ok_or(Error::TruncatedStream {
            bit_length,
            pending: buffer.len(),
        })?;
        buffer.push(bit);

        if table.contains(&buffer) {
            out.push(table.decode(&buffer)?);
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        return Err(Error::TruncatedStream {
            bit_length,
            pending: buffer.len(),
        });
    }

    debug!("decompressed {} bits into {} bytes", bit_length, out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::from_bit_string;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const SAMPLE: [u8; 11] = [1, 1, 1, 1, 2, 3, 4, 4, 5, 6, 6];

    #[test]
    fn compress() {
        let result = super::compress(&SAMPLE).unwrap();

        assert_eq!(result.data().len(), 4);
        assert_eq!(result.bit_length(), 28);
    }

    #[test]
    fn decompress() {
        let result = super::compress(&SAMPLE).unwrap();
        let decompressed =
            super::decompress(result.data(), result.table(), result.bit_length()).unwrap();

        assert_eq!(decompressed, SAMPLE);
    }

    #[test]
    fn padding_bits_are_zero() {
        let result = super::compress(&SAMPLE).unwrap();
        assert_eq!(result.data()[3] & 0x0f, 0);
    }

    #[test]
    fn round_trip_text() {
        let s = String::from(
            "This is a really long message, I sure do hope it encodes and decodes properly.",
        );
        let result = super::compress(s.as_bytes()).unwrap();

        assert!(result.data().len() < s.len());
        assert_eq!(String::from_utf8(result.decompress().unwrap()).unwrap(), s);
    }

    #[test]
    fn round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for len in [1usize, 2, 3, 17, 256, 1000, 4096] {
            let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let result = super::compress(&data).unwrap();

            assert!(result.table().is_prefix_free());
            assert_eq!(result.decompress().unwrap(), data, "length {len}");
        }
    }

    #[test]
    fn round_trip_single_symbol() {
        let data = vec![b'z'; 100];
        let result = super::compress(&data).unwrap();

        assert_eq!(result.bit_length(), 100);
        assert_eq!(result.decompress().unwrap(), data);
    }

    #[test]
    fn round_trip_all_bytes() {
        let data: Vec<u8> = (0..=u8::MAX).chain((0..=u8::MAX).rev()).collect();
        let result = super::compress(&data).unwrap();

        assert_eq!(result.decompress().unwrap(), data);
    }

    #[test]
    fn empty_input() {
        let result = super::compress(&[]).unwrap();

        assert!(result.data().is_empty());
        assert_eq!(result.bit_length(), 0);
        assert_eq!(result.table().len(), 256);
        assert!(result.decompress().unwrap().is_empty());
    }

    #[test]
    fn compress_with_reused_table() {
        let table = super::compress(b"abcabc").unwrap().table().clone();
        let result = compress_with(b"cab", table).unwrap();

        assert_eq!(result.decompress().unwrap(), b"cab");
    }

    #[test]
    fn compress_with_unknown_symbol() {
        let table = PrefixCodeTable::from_pairs(vec![b'a'], vec![from_bit_string("0").unwrap()])
            .unwrap();

        assert_eq!(compress_with(b"ab", table), Err(Error::UnknownSymbol(b'b')));
    }

    #[test]
    fn truncated_stream() {
        let result = super::compress(&SAMPLE).unwrap();
        let err = super::decompress(result.data(), result.table(), result.bit_length() - 1);

        assert!(matches!(err, Err(Error::TruncatedStream { bit_length: 27, pending }) if pending > 0));
    }

    #[test]
    fn bits_past_length_are_ignored() {
        let table = PrefixCodeTable::from_pairs(
            vec![1, 2],
            vec![from_bit_string("0").unwrap(), from_bit_string("11").unwrap()],
        )
        .unwrap();

        // 0 0 1 | 1 ...
        let data = [0b0011_0000];
        assert_eq!(super::decompress(&data, &table, 2), Ok(vec![1, 1]));
        assert_eq!(
            super::decompress(&data, &table, 3),
            Err(Error::TruncatedStream {
                bit_length: 3,
                pending: 1
            })
        );
        assert_eq!(super::decompress(&data, &table, 4), Ok(vec![1, 1, 2]));
    }

    #[test]
    fn bit_length_out_of_range() {
        let result = super::compress(&SAMPLE).unwrap();

        assert_eq!(
            super::decompress(result.data(), result.table(), 33),
            Err(Error::BitLengthOutOfRange {
                bit_length: 33,
                available: 32
            })
        );
    }

    #[test]
    fn serde_round_trip() {
        let result = super::compress(b"Hello my name is Sam!").unwrap();

        let packed = rmp_serde::to_vec(&result).unwrap();
        let unpacked: CompressionResult = rmp_serde::from_slice(&packed).unwrap();

        assert_eq!(unpacked, result);
        assert_eq!(unpacked.decompress().unwrap(), b"Hello my name is Sam!");
    }
}
