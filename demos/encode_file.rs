use serde::{Deserialize, Serialize};
use static_huffman::{compress, decompress, CompressionResult, PrefixCodeTable};
use std::env;
use std::fs;

#[derive(Serialize, Deserialize)]
struct HuffmanSerialized {
    data: Vec<u8>,
    bit_len: usize,
    table: PrefixCodeTable,
}

impl HuffmanSerialized {
    fn new(result: CompressionResult) -> Self {
        let (data, table, bit_len) = result.into_parts();

        Self {
            data,
            bit_len,
            table,
        }
    }
}

fn main() {
    let fp = env::args().nth(1).expect("Please provide path to input file as first argument.");

    let input_bytes = fs::read(fp).expect("First argument was not a valid filepath.");

    // encode scope - save to file
    {
        let result = compress(&input_bytes).unwrap();
        println!(
            "{} bytes -> {} bits ({} bytes)",
            input_bytes.len(),
            result.bit_length(),
            result.data().len()
        );

        let packed = HuffmanSerialized::new(result);
        let data = rmp_serde::to_vec(&packed).unwrap();

        fs::write("encoded.mp", data).unwrap();
    }

    // decode scope - read from file
    {
        let file_data = fs::read("encoded.mp").unwrap();

        let packed: HuffmanSerialized = rmp_serde::from_slice(&file_data).unwrap();
        let decoded = decompress(&packed.data, &packed.table, packed.bit_len).unwrap();

        assert_eq!(decoded, input_bytes);
        fs::write("decoded.txt", decoded).unwrap();
    }
}
