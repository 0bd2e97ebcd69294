//! Static Huffman coding over bytes.
//!
//! [`compress`] counts byte frequencies and builds a Huffman tree covering all
//! 256 byte values. It derives a [`PrefixCodeTable`] from the tree and packs the
//! input into a bit stream. [`decompress`] needs the same table and the exact
//! bit length to recover the input.
//!
//! ```
//! let result = static_huffman::compress(b"abracadabra").unwrap();
//! assert_eq!(result.decompress().unwrap(), b"abracadabra");
//! ```

pub mod bits;
pub mod codec;
pub mod error;
pub mod histogram;
pub mod node;
pub mod table;
pub mod tree;

pub use codec::{compress, compress_with, decompress, CompressionResult};
pub use error::{Error, Result};
pub use histogram::{FrequencyHistogram, SYMBOL_COUNT};
pub use node::{Node, NodeArena, NodeId};
pub use table::{PrefixCodeTable, SerializablePrefixCodeTable};
pub use tree::HuffmanTree;
