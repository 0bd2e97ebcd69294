use static_huffman::{bits::to_bit_string, compress};

fn main() {
    let s = String::from("Hello my name is Sam!");
    let result = compress(s.as_bytes()).unwrap();

    for &b in s.as_bytes().iter().take(5) {
        println!("{:?} -> {}", b as char, to_bit_string(result.table().encode(b).unwrap()));
    }
    println!("{} bytes -> {} bits", s.len(), result.bit_length());

    let dec = String::from_utf8(result.decompress().unwrap());

    println!("{:?}", dec);
}
