use huffman_coder::{CodeTable, HuffmanEncoder};

fn main() -> huffman_coder::Result<()> {
    let source = "she sells seashells by the seashore";
    let tree = HuffmanEncoder::new().encode_reader(source.as_bytes())?;

    println!("Huffman tree for {:?}", source);
    println!("{}", tree.to_canonical_string());
    println!("{}", tree);

    let codes = CodeTable::new(&tree);
    print!("{}", codes);
    Ok(())
}
