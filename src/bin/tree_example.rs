use huffman_decoder::huffman::{DecodeError, HuffmanTree, SymbolCode};

fn render_bits(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

fn encode(table: &[SymbolCode], message: &str) -> Vec<bool> {
    message
        .chars()
        .flat_map(|symbol| {
            table
                .iter()
                .find(|code| code.symbol == symbol)
                .map(|code| code.bits.clone())
                .unwrap_or_default()
        })
        .collect()
}

fn main() -> Result<(), DecodeError> {
    // symbol-frequency pairs
    let syms_and_freqs = vec![('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)];

    let mut tree = HuffmanTree::new();
    for &(symbol, frequency) in syms_and_freqs.iter() {
        tree.insert_frequency(symbol, frequency);
    }
    println!("pending heap\n{}", tree.heap_listing());

    tree.build();
    println!("huffman tree\n{}", tree);

    let table = tree.code_table();
    println!("code table");
    for code in table.iter() {
        println!("{} -> {}", code.symbol, render_bits(&code.bits));
    }

    let message = "decaf";
    let encoded = encode(&table, message);
    println!("sequence to encode\n{:?}", message);
    println!("encoded sequence\n{}", render_bits(&encoded));
    println!("decoded sequence\n{}", tree.decode(&encoded)?);
    Ok(())
}
