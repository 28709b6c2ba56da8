//! Build script to generate embedded word lists
//!
//! Reads one word list per supported length and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LENGTHS: [usize; 3] = [3, 4, 5];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("words.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for length in LENGTHS {
        let input_path = format!("data/words_{length}.txt");
        generate_word_list(&input_path, &mut output, length);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(input_path: &str, output: &mut fs::File, length: usize) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|word| word.len() == length)
        .collect();
    let count = words.len();

    writeln!(output, "/// Embedded {length}-letter words ({count} words)").unwrap();
    writeln!(output, "pub const WORDS_{length}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_uppercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in WORDS_{length}").unwrap();
    writeln!(output, "pub const WORDS_{length}_COUNT: usize = {count};").unwrap();
    writeln!(output).unwrap();
}
