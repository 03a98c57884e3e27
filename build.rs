//! Build script to generate embedded lexical data
//!
//! Generates the stopword const array and fetches the `nlprule` English tokenizer binary
//! into `OUT_DIR`.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/stopwords_en.txt",
        &Path::new(&out_dir).join("stopwords.rs"),
        "STOPWORDS",
        "English stopwords excluded from frequency analysis (179 words)",
    );

    nlprule_build::BinaryBuilder::new(&["en"], &out_dir)
        .build()
        .expect("failed to build nlprule binaries")
        .validate()
        .expect("failed to validate nlprule binaries");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data/stopwords_en.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let words: Vec<String> = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"))
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
}
