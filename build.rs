//! Build script to generate embedded theme catalogs
//!
//! Reads `word|hint` theme files and generates Rust source code with const tables.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Embedded themes, in the order they appear in menus
const THEMES: &[&str] = &[
    "general",
    "animals",
    "technology",
    "food",
    "sports",
    "science",
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("themes.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated theme catalogs").unwrap();
    writeln!(output).unwrap();

    for theme in THEMES {
        let input_path = format!("data/themes/{theme}.txt");
        generate_theme_table(&mut output, &input_path, theme);
        println!("cargo:rerun-if-changed={input_path}");
    }

    // Index of all themes, keyed by name
    writeln!(output, "/// All embedded themes, keyed by name").unwrap();
    writeln!(output, "pub const THEMES: &[(&str, &[(&str, &str)])] = &[").unwrap();
    for theme in THEMES {
        writeln!(output, "    (\"{theme}\", {}),", theme.to_uppercase()).unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of embedded themes").unwrap();
    writeln!(output, "pub const THEME_COUNT: usize = {};", THEMES.len()).unwrap();
}

fn generate_theme_table(output: &mut fs::File, input_path: &str, theme: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, &str)> = content
        .lines()
        .filter_map(|line| line.trim().split_once('|'))
        .collect();
    let count = entries.len();
    let const_name = theme.to_uppercase();

    writeln!(output, "/// Words and hints for the `{theme}` theme").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (word, hint) in entries {
        writeln!(output, "    ({:?}, {:?}),", word.trim(), hint.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
    writeln!(output).unwrap();
}
