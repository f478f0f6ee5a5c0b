use std::path::Path;

use anyhow::Result;
use oboczne_core::{parse_with, read_dictionary, ParseOptions};

pub fn run(dictionary: &Path, options: &ParseOptions) -> Result<()> {
    let dict_text = read_dictionary(dictionary)?;
    let groups = parse_with(&dict_text, options);

    for group in &groups {
        println!("{group}");
    }
    eprintln!("{} variant groups", groups.len());

    Ok(())
}
