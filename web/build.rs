//! Generates the validators, wrappers and dispatchers of `src/api.rs`.

use apigen_core::{generate, GeneratorConfig};
use std::error::Error;
use std::path::PathBuf;
use std::{env, fs};

const INPUT: &str = "src/api.rs";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed={}", INPUT);

    let source = fs::read_to_string(INPUT)?;
    let unit = generate(&source, &GeneratorConfig::default())?;

    let out = PathBuf::from(env::var("OUT_DIR")?).join("api_gen.rs");
    fs::write(out, unit.source)?;
    Ok(())
}
