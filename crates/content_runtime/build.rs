use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentManifest {
    schema_version: u32,
    #[serde(default = "default_root")]
    root: String,
    #[serde(default)]
    preload: Vec<String>,
}

fn default_root() -> String {
    "/".to_string()
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("content.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: ContentManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if let Some(idx) = manifest.preload.iter().position(|name| name.trim().is_empty()) {
        panic!("empty preload entry {idx} in {}", path.display());
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize content manifest");
    let generated = format!(
        "/// Build-time generated content manifest JSON.\n\
pub const CONTENT_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("content_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
