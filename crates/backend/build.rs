use std::env;
use std::fs;
use std::path::Path;

/// Кладёт config.toml и описание панели config.json рядом с бинарником
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../config.json");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    for file in ["config.toml", "config.json"] {
        let source = workspace_root.join(file);
        let dest = target_dir.join(file);
        if source.exists() {
            fs::copy(&source, &dest).unwrap_or_else(|e| panic!("Failed to copy {file}: {e}"));
        } else {
            println!("cargo:warning={file} not found at {:?}, using defaults", source);
        }
    }
}
