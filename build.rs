use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

// Emits OUT_DIR/app_metadata.rs with package metadata and the encryption
// key material used by the credential cache. Keys come from ENCRYPTION_KEY /
// ENCRYPTION_IV (optionally via .env); without them a deterministic
// package-derived fallback is used and a warning is printed.

fn write_str_const(file: &mut File, key: &str, value: &str) -> io::Result<()> {
    write!(file, "#[allow(unused)]\npub const APP_METADATA_{}: &str = \"{}\";\n", key.to_uppercase(), value)
}

fn write_bytes_const(file: &mut File, key: &str, value: &[u8]) -> io::Result<()> {
    write!(file, "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[", key.to_uppercase(), value.len())?;
    for (i, byte) in value.iter().enumerate() {
        if i > 0 {
            write!(file, ", ")?;
        }
        write!(file, "{}", byte)?;
    }
    writeln!(file, "];")
}

fn padded(mut value: String, len: usize) -> Vec<u8> {
    value.truncate(len);
    while value.len() < len {
        value.push('!');
    }
    value.into_bytes()
}

fn encryption_material() -> (Vec<u8>, Vec<u8>) {
    match (env::var("ENCRYPTION_KEY"), env::var("ENCRYPTION_IV")) {
        (Ok(key), Ok(iv)) => {
            assert!(key.len() == 32, "ENCRYPTION_KEY must be exactly 32 bytes long, got {} bytes", key.len());
            assert!(iv.len() == 16, "ENCRYPTION_IV must be exactly 16 bytes long, got {} bytes", iv.len());
            (key.into_bytes(), iv.into_bytes())
        }
        _ => {
            let package_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "liftlog".to_string());

            println!("cargo:warning=ENCRYPTION_KEY or ENCRYPTION_IV not found in environment.");
            println!("cargo:warning=Using default keys. For production, create a .env file with:");
            println!("cargo:warning=ENCRYPTION_KEY=your_32_byte_key_here!!!!!!!!!");
            println!("cargo:warning=ENCRYPTION_IV=your_16_byte_iv!");

            (
                padded(format!("{}_default_encryption_key_32b", package_name), 32),
                padded(format!("{}_iv_16b", package_name), 16),
            )
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenv();

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("app_metadata.rs");
    let mut metadata_file = File::create(dest_path)?;

    write_str_const(&mut metadata_file, "NAME", &env::var("CARGO_PKG_NAME").unwrap())?;
    write_str_const(&mut metadata_file, "VERSION", &env::var("CARGO_PKG_VERSION").unwrap())?;

    // Anything under [package.metadata] is exposed as a constant too.
    let cargo_toml = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let cargo_toml: Value = toml::from_str(&cargo_toml).expect("Failed to parse Cargo.toml");
    if let Some(metadata) = cargo_toml.get("package").and_then(|pkg| pkg.get("metadata")).and_then(|meta| meta.as_table()) {
        for (key, value) in metadata {
            if let Some(value) = value.as_str() {
                write_str_const(&mut metadata_file, key, value)?;
            }
        }
    }

    let (encryption_key, encryption_iv) = encryption_material();
    write_bytes_const(&mut metadata_file, "ENCRYPTION_KEY", &encryption_key)?;
    write_bytes_const(&mut metadata_file, "ENCRYPTION_IV", &encryption_iv)?;

    Ok(())
}
