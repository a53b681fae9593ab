use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Export KEY=VALUE pairs from .env as compile-time env vars so that
    // option_env!() picks them up (BACKEND_URL, map defaults, ...)
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // A variable already set in the environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, building with default settings (backend at http://localhost:8000).");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
