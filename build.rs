use std::env;
use std::fs;
use std::path::Path;

const BUNDLE_DIR: &str = "assets/simulator";
const BUNDLED_FILES: [&str; 3] = ["front.jpg", "back.jpg", "video.mp4"];

fn main() {
    println!("cargo::rustc-check-cfg=cfg(simulator)");
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed={BUNDLE_DIR}");

    if !simulator_build() {
        return;
    }

    let bundle = Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap()).join(BUNDLE_DIR);
    for file in BUNDLED_FILES {
        let path = bundle.join(file);
        println!("cargo::rerun-if-changed={}", path.display());
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => {}
            Ok(_) => panic!(
                "simulator asset {} is empty or not a regular file",
                path.display()
            ),
            Err(err) => panic!("simulator asset {} is missing: {err}", path.display()),
        }
    }

    println!("cargo::rustc-cfg=simulator");
}

fn simulator_build() -> bool {
    if env::var_os("CARGO_FEATURE_SIMULATOR").is_some() {
        return true;
    }
    // Same condition as the target-specific rust-embed dependency.
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let target_abi = env::var("CARGO_CFG_TARGET_ABI").unwrap_or_default();
    target_os == "ios" && target_abi == "sim"
}
