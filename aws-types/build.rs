/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use rustc_version::version;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var_os("OUT_DIR").expect("cargo always sets OUT_DIR");
    let dest = Path::new(&out_dir).join("build_env.rs");
    let rust_version = version().expect("rustc version is available").to_string();
    let mut out = File::create(&dest).expect("OUT_DIR is writable");
    writeln!(out, "const RUST_VERSION: &str = {:?};", rust_version).expect("write succeeds");
    println!("cargo:rerun-if-changed=build.rs");
}
