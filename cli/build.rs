/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::io::Write;

fn main() {
    built::write_built_file().expect("Failed to acquire build-time information");

    // built does not provide the date without its chrono feature
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is not set");
    let path = std::path::Path::new(&out_dir).join("built.rs");
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(&path)
        .expect("Cannot open built.rs");
    writeln!(
        file,
        "#[allow(dead_code)]\npub const BUILD_DATE: &str = \"{}\";",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .expect("Cannot write to built.rs");
}
