/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

/// Facts about the build, used to construct user agents
pub struct BuildMetadata {
    pub rust_version: &'static str,
    pub core_pkg_version: &'static str,
    pub os_family: OsFamily,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Linux,
    Macos,
    Android,
    Ios,
    Other,
}

impl OsFamily {
    pub const fn from_env() -> Self {
        if cfg!(target_os = "windows") {
            OsFamily::Windows
        } else if cfg!(target_os = "macos") {
            OsFamily::Macos
        } else if cfg!(target_os = "ios") {
            OsFamily::Ios
        } else if cfg!(target_os = "android") {
            OsFamily::Android
        } else if cfg!(target_os = "linux") {
            OsFamily::Linux
        } else {
            OsFamily::Other
        }
    }
}

pub static BUILD_METADATA: BuildMetadata = BuildMetadata {
    rust_version: RUST_VERSION,
    core_pkg_version: env!("CARGO_PKG_VERSION"),
    os_family: OsFamily::from_env(),
};

#[cfg(test)]
mod test {
    use crate::build_metadata::BUILD_METADATA;

    #[test]
    fn valid_build_metadata() {
        let meta = &BUILD_METADATA;
        assert!(meta.rust_version.starts_with("1."));
        assert!(meta.core_pkg_version.starts_with("0."));
    }
}
