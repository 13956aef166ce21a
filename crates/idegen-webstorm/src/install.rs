//! Where WebStorm gets installed on each platform.

use idegen_core::HostContext;
use idegen_locate::PathSegment;
use idegen_types::config::WebStormSettings;
use idegen_types::{IdegenError, Platform, Result};
use regex::Regex;
use std::path::PathBuf;

/// Install locations searched for the WebStorm executable.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    /// Candidate install roots, in priority order
    pub roots: Vec<PathBuf>,
    /// Pattern matching versioned install directories under a root
    pub version_pattern: Regex,
    /// Segments from the versioned directory to the executable's directory
    pub bin_segments: Vec<PathSegment>,
    /// Executable file name
    pub executable_name: String,
    /// Launcher commands looked up on `PATH` when no install is found
    pub launchers: Vec<String>,
}

impl InstallLayout {
    /// Default layout for the host's platform.
    pub fn for_host(host: &HostContext) -> Result<Self> {
        let (roots, pattern, bin, exe, launchers): (Vec<PathBuf>, &str, &[&str], &str, &[&str]) =
            match host.platform {
                Platform::Windows => (
                    vec![
                        PathBuf::from("C:/Program Files/JetBrains"),
                        PathBuf::from("C:/Program Files (x86)/JetBrains"),
                    ],
                    r"^WebStorm\s*[.\d]+$",
                    &["bin"],
                    "WebStorm.exe",
                    &["webstorm64.exe", "webstorm.cmd"],
                ),
                Platform::MacOs => (
                    vec![PathBuf::from("/Applications")],
                    r"^WebStorm.*\.app$",
                    &["Contents", "MacOS"],
                    "webstorm",
                    &["webstorm", "wstorm"],
                ),
                Platform::Linux => (
                    vec![PathBuf::from("/opt"), PathBuf::from("/usr/local")],
                    r"^(jetbrains-)?[Ww]eb[Ss]torm.*$",
                    &["bin"],
                    "webstorm.sh",
                    &["webstorm", "wstorm"],
                ),
            };

        let version_pattern = Regex::new(pattern)
            .map_err(|e| IdegenError::Bug(format!("built-in pattern '{}' is invalid: {}", pattern, e)))?;

        Ok(Self {
            roots,
            version_pattern,
            bin_segments: bin.iter().map(|s| PathSegment::literal(*s)).collect(),
            executable_name: exe.to_string(),
            launchers: launchers.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Platform defaults with the user's settings applied on top.
    ///
    /// # Errors
    ///
    /// Returns `Config` if a configured pattern or segment is not a valid
    /// regular expression.
    pub fn from_settings(host: &HostContext, settings: &WebStormSettings) -> Result<Self> {
        let mut layout = Self::for_host(host)?;

        if let Some(roots) = &settings.install_roots {
            layout.roots = roots.iter().map(|root| host.expand(root)).collect();
        }
        if let Some(pattern) = &settings.version_pattern {
            layout.version_pattern = Regex::new(pattern).map_err(|e| {
                IdegenError::Config(format!("Invalid webstorm.version_pattern '{}': {}", pattern, e))
            })?;
        }
        if let Some(segments) = &settings.bin_segments {
            layout.bin_segments = segments
                .iter()
                .map(|s| PathSegment::parse(s))
                .collect::<Result<_>>()
                .map_err(|e| IdegenError::Config(format!("Invalid webstorm.bin_segments: {}", e)))?;
        }
        if let Some(name) = &settings.executable_name {
            layout.executable_name = name.clone();
        }

        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_defaults() {
        let host = HostContext::new(Platform::Windows, "C:/Users/dev");
        let layout = InstallLayout::for_host(&host).unwrap();

        assert_eq!(layout.roots[1], PathBuf::from("C:/Program Files (x86)/JetBrains"));
        assert!(layout.version_pattern.is_match("WebStorm 2020.1"));
        assert!(layout.version_pattern.is_match("WebStorm8.0.1"));
        assert!(!layout.version_pattern.is_match("WebStormBeta"));
        assert_eq!(layout.executable_name, "WebStorm.exe");
        assert_eq!(layout.launchers, vec!["webstorm64.exe", "webstorm.cmd"]);
    }

    #[test]
    fn test_macos_defaults() {
        let host = HostContext::new(Platform::MacOs, "/Users/dev");
        let layout = InstallLayout::for_host(&host).unwrap();

        assert_eq!(layout.roots, vec![PathBuf::from("/Applications")]);
        assert_eq!(layout.launchers, vec!["webstorm", "wstorm"]);
        assert!(layout.version_pattern.is_match("WebStorm 2021.1.app"));
        assert_eq!(layout.bin_segments, vec![PathSegment::literal("Contents"), PathSegment::literal("MacOS")]);
    }

    #[test]
    fn test_settings_override_defaults() {
        let host = HostContext::new(Platform::Linux, "/home/dev");
        let settings = WebStormSettings {
            install_roots: Some(vec![PathBuf::from("~/apps")]),
            version_pattern: Some("^WebStorm-.*$".to_string()),
            bin_segments: Some(vec!["re:^ch-\\d$".to_string(), "bin".to_string()]),
            executable_name: Some("webstorm".to_string()),
            ..Default::default()
        };

        let layout = InstallLayout::from_settings(&host, &settings).unwrap();
        assert_eq!(layout.roots, vec![PathBuf::from("/home/dev/apps")]);
        assert!(layout.version_pattern.is_match("WebStorm-2021.1"));
        assert!(layout.bin_segments[0].is_pattern());
        assert_eq!(layout.executable_name, "webstorm");
        assert_eq!(layout.launchers, vec!["webstorm", "wstorm"]);
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let host = HostContext::new(Platform::Linux, "/home/dev");
        let settings = WebStormSettings {
            version_pattern: Some("WebStorm(".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            InstallLayout::from_settings(&host, &settings),
            Err(IdegenError::Config(_))
        ));
    }
}
