//! Expected resource files

use serde::Serialize;

/// Recommended screenshot aspect ratio (portrait 9:16).
pub const SCREENSHOT_RATIO: f64 = 9.0 / 16.0;

/// Allowed deviation from [`SCREENSHOT_RATIO`].
pub const RATIO_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Required,
    Optional,
    Screenshot,
}

/// One expected file, relative to the public directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceSpec {
    pub path: &'static str,
    pub kind: ResourceKind,
    pub description: &'static str,
    /// Declared `(width, height)` for PNG icons.
    pub declared_size: Option<(u32, u32)>,
}

const fn required(path: &'static str, description: &'static str, size: u32) -> ResourceSpec {
    ResourceSpec {
        path,
        kind: ResourceKind::Required,
        description,
        declared_size: Some((size, size)),
    }
}

const fn optional(path: &'static str, description: &'static str) -> ResourceSpec {
    ResourceSpec {
        path,
        kind: ResourceKind::Optional,
        description,
        declared_size: None,
    }
}

const fn screenshot(path: &'static str, description: &'static str) -> ResourceSpec {
    ResourceSpec {
        path,
        kind: ResourceKind::Screenshot,
        description,
        declared_size: None,
    }
}

pub const RESOURCES: [ResourceSpec; 10] = [
    required("pwa-192x192.png", "App icon, small", 192),
    required("pwa-512x512.png", "App icon, large", 512),
    optional("pwa-icon.svg", "Vector app icon"),
    optional("favicon.ico", "Browser tab icon"),
    optional("apple-touch-icon.png", "iOS home screen icon"),
    optional("mask-icon.svg", "Safari pinned tab icon"),
    screenshot("screenshots/home.png", "Home screen"),
    screenshot("screenshots/market.png", "Market screen"),
    screenshot("screenshots/trade.png", "Trade screen"),
    screenshot("screenshots/assets.png", "Assets screen"),
];

/// Whether `width:height` is within [`RATIO_TOLERANCE`] of 9:16.
pub fn has_screenshot_ratio(width: u32, height: u32) -> bool {
    if height == 0 {
        return false;
    }
    (width as f64 / height as f64 - SCREENSHOT_RATIO).abs() <= RATIO_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_icons_declare_square_sizes() {
        let required: Vec<_> = RESOURCES.iter().filter(|r| r.kind == ResourceKind::Required).collect();
        assert_eq!(required.len(), 2);
        assert_eq!(required[0].declared_size, Some((192, 192)));
        assert_eq!(required[1].declared_size, Some((512, 512)));
    }

    #[test]
    fn test_screenshot_ratio() {
        assert!(has_screenshot_ratio(540, 960));
        assert!(has_screenshot_ratio(1080, 1920));
        assert!(!has_screenshot_ratio(960, 540));
        assert!(!has_screenshot_ratio(600, 960));
        assert!(!has_screenshot_ratio(540, 0));
    }
}
