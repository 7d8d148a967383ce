//! # Install Environment
//!
//! Device and browser detection from the user-agent string, used to pick the
//! manual install guide when no native install prompt was captured.

/// Device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Ios,
    Android,
    Desktop,
}

/// Browser family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Edge,
    Safari,
    Firefox,
    Unknown,
}

impl Browser {
    pub fn name(&self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Edge => "Edge",
            Browser::Safari => "Safari",
            Browser::Firefox => "Firefox",
            Browser::Unknown => "Unknown browser",
        }
    }
}

/// Which guide to show on the install page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallGuide {
    Installed,
    Ios,
    DesktopChromium,
    FirefoxLimited,
    Unsupported,
}

impl InstallGuide {
    pub fn icon(&self) -> &'static str {
        match self {
            InstallGuide::Installed => "✅",
            InstallGuide::Ios => "🍎",
            InstallGuide::DesktopChromium => "💻",
            InstallGuide::FirefoxLimited => "🦊",
            InstallGuide::Unsupported => "ℹ️",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            InstallGuide::Installed => "App installed",
            InstallGuide::Ios => "Installing on iOS",
            InstallGuide::DesktopChromium => "Installing on desktop",
            InstallGuide::FirefoxLimited => "Limited support in Firefox",
            InstallGuide::Unsupported => "Supported browser required",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InstallGuide::Installed => "The app is installed and can be launched from your home screen or desktop.",
            InstallGuide::Ios => "Tap the Share button ⎙ at the bottom of Safari, then choose \"Add to Home Screen\".",
            InstallGuide::DesktopChromium => {
                "Click the install icon ⊕ at the right of the address bar, or choose \"Install app\" from the browser menu."
            }
            InstallGuide::FirefoxLimited => {
                "Firefox has limited support for installable apps. Use Chrome or Edge for the best experience."
            }
            InstallGuide::Unsupported => "Open this page in Chrome, Edge or Safari to install the app.",
        }
    }
}

/// Instructions shown when "install" is pressed without a captured prompt.
pub const MANUAL_INSTALL_HINT: &str =
    "Open the browser menu ⋮ and choose \"Install app\" or \"Add to Home Screen\".";

/// Parsed user agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub device: Device,
    pub browser: Browser,
    pub browser_version: String,
}

impl Environment {
    pub fn from_user_agent(ua: &str) -> Self {
        let ios = ["iPad", "iPhone", "iPod"].iter().any(|m| ua.contains(m)) && !ua.contains("CriOS");
        let android = ua.contains("Android") && !["X11", "Macintosh", "Windows"].iter().any(|m| ua.contains(m));
        let device = if ios {
            Device::Ios
        } else if android {
            Device::Android
        } else {
            Device::Desktop
        };

        let (browser, marker) = if ua.contains("Edg") {
            (Browser::Edge, "Edg/")
        } else if ua.contains("Chrome") {
            (Browser::Chrome, "Chrome/")
        } else if ua.contains("Safari") {
            (Browser::Safari, "Version/")
        } else if ua.contains("Firefox") {
            (Browser::Firefox, "Firefox/")
        } else {
            (Browser::Unknown, "")
        };

        let browser_version = if marker.is_empty() {
            String::new()
        } else {
            version_after(ua, marker)
        };

        Self {
            device,
            browser,
            browser_version,
        }
    }

    pub fn is_desktop(&self) -> bool {
        self.device == Device::Desktop
    }

    /// Guide for this environment; `installed` covers both standalone mode and a
    /// positive installed-apps probe.
    pub fn guide(&self, installed: bool) -> InstallGuide {
        if installed {
            InstallGuide::Installed
        } else if self.device == Device::Ios {
            InstallGuide::Ios
        } else if self.is_desktop() && matches!(self.browser, Browser::Chrome | Browser::Edge) {
            InstallGuide::DesktopChromium
        } else if self.browser == Browser::Firefox {
            InstallGuide::FirefoxLimited
        } else {
            InstallGuide::Unsupported
        }
    }
}

fn version_after(ua: &str, marker: &str) -> String {
    ua.find(marker)
        .map(|start| {
            ua[start + marker.len()..]
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.6099.71 Safari/537.36";
    const EDGE_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.61";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1";
    const CHROME_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/119.0.6045.169 Mobile/15E148 Safari/604.1";
    const CHROME_ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.6099.43 Mobile Safari/537.36";
    const FIREFOX_LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

    #[test]
    fn test_desktop_browsers() {
        let chrome = Environment::from_user_agent(CHROME_WIN);
        assert_eq!(chrome.device, Device::Desktop);
        assert_eq!(chrome.browser, Browser::Chrome);
        assert_eq!(chrome.browser_version, "120.0.6099.71");

        let edge = Environment::from_user_agent(EDGE_WIN);
        assert_eq!(edge.browser, Browser::Edge);
        assert_eq!(edge.browser_version, "120.0.2210.61");
        assert_eq!(edge.guide(false), InstallGuide::DesktopChromium);
    }

    #[test]
    fn test_ios_detection() {
        let safari = Environment::from_user_agent(SAFARI_IPHONE);
        assert_eq!(safari.device, Device::Ios);
        assert_eq!(safari.browser, Browser::Safari);
        assert_eq!(safari.browser_version, "17.1");
        assert_eq!(safari.guide(false), InstallGuide::Ios);

        // Chrome on iOS reports CriOS and is not treated as an iOS install target
        let crios = Environment::from_user_agent(CHROME_IPHONE);
        assert_eq!(crios.device, Device::Desktop);
    }

    #[test]
    fn test_android_and_firefox() {
        let android = Environment::from_user_agent(CHROME_ANDROID);
        assert_eq!(android.device, Device::Android);
        assert_eq!(android.guide(false), InstallGuide::Unsupported);

        let firefox = Environment::from_user_agent(FIREFOX_LINUX);
        assert_eq!(firefox.browser, Browser::Firefox);
        assert_eq!(firefox.browser_version, "121.0");
        assert_eq!(firefox.guide(false), InstallGuide::FirefoxLimited);
    }

    #[test]
    fn test_installed_guide_wins() {
        let env = Environment::from_user_agent(FIREFOX_LINUX);
        assert_eq!(env.guide(true), InstallGuide::Installed);
        assert_eq!(Environment::from_user_agent("curl/8.0").browser, Browser::Unknown);
    }
}
