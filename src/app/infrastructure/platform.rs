use url::Url;

use super::error::{AppError, Result};

/// Hands a URI to whatever the desktop has registered for its scheme.
pub trait UriLauncher {
    fn launch(&self, uri: &Url) -> Result<()>;
}

/// Launches through the OS default handler (browser, mail client, ...).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl UriLauncher for SystemLauncher {
    fn launch(&self, uri: &Url) -> Result<()> {
        // Detached so a slow browser start never blocks the UI thread.
        open::that_detached(uri.as_str()).map_err(|e| AppError::Launch(e.to_string()))
    }
}

/// Best-effort check of the desktop's dark mode preference.
///
/// Falls back to light mode when the platform gives no answer.
pub fn detect_system_dark_mode() -> bool {
    platform_prefers_dark().unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn platform_prefers_dark() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let value: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn platform_prefers_dark() -> Option<bool> {
    let gtk_theme = gsettings_interface_key("gtk-theme")?;
    if gtk_theme.to_lowercase().contains("dark") {
        return Some(true);
    }
    let scheme = gsettings_interface_key("color-scheme")?;
    Some(scheme.contains("prefer-dark"))
}

#[cfg(target_os = "linux")]
fn gsettings_interface_key(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(target_os = "macos")]
fn platform_prefers_dark() -> Option<bool> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    if !output.status.success() {
        // Key is absent in light mode.
        return Some(false);
    }
    let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
    Some(style.contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn platform_prefers_dark() -> Option<bool> {
    None
}
