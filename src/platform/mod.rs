//! Platform-specific autostart registration.
//!
//! Provides a cross-platform [`Autostart`] trait for launch-at-login
//! registration. On macOS this manages a `launchd` LaunchAgent; on other
//! platforms a no-op stub is used and the host is expected to wire its own
//! mechanism.

#[cfg(target_os = "macos")]
mod macos;
#[cfg(not(target_os = "macos"))]
mod stub;
// Re-export stub for tests on all platforms.
#[cfg(test)]
#[cfg(target_os = "macos")]
#[path = "stub.rs"]
mod stub;

/// Launch-at-login capability, wired per-platform by the host.
pub trait Autostart: Send + Sync {
    /// Register the current executable to launch at login.
    fn enable(&self) -> anyhow::Result<()>;

    /// Remove the login registration. Succeeds when none exists.
    fn disable(&self) -> anyhow::Result<()>;

    /// Whether a login registration is currently present.
    fn is_enabled(&self) -> bool;
}

/// Create the platform-appropriate autostart manager.
///
/// Returns a macOS LaunchAgent implementation on Apple platforms, or a
/// no-op stub elsewhere.
pub fn create_manager() -> Box<dyn Autostart> {
    #[cfg(target_os = "macos")]
    {
        Box::new(macos::LaunchAgentAutostart::new())
    }
    #[cfg(not(target_os = "macos"))]
    {
        Box::new(stub::StubAutostart)
    }
}
