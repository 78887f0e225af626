//! No-op autostart stub for platforms without an implementation.

use super::Autostart;

/// Stub manager: reports unsupported on enable, never registered.
pub struct StubAutostart;

impl Autostart for StubAutostart {
    fn enable(&self) -> anyhow::Result<()> {
        anyhow::bail!("autostart is not supported on this platform")
    }

    fn disable(&self) -> anyhow::Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
