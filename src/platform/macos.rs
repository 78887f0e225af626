//! launchd LaunchAgent autostart for macOS.
//!
//! Writes a per-user LaunchAgent plist under `~/Library/LaunchAgents` and
//! loads/unloads it with `launchctl`.

use super::Autostart;
use anyhow::Context;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, warn};

/// Reverse-DNS label for the LaunchAgent.
const AGENT_LABEL: &str = "com.nudge.host";

/// LaunchAgent-based autostart manager.
pub struct LaunchAgentAutostart {
    label: String,
}

impl LaunchAgentAutostart {
    /// Create a manager for the default agent label.
    pub fn new() -> Self {
        Self {
            label: AGENT_LABEL.to_owned(),
        }
    }

    fn plist_path(&self) -> anyhow::Result<PathBuf> {
        let home = std::env::var_os("HOME").context("HOME is not set")?;
        Ok(PathBuf::from(home)
            .join("Library")
            .join("LaunchAgents")
            .join(format!("{}.plist", self.label)))
    }

    fn plist_content(&self, executable: &std::path::Path) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Label</key>
    <string>{label}</string>
    <key>ProgramArguments</key>
    <array>
        <string>{executable}</string>
    </array>
    <key>RunAtLoad</key>
    <true/>
    <key>KeepAlive</key>
    <false/>
</dict>
</plist>
"#,
            label = self.label,
            executable = executable.display(),
        )
    }
}

impl Default for LaunchAgentAutostart {
    fn default() -> Self {
        Self::new()
    }
}

impl Autostart for LaunchAgentAutostart {
    fn enable(&self) -> anyhow::Result<()> {
        let executable = std::env::current_exe().context("cannot resolve current executable")?;
        let path = self.plist_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("cannot create LaunchAgents dir")?;
        }

        std::fs::write(&path, self.plist_content(&executable))
            .context("cannot write LaunchAgent plist")?;

        // launchctl load is best-effort; the plist alone takes effect at
        // next login.
        match Command::new("launchctl").arg("load").arg(&path).status() {
            Ok(status) if !status.success() => {
                warn!("launchctl load exited with {status}");
            }
            Ok(_) => debug!("LaunchAgent loaded from {}", path.display()),
            Err(e) => warn!("cannot run launchctl: {e}"),
        }
        Ok(())
    }

    fn disable(&self) -> anyhow::Result<()> {
        let path = self.plist_path()?;
        if !path.exists() {
            return Ok(());
        }

        if let Err(e) = Command::new("launchctl").arg("unload").arg(&path).status() {
            warn!("cannot run launchctl: {e}");
        }
        std::fs::remove_file(&path).context("cannot remove LaunchAgent plist")?;
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.plist_path().map(|p| p.exists()).unwrap_or(false)
    }
}
