use anyhow::{Context, Result};
use std::net::{Ipv4Addr, TcpListener};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// First start includes compiling the web package.
const STARTUP_TIMEOUT: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// `web` running with the server feature on a free loopback port. The process
/// is killed when this is dropped.
pub struct TestServer {
    url: String,
    child: Child,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let port = free_port()?;
        let child = Command::new("cargo")
            .args(["run", "--package", "web", "--features", "server"])
            .envs([
                ("APP_MODE", "local".to_string()),
                ("IP", Ipv4Addr::LOCALHOST.to_string()),
                ("PORT", port.to_string()),
            ])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("spawning `cargo run --package web`")?;

        // Constructed before waiting so a timeout still kills the child.
        let server = Self {
            url: format!("http://localhost:{port}"),
            child,
        };
        server.wait_until_ready().await?;
        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn wait_until_ready(&self) -> Result<()> {
        let started = Instant::now();
        let mut last_report = started;

        while started.elapsed() < STARTUP_TIMEOUT {
            if let Ok(response) = reqwest::get(&self.url).await {
                if response.status().is_success() {
                    return Ok(());
                }
            }
            if last_report.elapsed() >= Duration::from_secs(5) {
                eprintln!(
                    "waiting for {} ({}s)",
                    self.url,
                    started.elapsed().as_secs()
                );
                last_report = Instant::now();
            }
            sleep(POLL_INTERVAL).await;
        }
        anyhow::bail!("{} not ready after {STARTUP_TIMEOUT:?}", self.url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Ask the OS for an unused loopback port. The listener is released before
/// returning so the server can bind it.
fn free_port() -> Result<u16> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))?;
    Ok(listener.local_addr()?.port())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_port_is_bindable_after_release() {
        let port = free_port().unwrap();
        assert_ne!(port, 0);
        TcpListener::bind((Ipv4Addr::LOCALHOST, port)).unwrap();
    }
}
