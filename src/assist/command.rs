// src/assist/command.rs

//! Text generator backed by an external command.
//!
//! The command runs through the platform shell with the prompt on stdin and
//! `POOKIE_MAX_TOKENS` in its environment; whatever it prints on stdout is the
//! response. A non-zero exit status is a failure. The child is killed if the
//! caller drops the future (e.g. on timeout).

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::TextGenerator;

pub const MAX_TOKENS_ENV: &str = "POOKIE_MAX_TOKENS";

#[derive(Debug, Clone)]
pub struct CommandGenerator {
    command: String,
}

impl CommandGenerator {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    async fn run(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&self.command);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(&self.command);
            c
        };

        cmd.env(MAX_TOKENS_ENV, max_tokens.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!(cmd = %self.command, prompt_len = prompt.len(), "starting generator process");

        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawning generator command '{}'", self.command))?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(prompt.as_bytes()).await {
                Ok(()) => {}
                // The command may exit without reading its input.
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                    debug!("generator closed stdin early");
                }
                Err(e) => return Err(e).context("writing prompt to generator stdin"),
            }
            // Closing stdin signals end of prompt.
            drop(stdin);
        }

        let output = child
            .wait_with_output()
            .await
            .context("waiting for generator process")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("generator exited with {}: {}", output.status, stderr.trim());
        }

        String::from_utf8(output.stdout).context("generator output is not UTF-8")
    }
}

impl TextGenerator for CommandGenerator {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        max_tokens: u32,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(self.run(prompt, max_tokens))
    }
}
