//! Best-effort clipboard writes.
//!
//! The terminal is asked first through an OSC 52 escape sequence. Payloads
//! over the common terminal limit, or a failed write, fall back to the first
//! system clipboard tool found on `PATH`. Callers only learn whether the copy
//! went through.

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::env;
use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, Stdio};

/// Largest base64 payload most terminals accept in one OSC 52 sequence
pub const MAX_OSC52_PAYLOAD: usize = 74_994;

/// External tools tried in order: (command, args)
const FALLBACK_TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// Build the OSC 52 sequence for `text`, or `None` when the payload is too large
pub fn osc52_sequence(text: &str) -> Option<String> {
    let encoded = STANDARD.encode(text.as_bytes());
    if encoded.len() > MAX_OSC52_PAYLOAD {
        return None;
    }
    Some(format!("\x1b]52;c;{encoded}\x07"))
}

/// Copy `text` to the system clipboard. Returns true on success.
pub fn copy_to_clipboard(text: &str) -> bool {
    copy_with(text, &mut std::io::stdout(), copy_external)
}

/// Copy through `terminal`, falling back to `fallback` when OSC 52 is not usable
pub fn copy_with<W, F>(text: &str, terminal: &mut W, fallback: F) -> bool
where
    W: Write,
    F: FnOnce(&str) -> Result<()>,
{
    match write_osc52(text, terminal) {
        Ok(()) => {
            log::debug!("Clipboard: wrote {} bytes via OSC 52", text.len());
            return true;
        }
        Err(e) => log::debug!("Clipboard: OSC 52 unavailable: {}", e),
    }

    match fallback(text) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Clipboard: copy failed: {:#}", e);
            false
        }
    }
}

fn write_osc52<W: Write>(text: &str, terminal: &mut W) -> Result<()> {
    let Some(sequence) = osc52_sequence(text) else {
        bail!("payload exceeds {} bytes", MAX_OSC52_PAYLOAD);
    };
    terminal
        .write_all(sequence.as_bytes())
        .and_then(|()| terminal.flush())
        .context("Failed to write OSC 52 sequence")
}

/// Pipe `text` into the first available clipboard tool
pub fn copy_external(text: &str) -> Result<()> {
    let Some((cmd, args)) = FALLBACK_TOOLS.iter().find(|(cmd, _)| command_exists(cmd)) else {
        bail!("no clipboard tool found");
    };
    pipe_to(cmd, args, text)?;
    log::debug!("Clipboard: copied via {}", cmd);
    Ok(())
}

/// Run `cmd` with `text` on its stdin and wait for a successful exit
fn pipe_to(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to spawn {}", cmd))?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            reap(&mut child);
            return Err(e).with_context(|| format!("Failed to write to {}", cmd));
        }
    }

    let status = child.wait().with_context(|| format!("Failed to wait for {}", cmd))?;
    if !status.success() {
        bail!("{} exited with {}", cmd, status);
    }
    Ok(())
}

/// Kill a child we gave up on and collect its exit status
fn reap(child: &mut Child) {
    if let Err(e) = child.kill() {
        log::debug!("Clipboard: kill failed: {}", e);
    }
    if let Err(e) = child.wait() {
        log::debug!("Clipboard: wait failed: {}", e);
    }
}

fn command_exists(command: &str) -> bool {
    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&path_var).any(|dir| Path::new(&dir).join(command).is_file())
}
