//! Interactive console host for the dialog controller
//!
//! Drives a [`ChatSession`] from stdin with in-memory stub collaborators:
//! the encoder remembers (image, password) -> message and the decoder looks
//! it up, so the full encode/decode/wrong-password loop can be exercised
//! without a real steganography backend.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use stegabot_core::session::{CodecError, EncodedArtifact, StegoDecoder, StegoEncoder};
use stegabot_core::{AttachedFile, BotReply, ChatSession, DialogContext, UserTurn};
use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shared stub backend: what was "encoded" into which image, under which
/// password.
#[derive(Default)]
struct Vault {
    entries: Mutex<HashMap<(String, String), String>>,
}

struct VaultEncoder(Arc<Vault>);

#[async_trait]
impl StegoEncoder for VaultEncoder {
    async fn encode(
        &self,
        image: &AttachedFile,
        message: &str,
        password: &str,
    ) -> Result<EncodedArtifact, CodecError> {
        let mut entries = self
            .0
            .entries
            .lock()
            .map_err(|_| CodecError::server("vault lock poisoned"))?;
        entries.insert(
            (image.name.clone(), password.to_string()),
            message.to_string(),
        );

        let bytes = format!("stub-stego:{}:{}", image.name, image.size).into_bytes();
        let sha256 = format!("{:x}", Sha256::digest(&bytes));
        Ok(EncodedArtifact { bytes, sha256 })
    }
}

struct VaultDecoder(Arc<Vault>);

#[async_trait]
impl StegoDecoder for VaultDecoder {
    async fn decode(&self, image: &AttachedFile, password: &str) -> Result<String, CodecError> {
        let entries = self
            .0
            .entries
            .lock()
            .map_err(|_| CodecError::server("vault lock poisoned"))?;
        entries
            .get(&(image.name.clone(), password.to_string()))
            .cloned()
            .ok_or_else(|| CodecError::bad_payload(""))
    }
}

fn attach(path: &str) -> Option<AttachedFile> {
    let meta = std::fs::metadata(path).ok()?;
    if !meta.is_file() {
        return None;
    }
    let mime_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream");
    Some(AttachedFile::new(path, mime_type, meta.len()))
}

fn prompt(session: &ChatSession<VaultEncoder, VaultDecoder>) -> &'static str {
    if session.expects_password() {
        "password> "
    } else if session.awaiting_file() {
        "file path> "
    } else {
        "you> "
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stegabot_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let ctx = match std::env::var("STEGABOT_USER") {
        Ok(name) if !name.is_empty() => DialogContext::with_display_name(name),
        _ => DialogContext::new(),
    };

    let vault = Arc::new(Vault::default());
    let mut session = ChatSession::new(ctx, VaultEncoder(vault.clone()), VaultDecoder(vault));

    println!("StegaBot console. Say 'hi', then 'encode' or 'decode'. Ctrl-D to exit.");

    let stdin = std::io::stdin();
    loop {
        print!("{}", prompt(&session));
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        // While the controller wants a file, a line naming a readable file
        // becomes an attachment; anything else stays a text turn (so
        // 'cancel' still works).
        let turn = if session.awaiting_file() {
            match attach(line) {
                Some(file) => UserTurn::file(file),
                None => UserTurn::text(line),
            }
        } else {
            UserTurn::text(line)
        };

        for reply in session.handle(turn).await {
            match reply {
                BotReply::Text(text) => println!("bot> {text}\n"),
                BotReply::Encoded { text, artifact } => {
                    println!("bot> {text}");
                    println!("     [{} bytes, sha256 {}]\n", artifact.bytes.len(), artifact.sha256);
                }
                BotReply::Revealed { text, message } => {
                    println!("bot> {text}\n\n     \"{message}\"\n");
                }
            }
        }
    }

    Ok(())
}
