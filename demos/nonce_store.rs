//! Example: Persisting the nonce across process restarts.
//!
//! YoBit remembers the last nonce per key, so a restarted process must not
//! count from a smaller value. This keeps the nonce in a file.
//!
//! Run with: cargo run --example nonce_store

use std::path::Path;
use std::sync::Arc;

use yobit_api_client::YobitError;
use yobit_api_client::auth::{Credentials, FnNonceUpdate, unix_time_secs};
use yobit_api_client::rest::YobitRestClient;

async fn load_nonce(path: &Path) -> u64 {
    tokio::fs::read_to_string(path)
        .await
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(unix_time_secs)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = match Credentials::try_from_env() {
        Some(creds) => creds,
        None => {
            println!("Set YOBIT_API_KEY and YOBIT_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let path = std::env::temp_dir().join("yobit-nonce");
    let initial = load_nonce(&path).await;

    let store = path.clone();
    let policy = FnNonceUpdate::new(move |current| {
        let store = store.clone();
        async move {
            let next = current + 1;
            tokio::fs::write(&store, next.to_string())
                .await
                .map_err(|e| YobitError::NonceStore(e.to_string()))?;
            Ok(next)
        }
    });

    let client = YobitRestClient::builder()
        .credentials(credentials)
        .initial_nonce(initial)
        .nonce_policy(Arc::new(policy))
        .build()?;

    let info = client.get_account_info().await?;
    println!("success={} nonce now {}", info.success, client.nonce_counter().current().await);

    Ok(())
}
