//! User Registry - Entry Point
//!
//! Registers a demo user, authenticates it, shows concurrent duplicate
//! registrations being rejected, and prints the stored credentials.

use log::{error, info};
use std::sync::Arc;

use user_registry::error::handlers::{handle_error, report_registry_error};
use user_registry::utils::setup_logging;
use user_registry::{AppError, CredentialStore, RegistryConfig};

/// Concurrent duplicate registrations attempted by the demo
const CONTENDERS: usize = 4;

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default `info` filter
    setup_logging();

    info!("Launching user registry demo...");

    let config = match RegistryConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handle_error(&AppError::from(e));
            info!("Falling back to default configuration");
            RegistryConfig::default()
        }
    };

    let store = Arc::new(CredentialStore::from_config(&config));

    match store.register(&config.demo_username, &config.demo_secret) {
        Ok(result) => println!("Registration successful: {}", result.registered),
        Err(e) => println!("Registration failed: {}", e),
    }

    let auth_result = store.authenticate(&config.demo_username, &config.demo_secret);
    println!("Authentication successful: {}", auth_result);

    contend_for_username(&store, &config).await;

    println!("Current users: {:?}", store.snapshot());
}

/// Races several blocking tasks to register the demo user again. All of them
/// must be rejected since the name is already taken.
async fn contend_for_username(store: &Arc<CredentialStore>, config: &RegistryConfig) {
    let handles: Vec<_> = (0..CONTENDERS)
        .map(|i| {
            let store = Arc::clone(store);
            let username = config.demo_username.clone();
            tokio::task::spawn_blocking(move || store.register(&username, &format!("retry{i}")))
        })
        .collect();

    let mut rejected = 0;
    for handle in handles {
        match handle.await {
            Ok(Ok(result)) => error!("Unexpected registration of {}", result.username),
            Ok(Err(e)) => {
                report_registry_error(&e);
                rejected += 1;
            }
            Err(e) => error!("Registration task failed: {}", e),
        }
    }

    println!(
        "Duplicate registrations rejected: {}/{}",
        rejected, CONTENDERS
    );
}
