use std::sync::Arc;

use anyhow::Result;

use crate::config::{Config, StorageKind};

pub mod memory;
pub mod models;
pub mod repositories;
pub mod s3;
pub mod store;

pub use memory::MemoryBackend;
pub use s3::S3Backend;
pub use store::{DocumentStore, StorageBackend, StoreError};

/// Build the document store selected by configuration.
pub async fn init_store(config: &Config) -> Result<DocumentStore> {
    let backend: Arc<dyn StorageBackend> = match config.storage {
        StorageKind::S3 => {
            if config.s3_bucket.trim().is_empty() {
                anyhow::bail!("S3_BUCKET must be set when STORAGE_BACKEND=s3");
            }
            println!(
                "Using S3 storage (bucket: {}, region: {})",
                config.s3_bucket, config.aws_region
            );
            Arc::new(S3Backend::connect(&config.s3_bucket, &config.aws_region).await)
        }
        StorageKind::Memory => {
            println!("Using in-memory storage, data will not survive a restart");
            Arc::new(MemoryBackend::new())
        }
    };

    Ok(DocumentStore::new(backend, &config.storage_prefix))
}
