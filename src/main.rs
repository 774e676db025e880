//! Maintenance CLI for the object store: upload or remove a single object
//! from the shell. Credentials come from the environment (see
//! [`StorageConfig::from_env`]); flags override where noted.

use anyhow::{Context, Result};
use bytes::Bytes;
use clap::{Parser, Subcommand};
use file_storage::{
    FileStorageService, StorageConfig, config::StorageConfigOverrides,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Signed S3-compatible file storage client")]
struct Args {
    /// Service endpoint (overrides FILE_STORAGE_SERVICE_URL)
    #[arg(long)]
    service_url: Option<String>,

    /// Signing region (overrides FILE_STORAGE_REGION)
    #[arg(long)]
    region: Option<String>,

    /// Access key (overrides FILE_STORAGE_ACCESS_KEY)
    #[arg(long)]
    access_key: Option<String>,

    /// Secret key (overrides FILE_STORAGE_SECRET_KEY)
    #[arg(long)]
    secret_key: Option<String>,

    /// Bucket name (overrides FILE_STORAGE_BUCKET)
    #[arg(long)]
    bucket: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a file and print the stored object as JSON.
    Upload {
        /// Path of the file to upload.
        #[arg(long)]
        file: PathBuf,

        /// Original filename to derive the object key from
        /// (defaults to the file's name on disk).
        #[arg(long)]
        name: Option<String>,
    },

    /// Remove an object by its key.
    Remove {
        /// Object key to delete.
        #[arg(long)]
        key: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Flags win over environment variables, per setting.
    let config = StorageConfig::from_env_with(StorageConfigOverrides {
        service_url: args.service_url,
        region: args.region,
        access_key: args.access_key,
        secret_key: args.secret_key,
        bucket_name: args.bucket,
    })?;
    let storage = FileStorageService::new(config)?;

    match args.command {
        Command::Upload { file, name } => {
            let original_name = match name {
                Some(name) => name,
                None => file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .with_context(|| format!("`{}` has no file name", file.display()))?,
            };
            let content = tokio::fs::read(&file)
                .await
                .with_context(|| format!("reading {}", file.display()))?;

            let stored = storage.upload(Bytes::from(content), &original_name).await?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
        Command::Remove { key } => {
            storage.remove(&key).await?;
            println!("removed `{key}`");
        }
    }

    Ok(())
}
