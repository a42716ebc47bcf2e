// src/lib.rs

pub mod assist;
pub mod cli;
pub mod config;
pub mod content;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod pool;
pub mod rotation;
pub mod types;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::assist::Assistant;
use crate::cli::{CliArgs, Command, Target};
use crate::config::{ConfigFile, RotationSection, load_or_default};
use crate::content::ContentItem;
use crate::engine::{ContentBatch, ContentService, RotationEngine};
use crate::fs::{FileSystem, RealFileSystem};
use crate::pool::{MESSAGE_POOL_LIMIT, PoolRegistry};
use crate::types::{ContentKind, MessageCategory};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the pool registry (embedded or from `[content].dir`)
/// - the rotation engine and the assisted-generation fallback
/// - output formatting
pub async fn run(args: CliArgs) -> Result<()> {
    let fs = RealFileSystem;
    let cfg = load_or_default(&fs, args.config.as_deref().map(Path::new))?;
    let registry = Arc::new(load_registry(&fs, &cfg)?);

    let settings = match &args.command {
        Command::Daily { target, kind } => with_count_override(cfg.rotation, target, Some(*kind)),
        Command::Weekly { target } => with_count_override(cfg.rotation, target, None),
        Command::Check => cfg.rotation,
    };
    let engine = RotationEngine::new(registry, settings)?;
    let service = ContentService::new(engine, Assistant::from_settings(cfg.assist.as_ref()));

    let (batch, json) = match args.command {
        Command::Check => {
            print_check(&cfg, service.engine());
            return Ok(());
        }
        Command::Daily { target, kind } => {
            let today = target.date.unwrap_or_else(today_utc);
            let batch = service.daily_content(&target.mode, kind, today, None).await?;
            (batch, target.json)
        }
        Command::Weekly { target } => {
            let today = target.date.unwrap_or_else(today_utc);
            let batch = service.weekly_content(&target.mode, today, None).await?;
            (batch, target.json)
        }
    };

    info!(mode = %batch.mode, items = batch.items.len(), "selection complete");
    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        print_batch(&batch);
    }
    Ok(())
}

/// Build the registry described by `cfg`: the embedded pools, or the pool
/// files in `[content].dir`.
pub fn load_registry(fs: &dyn FileSystem, cfg: &ConfigFile) -> crate::errors::Result<PoolRegistry> {
    match &cfg.content.dir {
        Some(dir) => PoolRegistry::load_dir(fs, dir),
        None => PoolRegistry::embedded(),
    }
}

fn with_count_override(
    mut settings: RotationSection,
    target: &Target,
    kind: Option<ContentKind>,
) -> RotationSection {
    if let Some(n) = target.count {
        match kind {
            Some(ContentKind::Tasks) => settings.daily_task_count = n,
            Some(ContentKind::Messages) => settings.messages_per_category = n,
            None => settings.weekly_task_count = n,
        }
    }
    settings
}

fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

fn print_batch(batch: &ContentBatch) {
    println!(
        "{} {} for {} ({})",
        batch.mode,
        match batch.kind {
            ContentKind::Tasks => "tasks",
            ContentKind::Messages => "messages",
        },
        batch.date,
        source_label(batch)
    );
    for item in &batch.items {
        println!("  {}", describe(item));
    }
}

fn source_label(batch: &ContentBatch) -> String {
    match &batch.source {
        engine::ContentSource::Rotation => "rotation".to_string(),
        engine::ContentSource::Generated => "generated".to_string(),
        engine::ContentSource::Fallback { reason } => format!("fallback: {reason}"),
    }
}

fn describe(item: &ContentItem) -> String {
    let category = match item.category {
        content::ItemCategory::Task(c) => c.as_str(),
        content::ItemCategory::Message(c) => c.as_str(),
    };
    format!("[{category}] {}  ({})", item.text, item.id)
}

/// `check` output: configured counts and pool sizes per mode.
fn print_check(cfg: &ConfigFile, engine: &RotationEngine) {
    println!("pookie-rotation check");
    println!("  rotation.daily_task_count = {}", cfg.rotation.daily_task_count);
    println!("  rotation.weekly_task_count = {}", cfg.rotation.weekly_task_count);
    println!("  rotation.messages_per_category = {}", cfg.rotation.messages_per_category);
    match &cfg.content.dir {
        Some(dir) => println!("  content.dir = {}", dir.display()),
        None => println!("  content = embedded"),
    }
    match &cfg.assist {
        Some(a) => println!("  assist.command = {} (timeout {:?})", a.command, a.timeout),
        None => println!("  assist = disabled"),
    }
    println!();

    let registry = engine.registry();
    for mode in registry.modes() {
        let Some(pools) = registry.get(mode) else {
            continue;
        };
        println!("{mode}:");
        println!("    daily tasks: {}", pools.daily_tasks.len());
        println!("    weekly tasks: {}", pools.weekly_tasks.len());
        for category in MessageCategory::ALL {
            let pool = pools.message_pool(category);
            println!(
                "    {category}: {} (using {})",
                pool.len(),
                pool.head(MESSAGE_POOL_LIMIT).len()
            );
        }
    }

    debug!("check complete (no selection)");
}
