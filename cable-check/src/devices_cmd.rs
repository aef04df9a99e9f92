use anyhow::{Context, Result};
use cabling_core::{load_document_with_options, LoadOptions};
use serde::Serialize;

use crate::cli::{DevicesArgs, OutputFormat};

#[derive(Debug, Serialize)]
struct DeviceRow<'a> {
    device: &'a str,
    links: usize,
}

pub fn run_devices(args: DevicesArgs) -> Result<()> {
    let mut opts = LoadOptions::default();
    if let Some(root_key) = args.root_key {
        opts.root_key = root_key;
    }
    let doc = load_document_with_options(&args.file, &opts)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let rows: Vec<DeviceRow<'_>> = doc
        .iter()
        .map(|(device, links)| DeviceRow {
            device,
            links: links.len(),
        })
        .collect();

    match args.format {
        OutputFormat::Text => {
            println!("devices={}", rows.len());
            for row in &rows {
                println!("- {} links={}", row.device, row.links);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}
