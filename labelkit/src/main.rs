//! Assembly surface: reads an order payload, runs the engine, and writes the
//! export, sheet, print document and delivery summary next to each other.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use chrono::{DateTime, Local};
use labelkit_core::model::Order;
use labelkit_core::order::{artifact_stem, OrderArtifacts};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod pdf;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: labelkit <order.json> [out_dir]");
        process::exit(2);
    }
    let input = &args[1];
    let out_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("."));

    let txt = fs::read_to_string(input).with_context(|| format!("failed to read {input}"))?;
    let order: Order =
        serde_json::from_str(&txt).with_context(|| format!("failed to parse {input}"))?;

    let now = Local::now();
    let artifacts = match labelkit_core::process(&order, &now.to_rfc3339(), &format_date(&now)) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            // The transport's 400 path: report and stop before any artifact.
            println!("{}", serde_json::json!({ "error": e.to_string() }));
            process::exit(1);
        }
    };

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let stem = artifact_stem(&artifacts.ref_id);
    fs::write(out_dir.join(format!("{stem}-labels.csv")), &artifacts.csv)?;
    fs::write(out_dir.join(format!("{stem}-labels.svg")), &artifacts.sheet)?;
    fs::write(
        out_dir.join(format!("{stem}-labels.pdf")),
        pdf::document(&artifacts),
    )?;
    info!(
        "wrote {} rows and {} pages for {}",
        artifacts.rows.len(),
        artifacts.pages.len(),
        artifacts.ref_id
    );

    deliver(&artifacts, &out_dir, &stem);

    println!(
        "{}",
        serde_json::json!({
            "success": true,
            "refId": artifacts.ref_id,
            "totalLabels": artifacts.total_units,
        })
    );
    Ok(())
}

fn format_date(now: &DateTime<Local>) -> String {
    now.format("%B %-d, %Y").to_string()
}

/// Hand the summary to the delivery side channel. A failure here is logged
/// and swallowed: the artifacts already on disk stay valid and the order
/// still succeeds.
fn deliver(artifacts: &OrderArtifacts, out_dir: &Path, stem: &str) {
    let path = out_dir.join(format!("{stem}-summary.json"));
    match serde_json::to_string_pretty(&artifacts.summary) {
        Ok(json) => match fs::write(&path, json) {
            Ok(()) => info!("delivery summary written to {}", path.display()),
            Err(e) => warn!("delivery failed for {}: {e}", path.display()),
        },
        Err(e) => warn!("delivery summary not serialized: {e}"),
    }
}
