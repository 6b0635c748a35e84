//! `osac get <product> <release> [package]` — download release archives.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use osac::{download_packages, list_packages, select_packages, DownloadEvent, HttpClient, Product};

use super::output::Output;

/// Run the get command.
///
/// Without `package` every package of the release is downloaded; with it,
/// only the packages whose name or `name-version` label match.
pub async fn run(
    client: &HttpClient,
    product: Product,
    release: &str,
    package: Option<&str>,
    dir: &Path,
    out: Output,
) -> Result<()> {
    let mut packages = list_packages(client, product, release).await?;
    if let Some(package) = package {
        packages = select_packages(packages, product, release, package)?;
    }

    let mut bar: Option<ProgressBar> = None;
    let mut current: Option<PathBuf> = None;
    let paths = download_packages(client, product, release, &packages, dir, |event| {
        match event {
            DownloadEvent::Started { package, path } => {
                current = Some(path.to_path_buf());
                if out.show_progress() {
                    let pb = ProgressBar::new_spinner();
                    pb.set_style(bar_style());
                    pb.set_message(package.name.clone());
                    bar = Some(pb);
                }
            }
            DownloadEvent::Progress { written, total } => {
                if let Some(pb) = &bar {
                    if let Some(total) = total {
                        pb.set_length(total);
                    }
                    pb.set_position(written);
                }
            }
            DownloadEvent::Finished { .. } => {
                if let Some(pb) = bar.take() {
                    pb.finish_and_clear();
                }
                if let (true, Some(path)) = (out.show_files(), current.take()) {
                    println!("{}", path.display());
                }
            }
        }
    })
    .await
    .with_context(|| format!("downloading {product} {release}"))?;

    if out.json {
        out.print_json(&paths)?;
    } else if !out.quiet {
        eprintln!("Downloaded {} package(s)", paths.len());
    }
    Ok(())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner} {msg} {bytes}/{total_bytes} {wide_bar}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}
