//! `osac list [product] [release]` — list products, releases or packages.

use anyhow::Result;
use osac::{list_packages, list_releases, HttpClient, Product};

use super::output::{format_package, Output, ProductEntry};

/// Run the list command.
pub async fn run(
    client: &HttpClient,
    product: Option<Product>,
    release: Option<&str>,
    out: Output,
) -> Result<()> {
    match (product, release) {
        (None, _) => list_products(out),
        (Some(product), None) => list_product_releases(client, product, out).await,
        (Some(product), Some(release)) => {
            list_release_packages(client, product, release, out).await
        }
    }
}

fn list_products(out: Output) -> Result<()> {
    if out.json {
        let entries: Vec<ProductEntry> = Product::ALL.into_iter().map(Into::into).collect();
        return out.print_json(&entries);
    }

    println!("Available products:");
    for product in Product::ALL {
        println!("{product}");
    }
    Ok(())
}

async fn list_product_releases(client: &HttpClient, product: Product, out: Output) -> Result<()> {
    let releases = list_releases(client, product).await?;
    if out.json {
        return out.print_json(&releases);
    }

    if releases.is_empty() && !out.quiet {
        eprintln!("No releases found for {}", product.display_name());
    }
    for r in &releases {
        println!("{}", r.release);
    }
    Ok(())
}

async fn list_release_packages(
    client: &HttpClient,
    product: Product,
    release: &str,
    out: Output,
) -> Result<()> {
    let packages = list_packages(client, product, release).await?;
    if out.json {
        return out.print_json(&packages);
    }

    for p in &packages {
        println!("{}", format_package(p));
    }
    Ok(())
}
