//! Package listing from a release detail page.

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::http_client::HttpClient;
use crate::releases::{element_text, join_url, list_releases, selector};
use crate::split::split_project_name;
use crate::types::{OsacError, OsacResult, Package, Product};

/// Class on the name cell of rows the site marks as new or updated.
const UPDATED_CLASS: &str = "newproject";

/// List the packages of one release.
///
/// `release` must equal, case-sensitively, a release name reported by
/// [`list_releases`] for `product`.
pub async fn list_packages(
    client: &HttpClient,
    product: Product,
    release: &str,
) -> OsacResult<Vec<Package>> {
    let releases = list_releases(client, product).await?;
    let found = releases
        .into_iter()
        .find(|r| r.release == release)
        .ok_or_else(|| OsacError::UnknownRelease {
            product,
            release: release.to_string(),
        })?;

    let document = client.fetch_document(&found.url).await?;
    let packages = parse_packages(&document, client.base_url())?;
    debug!(%product, release, count = packages.len(), "resolved packages");
    Ok(packages)
}

/// Extract packages from a parsed release detail page.
///
/// Rows whose `.project-name` cell has no link are skipped. A qualifying
/// row without a download link is an error.
pub fn parse_packages(document: &Html, base_url: &Url) -> OsacResult<Vec<Package>> {
    let row_sel = selector(".project-row");
    let name_sel = selector(".project-name");
    let link_sel = selector("a");
    let download_sel = selector(".project-downloads a");

    let mut packages = Vec::new();
    for row in document.select(&row_sel) {
        let name_cells: Vec<_> = row.select(&name_sel).collect();
        let links: Vec<_> = name_cells
            .iter()
            .flat_map(|cell| cell.select(&link_sel))
            .collect();
        if links.is_empty() {
            continue;
        }

        let updated = name_cells
            .iter()
            .any(|cell| cell.value().classes().any(|c| c == UPDATED_CLASS));
        let label: String = links.iter().map(element_text).collect();
        let (name, version) = split_project_name(label.trim());

        let href = row
            .select(&download_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| OsacError::MissingDownloadHref { name: name.clone() })?;

        packages.push(Package {
            url: join_url(base_url, href)?,
            name,
            version,
            updated,
        });
    }

    Ok(packages)
}

/// Keep the packages matching `package`, by bare name or by full
/// `name-version` label.
pub fn select_packages(
    packages: Vec<Package>,
    product: Product,
    release: &str,
    package: &str,
) -> OsacResult<Vec<Package>> {
    let selected: Vec<_> = packages
        .into_iter()
        .filter(|p| p.name == package || p.label().as_deref() == Some(package))
        .collect();

    if selected.is_empty() {
        return Err(OsacError::UnknownPackage {
            product,
            release: release.to_string(),
            package: package.to_string(),
        });
    }
    Ok(selected)
}
