//! Release listing from the index page.
//!
//! The index is a sequence of `.product` sections, each titled by a
//! `.product-name` element and holding a `ul > li > a` list of releases.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::http_client::HttpClient;
use crate::types::{OsacError, OsacResult, Product, Release};

/// Fetch the index page and list the releases of `product` in page order.
///
/// Returns an empty list when no section carries the product's name.
pub async fn list_releases(client: &HttpClient, product: Product) -> OsacResult<Vec<Release>> {
    let document = client.fetch_document(client.base_url()).await?;
    let releases = parse_releases(&document, product, client.base_url())?;
    debug!(%product, count = releases.len(), "resolved releases");
    Ok(releases)
}

/// Extract the releases of `product` from a parsed index page.
///
/// Only the first matching section is read. An anchor without `href` is an
/// error rather than a skipped entry.
pub fn parse_releases(
    document: &Html,
    product: Product,
    base_url: &Url,
) -> OsacResult<Vec<Release>> {
    let section_sel = selector(".product");
    let name_sel = selector(".product-name");
    let anchor_sel = selector("ul > li > a");

    let Some(section) = document
        .select(&section_sel)
        .find(|section| inner_text(section, &name_sel) == product.display_name())
    else {
        return Ok(Vec::new());
    };

    section
        .select(&anchor_sel)
        .map(|anchor| -> OsacResult<Release> {
            let release = element_text(&anchor);
            let href = anchor
                .value()
                .attr("href")
                .ok_or_else(|| OsacError::MissingReleaseHref {
                    product,
                    release: release.clone(),
                })?;
            Ok(Release {
                product,
                url: join_url(base_url, href)?,
                release,
            })
        })
        .collect()
}

/// Parse a selector known at compile time.
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Resolve a page-relative `href` against the site root.
///
/// Follows RFC 3986: a root-relative href (`/release/...`) replaces any path
/// on `base_url`, while a relative one is appended after its last `/`.
pub(crate) fn join_url(base_url: &Url, href: &str) -> OsacResult<Url> {
    base_url.join(href).map_err(|source| OsacError::InvalidUrl {
        href: href.to_string(),
        source,
    })
}

/// Text of an element, trimmed.
pub(crate) fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Combined text of every descendant matching `sel`, trimmed.
fn inner_text(el: &ElementRef<'_>, sel: &Selector) -> String {
    el.select(sel)
        .flat_map(|e| e.text())
        .collect::<String>()
        .trim()
        .to_string()
}
