//! Sequential download of package archives to disk.
//!
//! Every package of a release lands in `<product>-<release>/` under a parent
//! directory, named after the last path segment of its download URL. There is
//! no resume, no checksum and no rollback: a failure part way through leaves
//! the files written so far in place.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::info;
use url::Url;

use crate::http_client::HttpClient;
use crate::types::{OsacError, OsacResult, Package, Product};

/// Progress reported while downloading.
#[derive(Debug)]
pub enum DownloadEvent<'a> {
    /// A package transfer is about to begin.
    Started { package: &'a Package, path: &'a Path },
    /// More bytes of the current package were written.
    Progress { written: u64, total: Option<u64> },
    /// The current package is complete.
    Finished { package: &'a Package, bytes: u64 },
}

/// Directory name used for the archives of one release.
pub fn release_dir_name(product: Product, release: &str) -> String {
    format!("{}-{release}", product.key())
}

/// File name of a package archive: the last path segment of its URL.
pub fn archive_file_name(url: &Url) -> OsacResult<String> {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| OsacError::NoFileName(url.clone()))
}

/// Create the release directory and download `packages` into it, one at a time.
///
/// Fails if the directory already exists. Returns the written file paths in
/// package order.
pub async fn download_packages<F>(
    client: &HttpClient,
    product: Product,
    release: &str,
    packages: &[Package],
    parent: &Path,
    mut on_event: F,
) -> OsacResult<Vec<PathBuf>>
where
    F: FnMut(DownloadEvent<'_>),
{
    let dir = parent.join(release_dir_name(product, release));
    create_release_dir(&dir).await?;

    let mut written = Vec::with_capacity(packages.len());
    for package in packages {
        let path = dir.join(archive_file_name(&package.url)?);
        on_event(DownloadEvent::Started {
            package,
            path: &path,
        });

        let bytes = download_one(client, &package.url, &path, &mut on_event).await?;
        info!(path = %path.display(), bytes, "downloaded");
        on_event(DownloadEvent::Finished { package, bytes });
        written.push(path);
    }

    Ok(written)
}

async fn create_release_dir(dir: &Path) -> OsacResult<()> {
    match tokio::fs::create_dir(dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(OsacError::DirectoryExists(dir.to_path_buf()))
        }
        Err(source) => Err(OsacError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

async fn download_one<F>(
    client: &HttpClient,
    url: &Url,
    path: &Path,
    on_event: &mut F,
) -> OsacResult<u64>
where
    F: FnMut(DownloadEvent<'_>),
{
    let mut resp = client.get(url).await?;
    let total = resp.content_length();

    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(|source| OsacError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

    let write_err = |source| OsacError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = 0u64;
    while let Some(chunk) = resp.chunk().await.map_err(|source| OsacError::Download {
        url: url.to_string(),
        source,
    })? {
        file.write_all(&chunk).await.map_err(write_err)?;
        bytes += chunk.len() as u64;
        on_event(DownloadEvent::Progress {
            written: bytes,
            total,
        });
    }
    file.flush().await.map_err(write_err)?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_dir_name() {
        assert_eq!(release_dir_name(Product::Mac, "10.15"), "mac-10.15");
        assert_eq!(
            release_dir_name(Product::DevTools, "11.3"),
            "devtools-11.3"
        );
    }

    #[test]
    fn test_archive_file_name() {
        let url = Url::parse("https://opensource.apple.com/tarballs/bash/bash-118.tar.gz").unwrap();
        assert_eq!(archive_file_name(&url).unwrap(), "bash-118.tar.gz");
    }

    #[test]
    fn test_archive_file_name_ignores_query() {
        let url = Url::parse("https://example.com/dl/zlib.tar.gz?mirror=1").unwrap();
        assert_eq!(archive_file_name(&url).unwrap(), "zlib.tar.gz");
    }

    #[test]
    fn test_archive_file_name_missing() {
        let url = Url::parse("https://example.com/dl/").unwrap();
        assert!(matches!(
            archive_file_name(&url),
            Err(OsacError::NoFileName(_))
        ));
    }
}
