//! Core data types for products, releases and packages.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use url::Url;

/// A product line published on the release index.
///
/// The set is closed: each key maps to the display name used as the
/// section title on the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    Mac,
    DevTools,
    Ios,
    Server,
}

impl Product {
    /// Every recognized product, in listing order.
    pub const ALL: [Product; 4] = [Product::Mac, Product::DevTools, Product::Ios, Product::Server];

    /// Short key used on the command line and in download directory names.
    pub fn key(self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::DevTools => "devtools",
            Self::Ios => "ios",
            Self::Server => "server",
        }
    }

    /// Section title of this product on the index page.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Mac => "macOS",
            Self::DevTools => "Developer Tools",
            Self::Ios => "iOS",
            Self::Server => "OS X Server",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Product {
    type Err = OsacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| OsacError::UnknownProduct(s.to_string()))
    }
}

/// One release of a product as listed on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub product: Product,
    /// Display name, also the lookup key for package listings.
    pub release: String,
    /// Absolute URL of the release detail page.
    pub url: Url,
}

/// One downloadable archive within a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: String,
    /// Version suffix, or [`crate::split::UNDETERMINED_VERSION`].
    pub version: String,
    /// The source row was flagged as new or updated in this release.
    pub updated: bool,
    /// Absolute download URL of the archive.
    pub url: Url,
}

impl Package {
    /// Label as it appeared on the release page, when it could be split.
    pub fn label(&self) -> Option<String> {
        crate::split::join_project_name(&self.name, &self.version)
    }
}

/// Errors that can occur while resolving or downloading packages.
#[derive(thiserror::Error, Debug)]
pub enum OsacError {
    #[error("unknown product: {0} (expected one of mac, devtools, ios, server)")]
    UnknownProduct(String),

    #[error("couldn't find release {release:?} for product {product}")]
    UnknownRelease { product: Product, release: String },

    #[error("couldn't find package {package:?} in {product} {release}")]
    UnknownPackage {
        product: Product,
        release: String,
        package: String,
    },

    #[error("http: couldn't get url {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("http: got non 200 status code: {url} {status}")]
    Status { url: String, status: u16 },

    #[error("document: couldn't read html from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("document: couldn't get href from release anchor ({product}, {release})")]
    MissingReleaseHref { product: Product, release: String },

    #[error("document: couldn't find href in download node of {name}")]
    MissingDownloadHref { name: String },

    #[error("invalid url {href:?}: {source}")]
    InvalidUrl {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("download: directory already exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    #[error("download: couldn't create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("download: couldn't create file {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("download: couldn't copy bytes to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("download: couldn't download file {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("download: no file name in url {0}")]
    NoFileName(Url),
}

/// Convenience result type.
pub type OsacResult<T> = Result<T, OsacError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_keys_roundtrip() {
        for product in Product::ALL {
            assert_eq!(product.key().parse::<Product>().unwrap(), product);
        }
    }

    #[test]
    fn test_product_display_names() {
        assert_eq!(Product::Mac.display_name(), "macOS");
        assert_eq!(Product::DevTools.display_name(), "Developer Tools");
        assert_eq!(Product::Ios.display_name(), "iOS");
        assert_eq!(Product::Server.display_name(), "OS X Server");
    }

    #[test]
    fn test_unknown_product() {
        let err = "windows".parse::<Product>().unwrap_err();
        assert!(matches!(err, OsacError::UnknownProduct(ref k) if k == "windows"));
        // keys are case-sensitive
        assert!("Mac".parse::<Product>().is_err());
    }

    #[test]
    fn test_package_label() {
        let pkg = Package {
            name: "bash".to_string(),
            version: "3.2".to_string(),
            updated: false,
            url: Url::parse("https://example.com/dl/bash.tar.gz").unwrap(),
        };
        assert_eq!(pkg.label().as_deref(), Some("bash-3.2"));

        let odd = Package {
            version: crate::split::UNDETERMINED_VERSION.to_string(),
            ..pkg
        };
        assert_eq!(odd.label(), None);
    }

    #[test]
    fn test_product_serializes_as_key() {
        let json = serde_json::to_string(&Product::DevTools).unwrap();
        assert_eq!(json, "\"devtools\"");
    }
}
