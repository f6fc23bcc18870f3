//! Explorer configuration: where the city datasets live and how rows are paged.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExplorerError, ExplorerResult};
use crate::selection::City;

/// Number of rows the pager shows per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Immutable mapping from a [`City`] to the file name of its trip dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCatalog {
    sources: BTreeMap<City, PathBuf>,
}

impl Default for CityCatalog {
    fn default() -> Self {
        let sources = BTreeMap::from([
            (City::Chicago, PathBuf::from("chicago.csv")),
            (City::NewYorkCity, PathBuf::from("new_york_city.csv")),
            (City::Washington, PathBuf::from("washington.csv")),
        ]);
        Self { sources }
    }
}

impl CityCatalog {
    /// Build a catalog from a JSON object such as `{"washington": "dc_2017.csv"}`.
    ///
    /// Cities not named in the document keep their default file.
    pub fn from_json_str(json: &str) -> ExplorerResult<Self> {
        let overrides: BTreeMap<City, PathBuf> = serde_json::from_str(json)?;
        let mut catalog = Self::default();
        catalog.sources.extend(overrides);
        Ok(catalog)
    }

    /// Read a catalog override file; see [`Self::from_json_str`].
    pub fn from_json_path(path: impl AsRef<Path>) -> ExplorerResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// File backing `city`, relative to the data directory unless absolute.
    pub fn source_for(&self, city: City) -> ExplorerResult<&Path> {
        self.sources
            .get(&city)
            .map(PathBuf::as_path)
            .ok_or_else(|| ExplorerError::SchemaMismatch {
                message: format!("no dataset configured for city '{city}'"),
            })
    }
}

/// Options controlling the explorer.
///
/// Use [`Default`] for the stock layout (datasets in the working directory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Directory the catalog's relative paths are resolved against.
    pub data_dir: PathBuf,
    pub catalog: CityCatalog,
    /// Rows per pager page.
    pub page_size: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            catalog: CityCatalog::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ExplorerConfig {
    /// Full path of the dataset for `city`.
    pub fn dataset_path(&self, city: City) -> ExplorerResult<PathBuf> {
        Ok(self.data_dir.join(self.catalog.source_for(city)?))
    }
}
