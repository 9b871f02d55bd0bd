//! Configuration system for BudgetFit.
//!
//! Load a search session description - catalog, price interval, per-item
//! constraints - from TOML or YAML files without code changes.
//!
//! Prices and totals are exact decimals; write them as strings in the
//! configuration file so no binary floating point is involved at any point.
//!
//! # Examples
//!
//! Load configuration from a TOML string and build the session inputs:
//!
//! ```
//! use budgetfit_config::SearchConfig;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     [interval]
//!     min_total = "495"
//!     max_total = "500"
//!
//!     [[items]]
//!     name = "Jasmine tea 500ml x15"
//!     unit_price = "48.06"
//!
//!     [[items]]
//!     name = "Lemon tea 250ml x24"
//!     unit_price = "39.49"
//!
//!     [[constraints]]
//!     item = "Jasmine tea 500ml x15"
//!     min = 4
//!     max = 100
//! "#).unwrap();
//!
//! let setup = config.build().unwrap();
//! assert_eq!(setup.catalog.len(), 2);
//! assert!(setup.constraints.get(0).is_bounded());
//! ```
//!
//! Use default config when a file is missing:
//!
//! ```
//! use budgetfit_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! // Proceeds with an empty catalog if the file doesn't exist
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use budgetfit_core::{Catalog, ConstraintTable, Item, PriceInterval};


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Target total-cost interval.
    #[serde(default)]
    pub interval: Option<IntervalConfig>,

    /// Catalog items, in decision order.
    #[serde(default)]
    pub items: Vec<ItemConfig>,

    /// Per-item quantity constraints.
    #[serde(default)]
    pub constraints: Vec<ConstraintConfig>,

    /// Quantity cap for zero-priced unconstrained items.
    #[serde(default)]
    pub zero_price_cap: Option<u32>,
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, dispatching on its extension.
    ///
    /// `.yaml`/`.yml` files are parsed as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid
    /// TOML/YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the target interval.
    pub fn with_interval(mut self, min_total: Decimal, max_total: Decimal) -> Self {
        self.interval = Some(IntervalConfig {
            min_total,
            max_total,
        });
        self
    }

    /// Appends a catalog item.
    pub fn with_item(mut self, name: impl Into<String>, unit_price: Decimal) -> Self {
        self.items.push(ItemConfig {
            name: name.into(),
            unit_price,
        });
        self
    }

    /// Appends a constraint on an item referenced by name or index.
    pub fn with_constraint(mut self, item: impl Into<ItemRef>, min: u32, max: u32) -> Self {
        self.constraints.push(ConstraintConfig {
            item: item.into(),
            min,
            max,
        });
        self
    }

    /// Sets the quantity cap for zero-priced unconstrained items.
    pub fn with_zero_price_cap(mut self, cap: u32) -> Self {
        self.zero_price_cap = Some(cap);
        self
    }

    /// Validates the configuration and builds the session inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the interval is missing or
    /// inverted, a constraint references an unknown item, or a constraint's
    /// `min` exceeds its `max`.
    pub fn build(&self) -> Result<SearchSetup, ConfigError> {
        let interval_config = self
            .interval
            .as_ref()
            .ok_or_else(|| ConfigError::Invalid("missing [interval] section".into()))?;
        let interval = PriceInterval::new(interval_config.min_total, interval_config.max_total)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let items = self
            .items
            .iter()
            .map(|item| Item::new(item.name.clone(), item.unit_price))
            .collect();
        let catalog = Catalog::new(items).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let mut constraints = ConstraintTable::new(catalog.len());
        for constraint in &self.constraints {
            let index = constraint.item.resolve(&catalog)?;
            constraints
                .set(index, constraint.min, constraint.max)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }

        Ok(SearchSetup {
            catalog,
            interval,
            constraints,
            zero_price_cap: self.zero_price_cap,
        })
    }
}

/// Target total-cost interval configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IntervalConfig {
    /// Lower bound, inclusive.
    pub min_total: Decimal,
    /// Upper bound, inclusive.
    pub max_total: Decimal,
}

/// One catalog item.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ItemConfig {
    pub name: String,
    pub unit_price: Decimal,
}

/// One per-item constraint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstraintConfig {
    /// The constrained item, by catalog index or by name.
    pub item: ItemRef,
    pub min: u32,
    pub max: u32,
}

/// Reference to a catalog item by position or by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ItemRef {
    Index(usize),
    Name(String),
}

impl ItemRef {
    fn resolve(&self, catalog: &Catalog) -> Result<usize, ConfigError> {
        match self {
            ItemRef::Index(index) => {
                if *index < catalog.len() {
                    Ok(*index)
                } else {
                    Err(ConfigError::Invalid(format!(
                        "item index {} out of range for catalog of {} items",
                        index,
                        catalog.len()
                    )))
                }
            }
            ItemRef::Name(name) => catalog
                .index_of(name)
                .ok_or_else(|| ConfigError::Invalid(format!("unknown item: {name:?}"))),
        }
    }
}

impl From<usize> for ItemRef {
    fn from(index: usize) -> Self {
        ItemRef::Index(index)
    }
}

impl From<&str> for ItemRef {
    fn from(name: &str) -> Self {
        ItemRef::Name(name.to_string())
    }
}

impl From<String> for ItemRef {
    fn from(name: String) -> Self {
        ItemRef::Name(name)
    }
}

/// Validated session inputs produced by [`SearchConfig::build`].
#[derive(Debug, Clone)]
pub struct SearchSetup {
    pub catalog: Catalog,
    pub interval: PriceInterval,
    pub constraints: ConstraintTable,
    pub zero_price_cap: Option<u32>,
}
