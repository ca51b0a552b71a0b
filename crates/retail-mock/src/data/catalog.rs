use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MockError, MockResult};

pub const DEFAULT_SEASONAL_FACTORS: [f64; 12] = [
    0.8,  // January
    0.85, // February
    0.9,  // March
    1.0,  // April
    1.1,  // May
    1.2,  // June
    1.15, // July
    1.1,  // August
    1.0,  // September
    0.9,  // October
    0.95, // November
    1.3,  // December
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub base_price: f64,
    pub popularity: f64,
    pub stock: u64,
    pub color: String,
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    pub market_strength: f64,
}

/// Per-month demand multipliers, indexed by zero-based month.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonalFactors(pub [f64; 12]);

impl Default for SeasonalFactors {
    fn default() -> Self {
        Self(DEFAULT_SEASONAL_FACTORS)
    }
}

impl SeasonalFactors {
    /// `month0` is 0 for January. Out-of-range indexes wrap.
    pub fn for_month(&self, month0: u32) -> f64 {
        self.0[(month0 % 12) as usize]
    }
}

/// Static reference data the generators read from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub regions: Vec<Region>,
    pub products: Vec<Product>,
    #[serde(default)]
    pub seasonal_factors: SeasonalFactors,
}

impl Default for Catalog {
    fn default() -> Self {
        let regions = [
            ("North America", 1.0),
            ("Europe", 0.9),
            ("Asia Pacific", 0.95),
            ("Latin America", 0.7),
            ("Middle East", 0.8),
            ("Africa", 0.6),
        ]
        .into_iter()
        .map(|(name, market_strength)| Region {
            name: name.to_string(),
            market_strength,
        })
        .collect();

        let products = [
            ("Running Shoes", 120.0, 0.9, "prod_001", 450, "Blue/White"),
            ("Casual Sneakers", 85.0, 1.0, "prod_002", 680, "Black/Gray"),
            ("Athletic Trainers", 110.0, 0.8, "prod_003", 320, "Red/Black"),
            ("Hiking Boots", 150.0, 0.6, "prod_004", 210, "Brown"),
            ("Dress Shoes", 130.0, 0.7, "prod_005", 180, "Black"),
            ("Sandals", 65.0, 0.75, "prod_006", 520, "Tan"),
            ("Basketball Shoes", 140.0, 0.85, "prod_007", 290, "White/Red"),
        ]
        .into_iter()
        .map(|(name, base_price, popularity, id, stock, color)| Product {
            name: name.to_string(),
            base_price,
            popularity,
            stock,
            color: color.to_string(),
            id: id.to_string(),
        })
        .collect();

        Self {
            regions,
            products,
            seasonal_factors: SeasonalFactors::default(),
        }
    }
}

impl Catalog {
    pub fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn product_names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn require_region(&self, name: &str) -> MockResult<&Region> {
        self.region(name).ok_or_else(|| {
            MockError::InvalidArgument(format!(
                "unknown region '{name}' (expected one of: {})",
                self.region_names().join(", ")
            ))
        })
    }

    pub fn require_product(&self, name: &str) -> MockResult<&Product> {
        self.product(name).ok_or_else(|| {
            MockError::InvalidArgument(format!(
                "unknown product '{name}' (expected one of: {})",
                self.product_names().join(", ")
            ))
        })
    }

    pub fn validate(&self) -> MockResult<()> {
        if self.regions.is_empty() {
            return Err(MockError::InvalidCatalog(
                "catalog must define at least one region".to_string(),
            ));
        }
        if self.products.is_empty() {
            return Err(MockError::InvalidCatalog(
                "catalog must define at least one product".to_string(),
            ));
        }

        let mut region_names = HashSet::new();
        for region in &self.regions {
            if region.name.trim().is_empty() {
                return Err(MockError::InvalidCatalog(
                    "region name must not be empty".to_string(),
                ));
            }
            if !region_names.insert(region.name.as_str()) {
                return Err(MockError::InvalidCatalog(format!(
                    "duplicate region '{}'",
                    region.name
                )));
            }
            if !(region.market_strength > 0.0 && region.market_strength <= 1.0) {
                return Err(MockError::InvalidCatalog(format!(
                    "region '{}' market strength {} must be in (0, 1]",
                    region.name, region.market_strength
                )));
            }
        }

        let mut product_names = HashSet::new();
        let mut product_ids = HashSet::new();
        for product in &self.products {
            if product.name.trim().is_empty() {
                return Err(MockError::InvalidCatalog(
                    "product name must not be empty".to_string(),
                ));
            }
            if !product_names.insert(product.name.as_str()) {
                return Err(MockError::InvalidCatalog(format!(
                    "duplicate product '{}'",
                    product.name
                )));
            }
            if !product_ids.insert(product.id.as_str()) {
                return Err(MockError::InvalidCatalog(format!(
                    "duplicate product id '{}'",
                    product.id
                )));
            }
            if !(product.base_price > 0.0 && product.base_price.is_finite()) {
                return Err(MockError::InvalidCatalog(format!(
                    "product '{}' base price {} must be positive",
                    product.name, product.base_price
                )));
            }
            if !(0.0..=1.0).contains(&product.popularity) {
                return Err(MockError::InvalidCatalog(format!(
                    "product '{}' popularity {} must be in [0, 1]",
                    product.name, product.popularity
                )));
            }
        }

        if self
            .seasonal_factors
            .0
            .iter()
            .any(|f| !f.is_finite() || *f < 0.0)
        {
            return Err(MockError::InvalidCatalog(
                "seasonal factors must be finite and non-negative".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn load_catalog(path: impl AsRef<Path>) -> MockResult<Catalog> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let catalog = serde_yaml::from_slice::<Catalog>(&bytes)?;
    catalog.validate()?;
    debug!(
        path = %path.display(),
        regions = catalog.regions.len(),
        products = catalog.products.len(),
        "loaded catalog override"
    );
    Ok(catalog)
}

/// Falls back to the built-in catalog when no override path is given.
pub fn resolve_catalog(path: Option<&Path>) -> MockResult<Catalog> {
    match path {
        Some(path) => load_catalog(path),
        None => Ok(Catalog::default()),
    }
}
