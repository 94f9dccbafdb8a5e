//! Sample catalog inserted into an empty product collection at startup.

use std::fmt;
use tracing::{info, instrument, warn};

use crate::error::ProductResult;
use crate::models::CreateProduct;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// A sample product: title, description, price, category.
pub struct SampleProduct {
    pub title: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub category: &'static str,
}

impl SampleProduct {
    fn to_create(&self) -> CreateProduct {
        CreateProduct {
            title: self.title.to_string(),
            description: Some(self.description.to_string()),
            price: self.price,
            category: self.category.to_string(),
            in_stock: true,
        }
    }
}

pub const SAMPLE_PRODUCTS: [SampleProduct; 6] = [
    SampleProduct {
        title: "Aurora Pro Headphones",
        description: "Wireless noise-cancelling over‑ear with studio clarity.",
        price: 199.99,
        category: "audio",
    },
    SampleProduct {
        title: "Nebula Smartwatch X",
        description: "AMOLED display, 7‑day battery, health suite.",
        price: 249.0,
        category: "wearables",
    },
    SampleProduct {
        title: "Lumen Desk Lamp",
        description: "Touch dimming, USB‑C hub, minimalist aluminum.",
        price: 89.0,
        category: "home",
    },
    SampleProduct {
        title: "Orbit Mechanical Keyboard",
        description: "Hot‑swap switches, RGB underglow, CNC chassis.",
        price: 159.0,
        category: "peripherals",
    },
    SampleProduct {
        title: "Voyager Sling Bag",
        description: "Water‑resistant, magnetic latches, tech‑ready.",
        price: 79.0,
        category: "travel",
    },
    SampleProduct {
        title: "Quanta Power Bank 20K",
        description: "PD 65W fast charge, slim metal body.",
        price: 69.0,
        category: "power",
    },
];

/// What a seeding run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection already held `existing` products; nothing was inserted
    AlreadySeeded { existing: u64 },
    Seeded { inserted: usize, skipped: usize },
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::AlreadySeeded { existing } => {
                write!(f, "catalog already has {existing} products, seeding skipped")
            }
            SeedOutcome::Seeded { inserted, skipped } => {
                write!(f, "seeded {inserted} products ({skipped} skipped)")
            }
        }
    }
}

/// Insert [`SAMPLE_PRODUCTS`] when the collection is empty.
///
/// A sample that fails validation or insertion is logged and skipped. An
/// error is returned only when the store cannot be counted; callers log it
/// and carry on serving.
pub async fn seed_products<R: ProductRepository>(
    service: &ProductService<R>,
) -> ProductResult<SeedOutcome> {
    seed_products_from(service, &SAMPLE_PRODUCTS).await
}

#[instrument(skip_all, fields(samples = samples.len()))]
pub async fn seed_products_from<R: ProductRepository>(
    service: &ProductService<R>,
    samples: &[SampleProduct],
) -> ProductResult<SeedOutcome> {
    let existing = service.count_products().await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    let mut inserted = 0;
    let mut skipped = 0;
    for sample in samples {
        match service.create_product(sample.to_create()).await {
            Ok(id) => {
                inserted += 1;
                info!(product_id = %id, title = sample.title, "Sample product inserted");
            }
            Err(e) => {
                skipped += 1;
                warn!(title = sample.title, error = %e, "Skipping sample product");
            }
        }
    }

    Ok(SeedOutcome::Seeded { inserted, skipped })
}
