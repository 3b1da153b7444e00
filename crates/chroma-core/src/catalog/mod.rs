//! Read-only lookup from canonical hex to descriptive color metadata.
//!
//! The process-wide catalog is built on first access and never mutated.
//! Lookups never fail: unknown or malformed keys yield
//! [`ColorMetadata::CUSTOM`].

mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use chroma_model::{ColorMetadata, Rgb};
use tracing::{debug, warn};

/// One row of the static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical uppercase 6-digit hex, no `#`.
    pub hex: &'static str,
    pub metadata: ColorMetadata,
}

#[derive(Debug, Clone)]
struct IndexedEntry {
    hex: &'static str,
    rgb: Rgb,
    metadata: ColorMetadata,
}

#[derive(Debug, Clone)]
pub struct ColorCatalog {
    entries: Vec<IndexedEntry>,
    index: HashMap<String, usize>,
    categories: Vec<&'static str>,
}

static DEFAULT_CATALOG: LazyLock<ColorCatalog> =
    LazyLock::new(|| ColorCatalog::from_entries(data::ENTRIES));

/// The built-in catalog.
pub fn catalog() -> &'static ColorCatalog {
    &DEFAULT_CATALOG
}

/// Canonical key for a hex string, or `None` when it is not a valid color.
fn normalize_key(hex: &str) -> Option<String> {
    Rgb::from_hex(hex).ok().map(Rgb::to_hex)
}

impl ColorCatalog {
    /// Build a catalog from table rows. Rows with malformed hex are skipped;
    /// for duplicate keys the first row wins.
    pub fn from_entries(rows: &[CatalogEntry]) -> Self {
        let mut entries = Vec::with_capacity(rows.len());
        let mut index = HashMap::with_capacity(rows.len());
        let mut categories: Vec<&'static str> = Vec::new();

        for row in rows {
            let Ok(rgb) = Rgb::from_hex(row.hex) else {
                warn!(hex = row.hex, name = row.metadata.name, "skipping malformed catalog row");
                continue;
            };
            let key = rgb.to_hex();
            if index.contains_key(&key) {
                warn!(hex = %key, name = row.metadata.name, "skipping duplicate catalog row");
                continue;
            }
            index.insert(key, entries.len());
            if !categories.contains(&row.metadata.category) {
                categories.push(row.metadata.category);
            }
            entries.push(IndexedEntry {
                hex: row.hex,
                rgb,
                metadata: row.metadata,
            });
        }

        debug!(
            entries = entries.len(),
            categories = categories.len(),
            "built color catalog"
        );
        Self {
            entries,
            index,
            categories,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Metadata for an exact catalog entry, if any.
    pub fn get(&self, hex: &str) -> Option<ColorMetadata> {
        let key = normalize_key(hex)?;
        self.index.get(&key).map(|&i| self.entries[i].metadata)
    }

    /// Metadata for `hex`, falling back to [`ColorMetadata::CUSTOM`].
    pub fn lookup(&self, hex: &str) -> ColorMetadata {
        self.get(hex).unwrap_or(ColorMetadata::CUSTOM)
    }

    /// Up to `limit` entries whose category matches (ASCII case-insensitive),
    /// in table order.
    pub fn colors_by_category(
        &self,
        category: &str,
        limit: usize,
    ) -> Vec<(&'static str, ColorMetadata)> {
        let category = category.trim();
        self.entries
            .iter()
            .filter(|entry| entry.metadata.category.eq_ignore_ascii_case(category))
            .take(limit)
            .map(|entry| (entry.hex, entry.metadata))
            .collect()
    }

    /// Distinct category labels in first-seen table order.
    pub fn all_categories(&self) -> &[&'static str] {
        &self.categories
    }

    /// Entry with the smallest squared RGB distance to `rgb`. Ties resolve to
    /// the earliest entry. `None` only for an empty catalog.
    pub fn nearest(&self, rgb: Rgb) -> Option<(&'static str, ColorMetadata)> {
        self.entries
            .iter()
            .min_by_key(|entry| squared_distance(entry.rgb, rgb))
            .map(|entry| (entry.hex, entry.metadata))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ColorMetadata)> + '_ {
        self.entries.iter().map(|entry| (entry.hex, entry.metadata))
    }
}

fn squared_distance(a: Rgb, b: Rgb) -> u32 {
    a.channels()
        .iter()
        .zip(b.channels())
        .map(|(&x, y)| {
            let d = u32::from(x.abs_diff(y));
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[CatalogEntry] = &[
        CatalogEntry {
            hex: "FF0000",
            metadata: ColorMetadata {
                name: "Red",
                category: "Warm",
                psychology: "",
                use_cases: &[],
            },
        },
        CatalogEntry {
            hex: "0000FF",
            metadata: ColorMetadata {
                name: "Blue",
                category: "Cool",
                psychology: "",
                use_cases: &[],
            },
        },
        CatalogEntry {
            hex: "ff0000",
            metadata: ColorMetadata {
                name: "Duplicate Red",
                category: "Warm",
                psychology: "",
                use_cases: &[],
            },
        },
        CatalogEntry {
            hex: "NOTHEX",
            metadata: ColorMetadata {
                name: "Broken",
                category: "Broken",
                psychology: "",
                use_cases: &[],
            },
        },
        CatalogEntry {
            hex: "FF8000",
            metadata: ColorMetadata {
                name: "Orange",
                category: "Warm",
                psychology: "",
                use_cases: &[],
            },
        },
    ];

    #[test]
    fn skips_duplicate_and_malformed_rows() {
        let catalog = ColorCatalog::from_entries(SAMPLE);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.lookup("#ff0000").name, "Red");
        assert_eq!(catalog.all_categories(), &["Warm", "Cool"]);
    }

    #[test]
    fn category_listing_respects_limit_and_order() {
        let catalog = ColorCatalog::from_entries(SAMPLE);
        let warm: Vec<_> = catalog
            .colors_by_category("warm", 10)
            .into_iter()
            .map(|(hex, _)| hex)
            .collect();
        assert_eq!(warm, vec!["FF0000", "FF8000"]);
        assert_eq!(catalog.colors_by_category("Warm", 1).len(), 1);
        assert!(catalog.colors_by_category("Warm", 0).is_empty());
        assert!(catalog.colors_by_category("Missing", 5).is_empty());
    }

    #[test]
    fn nearest_prefers_earliest_on_ties() {
        let catalog = ColorCatalog::from_entries(SAMPLE);
        let (hex, metadata) = catalog.nearest(Rgb::new(250, 10, 0)).unwrap();
        assert_eq!((hex, metadata.name), ("FF0000", "Red"));
        // equidistant from FF0000 and FF8000
        let (hex, _) = catalog.nearest(Rgb::new(255, 64, 0)).unwrap();
        assert_eq!(hex, "FF0000");
        assert!(ColorCatalog::from_entries(&[]).nearest(Rgb::BLACK).is_none());
    }

    #[test]
    fn squared_distance_is_symmetric() {
        let a = Rgb::new(0, 10, 200);
        let b = Rgb::new(30, 0, 255);
        assert_eq!(squared_distance(a, b), squared_distance(b, a));
        assert_eq!(squared_distance(a, b), 900 + 100 + 3025);
    }
}
