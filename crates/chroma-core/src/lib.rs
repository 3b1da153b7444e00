//! Color-science engine: space conversion, harmony palettes, WCAG contrast,
//! color vision deficiency simulation and named-color metadata.
//!
//! Every operation is a pure function over immutable values and is safe to
//! call concurrently. The only nondeterminism is the random harmony kind,
//! which draws from an injectable [`rand::Rng`].

pub mod api;
pub mod catalog;
pub mod contrast;
pub mod convert;
pub mod cvd;
pub mod harmony;

pub use catalog::{CatalogEntry, ColorCatalog, catalog};
pub use harmony::{HarmonyOptions, RandomPaletteConfig};

pub use chroma_model::{
    Cmyk, ColorError, ColorMetadata, ContrastResult, CvdVariant, HarmonyKind, HarmonySet, Hsl, Rgb,
    Swatch, WcagLevel,
};
