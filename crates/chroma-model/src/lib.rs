//! Value types for the chroma color-science engine.
//!
//! Every type here is an immutable value: operations in `chroma-core`
//! consume them and produce new ones.

pub mod accessibility;
pub mod color;
pub mod cvd;
pub mod error;
pub mod harmony;
pub mod metadata;

pub use accessibility::{ContrastResult, WcagLevel};
pub use color::{Cmyk, Hsl, Rgb, normalize_hue, unit_to_channel};
pub use cvd::CvdVariant;
pub use error::{ColorError, Result};
pub use harmony::{HarmonyKind, HarmonySet, Swatch};
pub use metadata::ColorMetadata;
