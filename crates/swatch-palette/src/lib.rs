//! # swatch-palette: palette derivation engine
//!
//! Turns two or three seed colors into a full design palette: nine-level
//! shade ramps for the brand roles, a neutral ramp, and four status ramps.
//! A palette can then be flattened into preview variables for a light or
//! dark mock UI, sent over the wire as JSON, saved as a seed-only record,
//! or handed to file exporters.
//!
//! # Architecture
//!
//! ```text
//! primary + secondary (+ tertiary, include flag)
//!     │
//!     ▼
//! palette.rs:  parse seeds, pick ramp roles, canonical neutral/status seeds
//!     │
//!     ▼
//! ramp.rs:     seed → 9 shades (HSB curve anchored at 500)
//!     │
//!     ▼
//! Palette ─────┬──▶ preview.rs: mode-dependent name → hex bindings
//!              ├──▶ wire.rs:    JSON response encode/decode
//!              ├──▶ export.rs:  file manifest for encoders
//!              └──▶ record.rs:  seed-only saved palettes (re-derived on read)
//!
//! coalesce.rs: latest-wins debounce in front of the whole pipeline
//! ```
//!
//! # Purity
//!
//! Every derivation is a pure function of its inputs. Nothing is cached and
//! nothing is shared, so recomputing on every keystroke is always correct;
//! [`RecomputeCoalescer`] only makes it cheaper.

// HSB math converts between small integers and floats constantly.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Hue/saturation/brightness variable names are inherently similar.
#![allow(clippy::similar_names)]
#![allow(clippy::module_name_repetitions)]

pub mod coalesce;
pub mod error;
pub mod export;
pub mod palette;
pub mod preview;
pub mod ramp;
pub mod record;
pub mod wire;

pub use coalesce::RecomputeCoalescer;
pub use error::{PaletteError, Result};
pub use export::{ExportFile, ExportRequest, FileType};
pub use palette::{Palette, PaletteRequest, Role, assemble, assemble_colors};
pub use preview::{Mode, PreviewVariableSet, preview_variables};
pub use ramp::{RampRole, Shade, ShadeLevel, ShadeRamp, StatusColor, generate_ramp, generate_ramp_from_hex};
pub use record::{FileRef, PaletteStatus, SavedPalette};
pub use wire::{PaletteResponse, RampPayload, ShadePayload};
