// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod logging;
pub mod persistence;

pub use crate::core::analysis::{LetterAnalyzer, PictographicAnalysis};
pub use crate::core::converter::PaleoConverter;
pub use crate::core::engine::PaleoEngine;
pub use crate::core::nikud::strip_nikud;
pub use crate::core::pronunciation::AncientPronouncer;
pub use crate::core::types::ScriptMode;
pub use crate::error::{PaleoError, Result};
