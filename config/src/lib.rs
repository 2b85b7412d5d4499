//! # Config Crate
//!
//! Centralized configuration constants for the walkmesh pipeline.
//! All tolerances and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::WEIGHT_EPSILON;
//!
//! // Use WEIGHT_EPSILON when comparing barycentric weights
//! let sum: f32 = 0.25 + 0.25 + 0.5;
//! assert!((sum - 1.0).abs() < WEIGHT_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Exact Where It Matters**: Core walk semantics compare exactly; these
//!   tolerances exist for tests and world-space comparisons only
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
