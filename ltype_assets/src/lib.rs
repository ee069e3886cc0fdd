//! Asset identifiers and lookup tables for L-Type content packs.
//!
//! A build scans sprite description resources and pack directories, assigns
//! every asset a category-tagged identifier and renders the tables the game
//! clients compile in. See [`pipeline::build`].

pub mod allocator;
pub mod animation;
pub mod catalog;
pub mod category;
pub mod config;
pub mod description;
pub mod emit;
pub mod error;
pub mod level;
pub mod pipeline;
pub mod registry;
pub mod scan;
pub mod tables;

pub use catalog::{Catalog, Sprite};
pub use category::{AssetId, Category};
pub use config::BuildConfig;
pub use error::{BuildError, Result};
pub use pipeline::{BuildOutput, build};
pub use tables::{FullTables, MinimalTable};
