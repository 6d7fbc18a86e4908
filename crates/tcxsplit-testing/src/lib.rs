//! Testing infrastructure for tcxsplit tests.
//!
//! - `TcxBuilder`: fluent construction of TCX exports with known timestamps
//!   and distances
//! - `TestWorld`: isolated temp directory holding an input file and an
//!   output directory
//! - `fixtures`: ready-made exports used across crates

pub mod builder;
pub mod fixtures;
pub mod world;

pub use builder::TcxBuilder;
pub use world::TestWorld;
