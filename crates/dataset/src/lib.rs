//! Interaction-log loading, feature-matrix construction, and synthetic
//! data generation for the OfferLift toolkit.

pub mod features;
pub mod loader;
pub mod synthetic;

pub use features::{feature_matrix, feature_row};
pub use loader::{load_interactions, write_interactions};
pub use synthetic::{generate_interactions, SyntheticConfig};
