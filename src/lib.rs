// Domain layer - core simulation logic
pub mod domain;

// Application layer - simulation orchestration
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, Pattern, presets};
pub use application::{GameState, STEP_INTERVAL};
