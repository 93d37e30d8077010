//! Sampling optimization: batched state, control noise and the MPPI loop.

pub mod noise;
pub mod optimizer;
pub mod state;

pub use noise::NoiseGenerator;
pub use optimizer::Optimizer;
pub use state::StateBatches;
