pub mod sim_resources;

pub use sim_resources::{EcsSimConfig, NetRole, NeurotoxinRng, SimRng, distribute_rng};
