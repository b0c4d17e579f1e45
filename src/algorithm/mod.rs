/// Per-walker trail recording with stroke breaks
pub mod path;
/// Population driver owning walkers, paths and the registry
pub mod population;
/// Seed hashing and the seeded random source
pub mod random;
/// Initial placement, dropoff culling and color assignment
pub mod spawner;
/// Walker state machine and candidate search
pub mod walker;

pub use population::WalkerPopulation;
pub use spawner::PopulationSpawner;
pub use walker::{WalkMode, Walker};
