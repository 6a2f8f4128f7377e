pub mod states;
pub mod color;
pub mod params;
pub mod modes;
pub mod store;
pub mod collision;
pub mod forces;
pub mod integrator;
pub mod logbook;
pub mod engine;
pub mod driver;
pub mod spawner;
pub mod scenario;
