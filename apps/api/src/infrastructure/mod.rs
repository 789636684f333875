// Infrastructure layer module
// Storage adapters for the domain repository traits

pub mod repositories;
