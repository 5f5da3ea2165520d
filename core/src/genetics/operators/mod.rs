pub mod crossover;
pub mod mutation;
pub mod selection;
