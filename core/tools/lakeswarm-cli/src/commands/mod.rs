pub mod evolve;
pub mod inspect;
