pub mod animals;
pub mod extremes;
