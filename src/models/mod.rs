pub mod catalog;

pub use catalog::{Continents, Countries, CountryEntry};
