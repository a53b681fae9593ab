pub mod city;
pub mod country;

pub use city::{City, CityDraft, Position};
pub use country::{countries_from_cities, Country};
