pub mod ephemeris;
pub mod geocode;
pub mod trajectory;
pub mod web;
