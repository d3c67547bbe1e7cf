pub mod entries;
pub mod health;
pub mod index;
pub mod stats;
