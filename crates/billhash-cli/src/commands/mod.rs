pub mod hash;
pub mod index;
pub mod matches;
