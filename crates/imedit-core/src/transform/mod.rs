//! Transform pipeline — operation parameters, pixel transforms, and dispatch.

pub mod color;
pub mod crop;
pub mod evaluate;
pub mod mirror;
pub mod params;
pub mod thumbnail;
