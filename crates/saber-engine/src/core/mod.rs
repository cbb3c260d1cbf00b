pub mod cooldown;
pub mod permission;
pub mod power;
pub mod rng;
