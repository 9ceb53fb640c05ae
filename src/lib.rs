//! daypoll: who is free on which business day, with a live tally. Hexagonal layout.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
