//! # blepad types
//!
//! Plain data shared between the blepad control core and the board crates
//! that implement its collaborators.
//!
//! - [`input`] - Input channels and the sampled [`InputState`](input::InputState)
//! - [`direction`] - The nine-way [`DirectionCode`](direction::DirectionCode)
//! - [`wake`] - Why the device came out of reset or deep sleep

#![no_std]

pub mod direction;
pub mod input;
pub mod wake;
