//! Helper items to assist the working of crystsym.

pub mod cell;
pub mod geometry;
