//! Shaftkit: propeller-shaft schematic drafting
//!
//! A toolkit for assembling axial shaft components (bodies, tapers, threaded
//! sections, liners) along a 1-D axis, resolving them into a gap-free layout
//! with synthesized filler segments, and rendering dimensioned schematics.

pub mod cli;
pub mod core;
pub mod doc;
pub mod entities;
pub mod geometry;
