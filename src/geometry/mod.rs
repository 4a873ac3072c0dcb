//! Geometry engine - the pure resolution and derivation core
//!
//! Everything in this module is a total function from an immutable ShaftSpec
//! snapshot to derived values. Nothing here mutates the spec, performs I/O,
//! or caches; callers re-invoke on every snapshot change. All values are
//! millimeters.

pub mod autobody;
pub mod resolve;
pub mod tier;
pub mod window;

pub use autobody::{derive_auto_bodies, resolve_layout, ShaftLayout};
pub use resolve::{
    resolve_explicit_components, AutoBodyKey, ResolvedComponent, ResolvedDetail, Source,
};
pub use tier::{assign_tiers, DimSpan, RailKind, TieredSpan};
pub use window::{compute_oal_window, OalWindow};

/// Geometric comparison tolerance (mm)
pub const EPS_MM: f64 = 1e-3;

/// How close a thread must sit to a shaft end to count as an end thread (mm)
pub const END_EPS_MM: f64 = 0.5;
