//! Entity types - persisted segment records and the ShaftSpec aggregate

pub mod segment;
pub mod shaft;

pub use segment::{
    AxialReference, Body, ComponentKind, EndAttachment, Keyway, Liner, Segment, Taper,
    TaperOrientation, Thread,
};
pub use shaft::{Severity, ShaftSpec, ValidationIssue};
