//! Segment model - the four axial component kinds of a propeller shaft
//!
//! Every persisted component carries a stable ID, a physical start offset
//! measured from the AFT (zero) datum, and a length. The variant set is
//! closed: Body, Taper, Thread, Liner. Positions and lengths are always
//! millimeters.

use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;
use crate::core::units::MM_PER_INCH;

/// Which shaft end an authored offset is measured from
///
/// AFT is the zero datum. FWD-authored components store their offset from the
/// forward end and are re-anchored on every resolution (see geometry::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum AxialReference {
    #[default]
    Aft,
    Fwd,
}

/// Display-label side for a taper (never affects geometry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaperOrientation {
    Aft,
    Fwd,
}

/// What mounts on a threaded section (drawing annotation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndAttachment {
    Propeller,
    Nut,
    Coupling,
}

/// The closed set of component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Body,
    Taper,
    Thread,
    Liner,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Body => write!(f, "body"),
            ComponentKind::Taper => write!(f, "taper"),
            ComponentKind::Thread => write!(f, "thread"),
            ComponentKind::Liner => write!(f, "liner"),
        }
    }
}

/// Common interface over the four segment kinds
pub trait Segment {
    /// The component kind tag
    fn kind(&self) -> ComponentKind;

    /// Stable identity
    fn id(&self) -> &EntityId;

    /// Physical start offset from the AFT datum (mm)
    fn start_from_aft_mm(&self) -> f64;

    /// Axial length (mm)
    fn length_mm(&self) -> f64;

    /// Physical end offset from the AFT datum (mm)
    fn end_from_aft_mm(&self) -> f64 {
        self.start_from_aft_mm() + self.length_mm()
    }
}

/// Keyway cut into a taper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyway {
    pub width_mm: f64,
    pub depth_mm: f64,

    /// Axial length of the keyway; must not exceed the taper length
    pub length_mm: f64,

    /// Spoon-ended (sled-runner) keyway rather than square-cut
    #[serde(default)]
    pub spooned: bool,
}

/// Plain cylindrical section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: EntityId,
    pub start_from_aft_mm: f64,
    pub length_mm: f64,
    pub dia_mm: f64,
}

impl Segment for Body {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Body
    }
    fn id(&self) -> &EntityId {
        &self.id
    }
    fn start_from_aft_mm(&self) -> f64 {
        self.start_from_aft_mm
    }
    fn length_mm(&self) -> f64 {
        self.length_mm
    }
}

/// Conical transition between two diameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taper {
    pub id: EntityId,
    pub start_from_aft_mm: f64,
    pub length_mm: f64,

    /// Diameter at the AFT end of the span
    pub start_dia_mm: f64,

    /// Diameter at the FWD end of the span
    pub end_dia_mm: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyway: Option<Keyway>,

    /// Which side the SET/LET labels hang on; display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<TaperOrientation>,

    /// Authoring metadata: which end the user measured from
    #[serde(default)]
    pub authored_reference: AxialReference,

    /// Authored offset from the FWD datum; only meaningful when
    /// `authored_reference` is FWD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authored_start_from_fwd_mm: Option<f64>,
}

impl Segment for Taper {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Taper
    }
    fn id(&self) -> &EntityId {
        &self.id
    }
    fn start_from_aft_mm(&self) -> f64 {
        self.start_from_aft_mm
    }
    fn length_mm(&self) -> f64 {
        self.length_mm
    }
}

/// Threaded section
///
/// `pitch_mm` and `tpi` are mutually derivable (`tpi = 25.4 / pitch_mm`);
/// `normalized()` fills whichever is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: EntityId,
    pub start_from_aft_mm: f64,
    pub length_mm: f64,
    pub major_dia_mm: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch_mm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tpi: Option<f64>,

    /// When true and this thread sits at a shaft end, its span is excluded
    /// from the dimensioned overall length
    #[serde(default)]
    pub exclude_from_oal: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_attachment: Option<EndAttachment>,

    #[serde(default)]
    pub authored_reference: AxialReference,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authored_start_from_fwd_mm: Option<f64>,
}

impl Thread {
    /// Fill in whichever of pitch/tpi is missing from the other
    ///
    /// If both are present the stored values win (no cross-check); if both
    /// are absent both stay `None` and validation flags it.
    pub fn normalized(&self) -> Thread {
        let mut t = self.clone();
        match (t.pitch_mm, t.tpi) {
            (Some(pitch), None) if pitch > 0.0 => t.tpi = Some(MM_PER_INCH / pitch),
            (None, Some(tpi)) if tpi > 0.0 => t.pitch_mm = Some(MM_PER_INCH / tpi),
            _ => {}
        }
        t
    }
}

impl Segment for Thread {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Thread
    }
    fn id(&self) -> &EntityId {
        &self.id
    }
    fn start_from_aft_mm(&self) -> f64 {
        self.start_from_aft_mm
    }
    fn length_mm(&self) -> f64 {
        self.length_mm
    }
}

/// Liner sleeve over the shaft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liner {
    pub id: EntityId,
    pub start_from_aft_mm: f64,
    pub length_mm: f64,

    /// Outside diameter
    pub od_mm: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub authored_reference: AxialReference,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authored_start_from_fwd_mm: Option<f64>,

    /// Persisted physical end; kept equal to `start + length` by the
    /// resolver's normalization step
    #[serde(default)]
    pub end_mm_physical: f64,
}

impl Liner {
    /// Recompute the persisted physical end from start + length
    pub fn normalized(&self) -> Liner {
        let mut l = self.clone();
        l.end_mm_physical = l.start_from_aft_mm + l.length_mm;
        l
    }
}

impl Segment for Liner {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Liner
    }
    fn id(&self) -> &EntityId {
        &self.id
    }
    fn start_from_aft_mm(&self) -> f64 {
        self.start_from_aft_mm
    }
    fn length_mm(&self) -> f64 {
        self.length_mm
    }
}
