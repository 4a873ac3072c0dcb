//! `shaftkit add` - add components to the shaft

use clap::{Args, Subcommand, ValueEnum};
use console::style;
use miette::{miette, IntoDiagnostic, Result};
use std::path::Path;

use crate::cli::helpers::{format_short_id, load_document};
use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::units::Unit;
use crate::doc::ShaftDocument;
use crate::entities::segment::{
    AxialReference, Body, EndAttachment, Keyway, Liner, Taper, TaperOrientation, Thread,
};

#[derive(Subcommand, Debug)]
pub enum AddCommands {
    /// Add a plain cylindrical body
    Body(AddBodyArgs),

    /// Add a taper
    Taper(AddTaperArgs),

    /// Add a threaded section
    Thread(AddThreadArgs),

    /// Add a liner sleeve
    Liner(AddLinerArgs),
}

/// Position flags shared by FWD-capable components: exactly one of
/// `--start` (from AFT) or `--start-from-fwd` must be given
#[derive(Args, Debug)]
pub struct PositionArgs {
    /// Start offset from the AFT (zero) datum
    #[arg(long, conflicts_with = "start_from_fwd")]
    pub start: Option<f64>,

    /// Start offset from the FWD end; re-anchors automatically when the
    /// measurement datum shifts
    #[arg(long = "start-from-fwd")]
    pub start_from_fwd: Option<f64>,
}

impl PositionArgs {
    /// Authored reference plus stored fields, with inputs already in mm
    fn authored(&self, unit: Unit) -> Result<(AxialReference, f64, Option<f64>)> {
        match (self.start, self.start_from_fwd) {
            (Some(start), None) => Ok((AxialReference::Aft, unit.to_mm(start), None)),
            // FWD-authored: the stored AFT start is derived at resolution
            // time; persist 0 as a placeholder the resolver ignores.
            (None, Some(fwd)) => Ok((AxialReference::Fwd, 0.0, Some(unit.to_mm(fwd)))),
            (None, None) => Err(miette!("give one of --start or --start-from-fwd")),
            (Some(_), Some(_)) => unreachable!("clap conflicts_with guards this"),
        }
    }
}

#[derive(Args, Debug)]
pub struct AddBodyArgs {
    /// Start offset from the AFT datum (bodies are always AFT-authored)
    #[arg(long)]
    pub start: f64,

    /// Axial length
    #[arg(long)]
    pub len: f64,

    /// Diameter
    #[arg(long)]
    pub dia: f64,
}

#[derive(Args, Debug)]
pub struct AddTaperArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// Axial length
    #[arg(long)]
    pub len: f64,

    /// Diameter at the AFT end of the span
    #[arg(long = "start-dia")]
    pub start_dia: f64,

    /// Diameter at the FWD end of the span
    #[arg(long = "end-dia")]
    pub end_dia: f64,

    /// Which side the SET/LET labels hang on (display only)
    #[arg(long, value_enum)]
    pub orientation: Option<TaperSide>,

    /// Keyway width
    #[arg(long = "keyway-width", requires = "keyway_depth", requires = "keyway_length")]
    pub keyway_width: Option<f64>,

    /// Keyway depth
    #[arg(long = "keyway-depth", requires = "keyway_width")]
    pub keyway_depth: Option<f64>,

    /// Keyway axial length (must not exceed the taper length)
    #[arg(long = "keyway-length", requires = "keyway_width")]
    pub keyway_length: Option<f64>,

    /// Spoon-ended keyway
    #[arg(long = "keyway-spooned", requires = "keyway_width")]
    pub keyway_spooned: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TaperSide {
    Aft,
    Fwd,
}

impl From<TaperSide> for TaperOrientation {
    fn from(side: TaperSide) -> Self {
        match side {
            TaperSide::Aft => TaperOrientation::Aft,
            TaperSide::Fwd => TaperOrientation::Fwd,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddThreadArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// Axial length
    #[arg(long)]
    pub len: f64,

    /// Major diameter
    #[arg(long)]
    pub dia: f64,

    /// Thread pitch in mm (derives TPI)
    #[arg(long)]
    pub pitch: Option<f64>,

    /// Threads per inch (derives pitch)
    #[arg(long)]
    pub tpi: Option<f64>,

    /// Exclude this thread's span from the dimensioned overall length when
    /// it sits at a shaft end
    #[arg(long = "exclude-from-oal")]
    pub exclude_from_oal: bool,

    /// What mounts on this thread (drawing annotation)
    #[arg(long, value_enum)]
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Attachment {
    Propeller,
    Nut,
    Coupling,
}

impl From<Attachment> for EndAttachment {
    fn from(a: Attachment) -> Self {
        match a {
            Attachment::Propeller => EndAttachment::Propeller,
            Attachment::Nut => EndAttachment::Nut,
            Attachment::Coupling => EndAttachment::Coupling,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddLinerArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// Axial length
    #[arg(long)]
    pub len: f64,

    /// Outside diameter
    #[arg(long)]
    pub od: f64,

    /// Label on the drawing (e.g. "aft bearing")
    #[arg(long)]
    pub label: Option<String>,
}

pub fn run(cmd: AddCommands, file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    let unit = doc.preferred_unit;

    let (next, id, kind_name) = match cmd {
        AddCommands::Body(args) => {
            if args.len < 0.0 || args.dia < 0.0 {
                return Err(miette!("length and diameter cannot be negative"));
            }
            let body = Body {
                id: EntityId::new(EntityPrefix::Body),
                start_from_aft_mm: unit.to_mm(args.start),
                length_mm: unit.to_mm(args.len),
                dia_mm: unit.to_mm(args.dia),
            };
            let id = body.id.clone();
            (doc.with_spec(doc.spec.with_body(body)), id, "body")
        }
        AddCommands::Taper(args) => {
            let (reference, start_mm, fwd_mm) = args.position.authored(unit)?;
            let keyway = match (args.keyway_width, args.keyway_depth, args.keyway_length) {
                (Some(w), Some(d), Some(l)) => Some(Keyway {
                    width_mm: unit.to_mm(w),
                    depth_mm: unit.to_mm(d),
                    length_mm: unit.to_mm(l),
                    spooned: args.keyway_spooned,
                }),
                (None, None, None) => None,
                _ => {
                    return Err(miette!(
                        "keyway needs --keyway-width, --keyway-depth and --keyway-length together"
                    ))
                }
            };
            let taper = Taper {
                id: EntityId::new(EntityPrefix::Taper),
                start_from_aft_mm: start_mm,
                length_mm: unit.to_mm(args.len),
                start_dia_mm: unit.to_mm(args.start_dia),
                end_dia_mm: unit.to_mm(args.end_dia),
                keyway,
                orientation: args.orientation.map(Into::into),
                authored_reference: reference,
                authored_start_from_fwd_mm: fwd_mm,
            };
            let id = taper.id.clone();
            (doc.with_spec(doc.spec.with_taper(taper)), id, "taper")
        }
        AddCommands::Thread(args) => {
            let (reference, start_mm, fwd_mm) = args.position.authored(unit)?;
            if args.pitch.is_none() && args.tpi.is_none() {
                return Err(miette!("give at least one of --pitch or --tpi"));
            }
            let thread = Thread {
                id: EntityId::new(EntityPrefix::Thread),
                start_from_aft_mm: start_mm,
                length_mm: unit.to_mm(args.len),
                major_dia_mm: unit.to_mm(args.dia),
                // pitch is a thread-form property, always entered in mm
                pitch_mm: args.pitch,
                tpi: args.tpi,
                exclude_from_oal: args.exclude_from_oal,
                end_attachment: args.attachment.map(Into::into),
                authored_reference: reference,
                authored_start_from_fwd_mm: fwd_mm,
            }
            .normalized();
            let id = thread.id.clone();
            (doc.with_spec(doc.spec.with_thread(thread)), id, "thread")
        }
        AddCommands::Liner(args) => {
            let (reference, start_mm, fwd_mm) = args.position.authored(unit)?;
            let liner = Liner {
                id: EntityId::new(EntityPrefix::Liner),
                start_from_aft_mm: start_mm,
                length_mm: unit.to_mm(args.len),
                od_mm: unit.to_mm(args.od),
                label: args.label,
                authored_reference: reference,
                authored_start_from_fwd_mm: fwd_mm,
                end_mm_physical: 0.0,
            }
            .normalized();
            let id = liner.id.clone();
            (doc.with_spec(doc.spec.with_liner(liner)), id, "liner")
        }
    };

    save_and_report(&next, file, kind_name, &id)
}

fn save_and_report(doc: &ShaftDocument, file: &Path, kind: &str, id: &EntityId) -> Result<()> {
    doc.save(file).into_diagnostic()?;
    println!(
        "{} {} {}",
        style("Created").green().bold(),
        kind,
        format_short_id(id),
    );
    println!("  {}", style(id).dim());
    Ok(())
}
