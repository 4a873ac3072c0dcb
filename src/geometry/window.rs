//! OAL measurement window - the dimensioned sub-span of the physical shaft
//!
//! Shops often machine a thread past the nominal end of the part: its
//! material must render but must not count toward the dimensioned overall
//! length. Threads flagged `exclude_from_oal` that physically touch a shaft
//! end retreat the measurement window inward from that end.

use crate::entities::segment::{AxialReference, Thread};
use crate::entities::shaft::ShaftSpec;
use crate::geometry::END_EPS_MM;

/// The physical sub-span used for overall-length dimensioning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OalWindow {
    pub measure_start_mm: f64,
    pub measure_end_mm: f64,
}

impl OalWindow {
    /// Full physical window (no excluded end threads)
    pub fn full(overall_length_mm: f64) -> Self {
        OalWindow {
            measure_start_mm: 0.0,
            measure_end_mm: overall_length_mm.max(0.0),
        }
    }

    pub fn span_mm(&self) -> f64 {
        self.measure_end_mm - self.measure_start_mm
    }
}

/// Physical interval of a thread as seen by the window calculator
///
/// FWD-authored excluded threads anchor to the physical overall length here;
/// the measurement datum does not exist yet while the window is being
/// computed, and an excluded thread's own span must not feed back into the
/// datum it would be measured from.
pub(crate) fn thread_physical_interval(thread: &Thread, overall_length_mm: f64) -> (f64, f64) {
    let start = match thread.authored_reference {
        AxialReference::Aft => thread.start_from_aft_mm,
        AxialReference::Fwd => {
            let offset = thread.authored_start_from_fwd_mm.unwrap_or(0.0);
            overall_length_mm - offset - thread.length_mm
        }
    };
    (start, start + thread.length_mm)
}

/// Compute the measurement window for a spec
///
/// Excluded threads whose physical start touches the AFT end push
/// `measure_start_mm` forward via a running max of their ends; excluded
/// threads whose physical end touches the FWD end pull `measure_end_mm` back
/// via a running min of their starts. Stacked excluded threads at one end
/// compose: the farthest-reaching one wins, not the last one scanned.
/// Threads away from both ends, or not excluded, leave the window alone.
pub fn compute_oal_window(spec: &ShaftSpec) -> OalWindow {
    let overall = spec.overall_length_mm;
    let mut window = OalWindow::full(overall);

    for thread in spec.threads.iter().filter(|t| t.exclude_from_oal) {
        let (start, end) = thread_physical_interval(thread, overall);

        if start.abs() <= END_EPS_MM {
            window.measure_start_mm = window.measure_start_mm.max(end);
        }
        if (overall - end).abs() <= END_EPS_MM {
            window.measure_end_mm = window.measure_end_mm.min(start);
        }
    }

    window.measure_start_mm = window.measure_start_mm.clamp(0.0, overall.max(0.0));
    window.measure_end_mm = window.measure_end_mm.clamp(0.0, overall.max(0.0));
    window
}
