//! Constrained random circle placement.
//!
//! Circles are placed by rejection sampling: candidate centers are drawn
//! uniformly from the region that keeps the required clearance to the
//! rectangle edges, and a candidate is accepted only when it keeps the same
//! clearance to every circle it must avoid. Each circle gets a fixed number of
//! draws, so a single request can never stall the caller.
//!
//! Two entry points exist:
//! - [`PlacementEngine::place_new`] appends a batch of equal circles next to an
//!   existing collection and stops at the first circle that cannot be placed.
//! - [`PlacementEngine::repack`] ("mix") throws away every position and places
//!   the same diameters again, largest first, dropping only the circles that
//!   fail.
//!
//! The random source is always supplied by the caller.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use circlefill_core::constants::{
    DEFAULT_CIRCLE_COUNT, DEFAULT_CIRCLE_DIAMETER_MM, DEFAULT_MIN_SPACING_MM,
    PLACE_NEW_MAX_ATTEMPTS, REPACK_MAX_ATTEMPTS,
};
use circlefill_core::{GeometryError, ParameterError, Result};

use crate::model::{Circle, Point, Rectangle};

/// A request for `count` circles of one diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleRequest {
    pub diameter: f64,
    pub count: usize,
    /// Minimum edge-to-edge spacing, applied to other circles and to the
    /// rectangle edges alike.
    pub min_spacing: f64,
}

impl CircleRequest {
    pub fn new(diameter: f64, count: usize, min_spacing: f64) -> Result<Self> {
        let diameter = ParameterError::require_positive("diameter", diameter)?;
        if count == 0 {
            return Err(ParameterError::ZeroCount {
                param: "count".to_string(),
            }
            .into());
        }
        let min_spacing = ParameterError::require_non_negative("min_spacing", min_spacing)?;
        Ok(Self {
            diameter,
            count,
            min_spacing,
        })
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

impl Default for CircleRequest {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_CIRCLE_DIAMETER_MM,
            count: DEFAULT_CIRCLE_COUNT,
            min_spacing: DEFAULT_MIN_SPACING_MM,
        }
    }
}

/// Result of a placement pass.
///
/// `placed` holds only the circles produced by this pass. Fewer circles than
/// requested is a partial placement, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlacementOutcome {
    pub placed: Vec<Circle>,
    pub requested: usize,
}

impl PlacementOutcome {
    pub fn satisfied_count(&self) -> usize {
        self.placed.len()
    }

    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.placed.len())
    }

    pub fn is_partial(&self) -> bool {
        self.shortfall() > 0
    }
}

/// Rejection-sampling placement with per-circle retry budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementEngine {
    place_attempts: usize,
    repack_attempts: usize,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self {
            place_attempts: PLACE_NEW_MAX_ATTEMPTS,
            repack_attempts: REPACK_MAX_ATTEMPTS,
        }
    }
}

impl PlacementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom retry budgets. Budgets below one are raised to one.
    pub fn with_attempts(place_attempts: usize, repack_attempts: usize) -> Self {
        Self {
            place_attempts: place_attempts.max(1),
            repack_attempts: repack_attempts.max(1),
        }
    }

    pub fn place_attempts(&self) -> usize {
        self.place_attempts
    }

    pub fn repack_attempts(&self) -> usize {
        self.repack_attempts
    }

    /// Places up to `request.count` new circles that avoid `existing` and each
    /// other.
    ///
    /// Fails with [`GeometryError::Infeasible`] before drawing any random
    /// number when a circle of the requested size can never respect the edge
    /// clearance. When one circle exhausts its retry budget no further
    /// circles are attempted and the circles placed so far are returned.
    pub fn place_new<R: Rng + ?Sized>(
        &self,
        rect: &Rectangle,
        existing: &[Circle],
        request: &CircleRequest,
        rng: &mut R,
    ) -> Result<PlacementOutcome> {
        let request = CircleRequest::new(request.diameter, request.count, request.min_spacing)?;
        ensure_feasible(rect, request.diameter, request.min_spacing)?;

        let mut placed: Vec<Circle> = Vec::with_capacity(request.count);
        for slot in 0..request.count {
            let candidate = sample_circle(
                rect,
                request.diameter,
                request.min_spacing,
                self.place_attempts,
                &[existing, placed.as_slice()],
                rng,
            );
            match candidate {
                Some(circle) => placed.push(circle),
                None => {
                    debug!(
                        "Slot {} of {} exhausted {} attempts, stopping",
                        slot + 1,
                        request.count,
                        self.place_attempts
                    );
                    break;
                }
            }
        }

        let outcome = PlacementOutcome {
            placed,
            requested: request.count,
        };
        if outcome.is_partial() {
            warn!(
                requested = request.count,
                placed = outcome.satisfied_count(),
                diameter = request.diameter,
                spacing = request.min_spacing,
                "Placement limited"
            );
        } else {
            debug!("Placed {} circles of Ø{} mm", request.count, request.diameter);
        }
        Ok(outcome)
    }

    /// Places every diameter of `circles` again from scratch, largest first.
    ///
    /// Old positions are ignored entirely. A diameter that cannot fit at all
    /// or exhausts its retry budget is dropped and the pass moves on to the
    /// next one. The returned circles replace the collection.
    pub fn repack<R: Rng + ?Sized>(
        &self,
        rect: &Rectangle,
        circles: &[Circle],
        min_spacing: f64,
        rng: &mut R,
    ) -> Result<PlacementOutcome> {
        let min_spacing = ParameterError::require_non_negative("min_spacing", min_spacing)?;

        let mut diameters: Vec<f64> = circles.iter().map(|c| c.diameter).collect();
        diameters.sort_by(|a, b| b.total_cmp(a));

        let mut placed: Vec<Circle> = Vec::with_capacity(diameters.len());
        for diameter in diameters {
            if !rect.can_fit(diameter / 2.0, min_spacing) {
                debug!("Skipping Ø{} mm: cannot fit with {} mm spacing", diameter, min_spacing);
                continue;
            }
            if let Some(circle) = sample_circle(
                rect,
                diameter,
                min_spacing,
                self.repack_attempts,
                &[placed.as_slice()],
                rng,
            ) {
                placed.push(circle);
            } else {
                debug!("Skipping Ø{} mm: no free position found", diameter);
            }
        }

        let outcome = PlacementOutcome {
            placed,
            requested: circles.len(),
        };
        if outcome.is_partial() {
            warn!(
                requested = outcome.requested,
                placed = outcome.satisfied_count(),
                "Mix limited"
            );
        }
        Ok(outcome)
    }
}

/// Places new circles with the default retry budget.
pub fn place_new<R: Rng + ?Sized>(
    rect: &Rectangle,
    existing: &[Circle],
    diameter: f64,
    count: usize,
    min_spacing: f64,
    rng: &mut R,
) -> Result<PlacementOutcome> {
    let request = CircleRequest::new(diameter, count, min_spacing)?;
    PlacementEngine::default().place_new(rect, existing, &request, rng)
}

/// Repacks circles with the default retry budget.
pub fn repack<R: Rng + ?Sized>(
    rect: &Rectangle,
    circles: &[Circle],
    min_spacing: f64,
    rng: &mut R,
) -> Result<PlacementOutcome> {
    PlacementEngine::default().repack(rect, circles, min_spacing, rng)
}

fn ensure_feasible(rect: &Rectangle, diameter: f64, min_spacing: f64) -> Result<()> {
    if rect.can_fit(diameter / 2.0, min_spacing) {
        Ok(())
    } else {
        Err(GeometryError::Infeasible {
            diameter,
            min_spacing,
            width: rect.width,
            height: rect.height,
        }
        .into())
    }
}

/// Draws up to `max_attempts` candidates and returns the first one that keeps
/// `spacing` to every circle in `avoid`. Requires `rect.can_fit`.
fn sample_circle<R: Rng + ?Sized>(
    rect: &Rectangle,
    diameter: f64,
    spacing: f64,
    max_attempts: usize,
    avoid: &[&[Circle]],
    rng: &mut R,
) -> Option<Circle> {
    let radius = diameter / 2.0;
    let ((min_x, max_x), (min_y, max_y)) = rect.center_range(radius, spacing);

    for _ in 0..max_attempts {
        let candidate = Point::new(rng.gen_range(min_x..=max_x), rng.gen_range(min_y..=max_y));
        let clear = avoid
            .iter()
            .flat_map(|group| group.iter())
            .all(|other| other.clears(&candidate, radius, spacing));
        if clear {
            return Some(Circle::at(candidate, diameter));
        }
    }
    None
}
