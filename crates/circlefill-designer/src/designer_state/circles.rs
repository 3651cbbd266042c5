//! Circle creation, mixing and clearing.

use std::fmt;

use tracing::info;

use circlefill_core::Result;

use super::DesignerState;
use crate::placement::CircleRequest;

/// What a placement action achieved, for surfacing to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementReport {
    /// New circles were appended.
    Added { request: CircleRequest, placed: usize },
    /// Existing circles were repositioned.
    Mixed { requested: usize, placed: usize },
}

impl PlacementReport {
    pub fn requested(&self) -> usize {
        match self {
            Self::Added { request, .. } => request.count,
            Self::Mixed { requested, .. } => *requested,
        }
    }

    pub fn satisfied_count(&self) -> usize {
        match self {
            Self::Added { placed, .. } | Self::Mixed { placed, .. } => *placed,
        }
    }

    pub fn shortfall(&self) -> usize {
        self.requested().saturating_sub(self.satisfied_count())
    }

    pub fn is_partial(&self) -> bool {
        self.shortfall() > 0
    }

    /// Warning to show when fewer circles were placed than asked for.
    pub fn notice(&self) -> Option<String> {
        self.is_partial().then(|| self.to_string())
    }
}

impl fmt::Display for PlacementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { request, placed } => write!(
                f,
                "Requested {} circles of Ø{} mm with {} mm spacing.\n\
                 Could place {} circles; the rectangle or spacing prevented placing more.",
                request.count, request.diameter, request.min_spacing, placed
            ),
            Self::Mixed { requested, placed } => write!(
                f,
                "Tried to reposition {} circles.\n\
                 Successfully placed {}. Some could not be placed due to spacing/space limits.",
                requested, placed
            ),
        }
    }
}

impl DesignerState {
    /// Adds a batch of random circles using the current circle request.
    ///
    /// Infeasible requests fail without touching the collection. Otherwise
    /// the placed circles are appended, even when fewer than requested.
    pub fn add_random_circles(&mut self) -> Result<PlacementReport> {
        let request = self.circle_request;
        let outcome = self
            .engine
            .place_new(&self.rectangle, &self.circles, &request, &mut self.rng)?;

        let placed = outcome.satisfied_count();
        self.circles.extend(outcome.placed);
        info!(
            "Added {} of {} circles (total {})",
            placed,
            request.count,
            self.circles.len()
        );
        Ok(PlacementReport::Added { request, placed })
    }

    /// Sets the circle request and adds a batch with it.
    pub fn add_circles(&mut self, diameter: f64, count: usize, min_spacing: f64) -> Result<PlacementReport> {
        self.set_circle_request(diameter, count, min_spacing)?;
        self.add_random_circles()
    }

    /// Repositions every circle from scratch, keeping the diameters.
    ///
    /// Does nothing when there are no circles. Circles that cannot be placed
    /// again are dropped from the collection.
    pub fn mix_circles(&mut self) -> Result<PlacementReport> {
        let requested = self.circles.len();
        if requested == 0 {
            return Ok(PlacementReport::Mixed {
                requested: 0,
                placed: 0,
            });
        }

        let outcome = self.engine.repack(
            &self.rectangle,
            &self.circles,
            self.circle_request.min_spacing,
            &mut self.rng,
        )?;
        let placed = outcome.satisfied_count();
        self.circles = outcome.placed;
        info!("Mixed {} of {} circles", placed, requested);
        Ok(PlacementReport::Mixed { requested, placed })
    }

    /// Removes every circle.
    pub fn clear_circles(&mut self) {
        self.circles.clear();
    }
}
