/// Which detected surfaces a hit-test may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceAlignment {
    #[default]
    Horizontal,
    Vertical,
    Any,
}

/// Whether a hit-test may return planes the tracker only estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceTarget {
    ExistingPlane,
    #[default]
    EstimatedPlane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceFilter {
    pub alignment: SurfaceAlignment,
    pub target: SurfaceTarget,
}

impl SurfaceFilter {
    pub fn with_alignment(mut self, alignment: SurfaceAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_target(mut self, target: SurfaceTarget) -> Self {
        self.target = target;
        self
    }

    pub fn accepts_alignment(&self, alignment: SurfaceAlignment) -> bool {
        match self.alignment {
            SurfaceAlignment::Any => true,
            wanted => wanted == alignment,
        }
    }

    /// Estimated planes are only accepted when the filter allows them.
    pub fn accepts_estimated(&self, estimated: bool) -> bool {
        !estimated || self.target == SurfaceTarget::EstimatedPlane
    }
}
