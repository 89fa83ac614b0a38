//! The measurement capability every slot content provides.

use trirow_core::{BoxConstraints, Measured};

/// Something that can report its size under a set of constraints.
///
/// Implementations must be pure with respect to `constraints` and must
/// never return a size outside them. Layout passes trust both properties
/// and do not re-clip.
pub trait Measure {
    fn measure(&self, constraints: BoxConstraints) -> Measured;
}

impl<F> Measure for F
where
    F: Fn(BoxConstraints) -> Measured,
{
    fn measure(&self, constraints: BoxConstraints) -> Measured {
        self(constraints)
    }
}

/// A fixed intrinsic size, clamped into whatever constraints it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize(pub Measured);

impl Measure for FixedSize {
    fn measure(&self, constraints: BoxConstraints) -> Measured {
        constraints.constrain(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_measure() {
        let m = |c: BoxConstraints| Measured::new(c.max_width / 2, 10);
        assert_eq!(m.measure(BoxConstraints::loose(100, 50)), Measured::new(50, 10));
    }

    #[test]
    fn test_fixed_size_clamps() {
        let m = FixedSize(Measured::new(40, 40));
        assert_eq!(m.measure(BoxConstraints::loose(30, 100)), Measured::new(30, 40));
        assert_eq!(m.measure(BoxConstraints::new(50, 60, 0, 100)), Measured::new(50, 40));
    }
}
