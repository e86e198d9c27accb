use serde::{Deserialize, Serialize};

/// A closed 1-D interval `[start, end]` on a projection axis.
///
/// Always satisfies `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    /// Creates a span covering both values, in whichever order they come.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if the spans overlap or lie within `eps` of touching.
    #[must_use]
    pub fn overlaps(&self, other: &Span, eps: f64) -> bool {
        self.start <= other.end + eps && other.start <= self.end + eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_endpoints() {
        let s = Span::new(5.0, -2.0);
        assert_eq!(s, Span { start: -2.0, end: 5.0 });
        assert!((s.length() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn overlaps_with_tolerance() {
        let a = Span::new(0.0, 1.0);
        assert!(a.overlaps(&Span::new(1.0, 2.0), 0.0));
        assert!(a.overlaps(&Span::new(1.0005, 2.0), 1e-3));
        assert!(!a.overlaps(&Span::new(1.1, 2.0), 1e-3));
    }
}
