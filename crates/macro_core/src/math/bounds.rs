//! Bounds applied to every realised annual return.
//!
//! No asset can lose more than 90% or gain more than 300% in one period.
//! Downstream accounting relies on these bounds, so clamping is part of the
//! pricing contract rather than an error path.

/// Lowest admissible annual return.
pub const RETURN_FLOOR: f64 = -0.90;

/// Highest admissible annual return.
pub const RETURN_CAP: f64 = 3.00;

/// Closed interval `[floor, cap]` for realised returns.
///
/// # Examples
///
/// ```
/// use macro_core::math::ReturnBounds;
///
/// let bounds = ReturnBounds::default();
/// assert_eq!(bounds.clamp(-1.7), -0.90);
/// assert_eq!(bounds.clamp(0.05), 0.05);
/// assert_eq!(bounds.clamp(12.0), 3.00);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReturnBounds {
    floor: f64,
    cap: f64,
}

impl Default for ReturnBounds {
    fn default() -> Self {
        Self {
            floor: RETURN_FLOOR,
            cap: RETURN_CAP,
        }
    }
}

impl ReturnBounds {
    /// Create custom bounds. Returns `None` unless `floor < cap` and both are finite.
    pub fn new(floor: f64, cap: f64) -> Option<Self> {
        if floor.is_finite() && cap.is_finite() && floor < cap {
            Some(Self { floor, cap })
        } else {
            None
        }
    }

    /// Lower bound.
    #[inline]
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Upper bound.
    #[inline]
    pub fn cap(&self) -> f64 {
        self.cap
    }

    /// Clamp a raw return into `[floor, cap]`.
    ///
    /// Values inside the interval pass through unchanged.
    #[inline]
    pub fn clamp(&self, raw: f64) -> f64 {
        raw.clamp(self.floor, self.cap)
    }

    /// Whether a raw return would be altered by [`ReturnBounds::clamp`].
    #[inline]
    pub fn is_binding(&self, raw: f64) -> bool {
        raw < self.floor || raw > self.cap
    }
}

/// Clamp a raw return to `[RETURN_FLOOR, RETURN_CAP]`.
#[inline]
pub fn clamp_return(raw: f64) -> f64 {
    raw.clamp(RETURN_FLOOR, RETURN_CAP)
}
