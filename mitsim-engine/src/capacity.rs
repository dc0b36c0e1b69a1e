//! Capacity shaping: caps combined accepted inbound volume at the fixed
//! downstream processing capacity.

/// Split of inbound volume at the capacity boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shaped {
    /// Volume processed downstream: `min(capacity, inbound)`.
    pub processed: f64,
    /// Volume shed above capacity, never negative.
    pub capacity_dropped: f64,
}

/// Shape `inbound` volume against `capacity`.
///
/// Pure and stateless; no failure modes for non-negative inputs.
pub fn shape(inbound: f64, capacity: f64) -> Shaped {
    let processed = inbound.min(capacity);
    Shaped {
        processed,
        capacity_dropped: (inbound - processed).max(0.0),
    }
}
