//! Inbound Ports (Driving Ports)
//!
//! The API a caller uses to insert and probe elements.

/// Approximate set membership (Driving Port)
///
/// All methods take `&self`; implementations synchronize internally so a
/// single instance can be shared across threads behind an `Arc`.
pub trait MembershipFilter: Send + Sync {
    /// Insert `data`. After this returns, `test(data)` is `true` until the
    /// next `reset`.
    fn add(&self, data: &[u8]);

    /// Probe `data`
    ///
    /// Returns:
    /// - `true` if the element might be present (could be a false positive)
    /// - `false` if the element is definitely absent
    fn test(&self, data: &[u8]) -> bool;

    /// Clear every inserted element
    fn reset(&self);
}
