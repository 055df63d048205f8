use crate::model::structures::rating::Rating;

/// Aggregate view of one team, derived once per model invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamRating<'a> {
    /// Sum of the players' means
    pub mu: f64,
    /// Sum of the players' variances
    pub sigma_sq: f64,
    pub team: &'a [Rating],
    /// Rank class, see [`crate::model::util::rankings`]
    pub rank: usize
}
