use std::sync::Arc;

use crate::model::structures::{
    options::{Options, ScoreToPerformance},
    score_transform::ScoreTransform
};

/// Resolves the score-to-performance mapping for a rating call.
///
/// An explicit callback wins. Otherwise a built-in transform is used as soon
/// as any of `score_transform`, `score_scale` or `score_saturation` is set,
/// defaulting to `tanh` when a positive saturation was given and `linear`
/// otherwise. Returns `None` when scores should only decide the ordering.
pub fn score_to_performance(options: &Options) -> Option<ScoreToPerformance> {
    if let Some(transform) = &options.score_to_performance {
        return Some(Arc::clone(transform));
    }

    if options.score_transform.is_none() && options.score_scale.is_none() && options.score_saturation.is_none() {
        return None;
    }

    let scale = options.score_scale.unwrap_or(1.0);
    let saturation = options.score_saturation.unwrap_or(0.0);
    let kind = options.score_transform.unwrap_or(if saturation > 0.0 {
        ScoreTransform::Tanh
    } else {
        ScoreTransform::Linear
    });

    let transform: ScoreToPerformance = match kind {
        ScoreTransform::Linear => Arc::new(move |gap: f64| scale * gap),
        ScoreTransform::Log => Arc::new(move |gap: f64| scale * gap.ln_1p()),
        ScoreTransform::Sqrt => Arc::new(move |gap: f64| scale * gap.sqrt()),
        ScoreTransform::Tanh => {
            let g0 = if saturation > 0.0 { saturation } else { 1.0 };
            Arc::new(move |gap: f64| scale * (gap / g0).tanh())
        }
    };

    Some(transform)
}

/// Signed performance gap of team `i` over team `q`.
///
/// The transform only ever sees the absolute score gap, the sign of
/// `score_i - score_q` is applied afterwards. Equal scores map to zero.
pub fn performance_gap(transform: &ScoreToPerformance, score_i: f64, score_q: f64) -> f64 {
    let gap = score_i - score_q;
    if gap == 0.0 {
        return 0.0;
    }

    transform(gap.abs()).copysign(gap)
}
