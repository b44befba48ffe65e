use log::debug;
use serde::Deserialize;

/// How the iteration budget and bailout grow with zoom.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TuningPolicy {
    pub enabled: bool,
    /// Extra iterations per doubling of zoom.
    pub iterations_per_octave: u32,
    pub max_iterations_cap: u32,
    /// Past this zoom the bailout switches to `deep_bailout`.
    pub deep_zoom_threshold: f64,
    pub deep_bailout: f64,
    /// Recompute once zoom has moved this many octaves...
    pub recompute_octaves: f64,
    /// ...or this many seconds have passed with zoom moving at all.
    pub min_interval_secs: f64,
}

impl Default for TuningPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            iterations_per_octave: 24,
            max_iterations_cap: 8192,
            deep_zoom_threshold: 1e5,
            deep_bailout: 256.0,
            recompute_octaves: 0.5,
            min_interval_secs: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub max_iterations: u32,
    pub bailout: f64,
}

impl TuningPolicy {
    /// The tuning for `zoom` given the user's own budget and bailout.
    /// Never goes below the user's values.
    #[must_use]
    pub fn tuning_for(&self, zoom: f64, base: Tuning) -> Tuning {
        if !self.enabled {
            return base;
        }

        let octaves = if zoom.is_finite() && zoom > 1.0 {
            zoom.log2()
        } else {
            0.0
        };

        let extra = (octaves * f64::from(self.iterations_per_octave)).round();
        let cap = f64::from(self.max_iterations_cap.max(base.max_iterations));
        let max_iterations = (f64::from(base.max_iterations) + extra).min(cap) as u32;

        let bailout = if zoom > self.deep_zoom_threshold {
            base.bailout.max(self.deep_bailout)
        } else {
            base.bailout
        };

        Tuning {
            max_iterations,
            bailout,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TuningSample {
    zoom: f64,
    base: Tuning,
    at_secs: f64,
}

/// Caches the last tuning and only recomputes when the zoom has moved far
/// enough or long enough ago.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveTuner {
    policy: TuningPolicy,
    last: Option<TuningSample>,
    current: Option<Tuning>,
    recomputations: u64,
}

impl AdaptiveTuner {
    #[must_use]
    pub fn new(policy: TuningPolicy) -> Self {
        Self {
            policy,
            last: None,
            current: None,
            recomputations: 0,
        }
    }

    #[must_use]
    pub fn policy(&self) -> TuningPolicy {
        self.policy
    }

    #[must_use]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn tune(&mut self, zoom: f64, base: Tuning, now_secs: f64) -> Tuning {
        if let (Some(last), Some(current)) = (self.last, self.current) {
            if !self.needs_recompute(last, zoom, base, now_secs) {
                return current;
            }
        }

        let tuning = self.policy.tuning_for(zoom, base);

        debug!(
            "tuning recomputed at zoom {:e}: {} iterations, bailout {}",
            zoom, tuning.max_iterations, tuning.bailout
        );

        self.last = Some(TuningSample {
            zoom,
            base,
            at_secs: now_secs,
        });
        self.current = Some(tuning);
        self.recomputations += 1;

        tuning
    }

    fn needs_recompute(&self, last: TuningSample, zoom: f64, base: Tuning, now_secs: f64) -> bool {
        if last.base != base {
            return true;
        }

        if zoom == last.zoom {
            return false;
        }

        let octaves_moved = (zoom / last.zoom).log2().abs();
        if !octaves_moved.is_finite() || octaves_moved >= self.policy.recompute_octaves {
            return true;
        }

        now_secs - last.at_secs >= self.policy.min_interval_secs
    }
}
