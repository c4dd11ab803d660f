use core::f32::consts::TAU;

/// Damping ratio of the snap spring (lightly underdamped).
const SPRING_DAMPING: f32 = 0.825;

/// The snap animation: a scalar spring tween, advanced by the host's frame loop.
///
/// The curve is fixed: one natural period over `duration_ms`, overshooting the target by roughly
/// 1% before settling. Only the duration is configurable.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Samples the tween at `now_ms`. Returns exactly `to` once the tween is done.
    pub fn sample(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * spring(t)
    }
}

/// Normalized spring step response: `0` at `t <= 0`, exactly `1` at `t >= 1`.
pub fn spring(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let decay = SPRING_DAMPING * TAU;
    let freq = TAU * (1.0 - SPRING_DAMPING * SPRING_DAMPING).sqrt();
    let envelope = (-decay * t).exp();
    1.0 - envelope * ((freq * t).cos() + (decay / freq) * (freq * t).sin())
}
