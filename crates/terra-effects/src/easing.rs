/// Easing curves for shaping motion over a transition's timeline.
///
/// Both operations map elapsed time `t` over `duration` to an interpolated
/// value for a change of `delta` from `begin`: the value is `begin` at
/// `t = 0` and `begin + delta` at `t = duration`, continuous and monotonic in
/// between. Pure math; the caller guarantees `0 <= t <= duration` and
/// `duration > 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic curve: `ease_in` accelerates from rest, `ease_out`
    /// decelerates to rest.
    #[default]
    Quadratic,
}

impl Easing {
    pub fn ease_in(&self, t: f32, begin: f32, delta: f32, duration: f32) -> f32 {
        let t = t / duration;
        match self {
            Easing::Linear => begin + delta * t,
            Easing::Quadratic => delta * t * t + begin,
        }
    }

    pub fn ease_out(&self, t: f32, begin: f32, delta: f32, duration: f32) -> f32 {
        let t = t / duration;
        match self {
            Easing::Linear => begin + delta * t,
            Easing::Quadratic => -delta * t * (t - 2.0) + begin,
        }
    }
}
