use super::constants::{
    CHIME_ATTACK_SEC, CHIME_DECAY_END_SEC, CHIME_FLOOR_GAIN, CHIME_FREQUENCY_HZ, CHIME_PEAK_GAIN,
    CHIME_STOP_SEC,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ramp {
    Set,
    Linear,
    Exponential,
}

/// A single gain automation point, `at_sec` after the chime starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GainPoint {
    pub ramp: Ramp,
    pub value: f32,
    pub at_sec: f64,
}

/// Short sine "ding": fast linear attack, exponential decay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chime {
    pub frequency_hz: f32,
    pub envelope: [GainPoint; 3],
    pub stop_sec: f64,
}

impl Default for Chime {
    fn default() -> Self {
        Self {
            frequency_hz: CHIME_FREQUENCY_HZ,
            envelope: [
                GainPoint {
                    ramp: Ramp::Set,
                    value: 0.0,
                    at_sec: 0.0,
                },
                GainPoint {
                    ramp: Ramp::Linear,
                    value: CHIME_PEAK_GAIN,
                    at_sec: CHIME_ATTACK_SEC,
                },
                GainPoint {
                    ramp: Ramp::Exponential,
                    value: CHIME_FLOOR_GAIN,
                    at_sec: CHIME_DECAY_END_SEC,
                },
            ],
            stop_sec: CHIME_STOP_SEC,
        }
    }
}

impl Chime {
    /// Time of the last automation point.
    pub fn envelope_end_sec(&self) -> f64 {
        self.envelope
            .iter()
            .map(|p| p.at_sec)
            .fold(0.0_f64, f64::max)
    }
}
