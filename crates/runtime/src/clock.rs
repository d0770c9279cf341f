//! Per-frame elapsed time.

use std::time::Instant;

/// Timing of a single frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Zero-based frame number.
    pub index: u64,
    /// Seconds since the previous frame.
    pub elapsed_seconds: f32,
    /// Seconds since the first frame, including this one.
    pub total_seconds: f64,
}

#[derive(Clone, Debug)]
enum ClockMode {
    Fixed(f32),
    Realtime { last: Option<Instant> },
}

/// Supplies elapsed time to the frame loop.
///
/// A fixed clock reports the same step every frame (deterministic, used for
/// scripted runs and tests); a realtime clock measures wall time between
/// ticks and reports zero on the first one.
#[derive(Clone, Debug)]
pub struct FrameClock {
    mode: ClockMode,
    frame: u64,
    total: f64,
}

impl FrameClock {
    pub fn fixed(frame_seconds: f32) -> Self {
        Self::with_mode(ClockMode::Fixed(frame_seconds.max(0.0)))
    }

    pub fn realtime() -> Self {
        Self::with_mode(ClockMode::Realtime { last: None })
    }

    fn with_mode(mode: ClockMode) -> Self {
        Self {
            mode,
            frame: 0,
            total: 0.0,
        }
    }

    /// Advances to the next frame.
    pub fn tick(&mut self) -> FrameTime {
        let elapsed_seconds = match &mut self.mode {
            ClockMode::Fixed(step) => *step,
            ClockMode::Realtime { last } => {
                let now = Instant::now();
                let elapsed = last.map_or(0.0, |previous| (now - previous).as_secs_f32());
                *last = Some(now);
                elapsed
            }
        };

        self.total += f64::from(elapsed_seconds);
        let time = FrameTime {
            index: self.frame,
            elapsed_seconds,
            total_seconds: self.total,
        };
        self.frame += 1;
        time
    }

    /// Number of frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }
}
