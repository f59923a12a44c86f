//! Cursor and auto-play over a step trace.
//!
//! [`Player`] owns the cursor and the playback state. While playing it holds
//! exactly one pending deadline; starting playback again replaces that
//! deadline instead of adding a second one, so a step is never advanced twice
//! for a single interval.

use std::time::{Duration, Instant};
use tracing::debug;

/// Playback speed on a 20..=980 scale; the interval is `1001 - speed` ms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u16);

impl Speed {
    pub const MIN: u16 = 20;
    pub const MAX: u16 = 980;
    pub const DEFAULT: u16 = 600;
    /// Change applied by [`Player::faster`] and [`Player::slower`]
    pub const STEP: u16 = 80;

    /// Clamps `value` into range
    pub fn new(value: u16) -> Self {
        Speed(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn interval(self) -> Duration {
        Duration::from_millis(1001 - u64::from(self.0))
    }

    /// Speed as shown to the user, relative to the maximum
    pub fn percent(self) -> u16 {
        ((u32::from(self.0) * 100 + u32::from(Self::MAX) / 2) / u32::from(Self::MAX)) as u16
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Idle,
    Playing { deadline: Instant },
}

#[derive(Debug, Clone)]
pub struct Player {
    cursor: usize,
    len: usize,
    state: PlayState,
    speed: Speed,
}

impl Player {
    /// A player over `len` steps; a zero length is treated as one step
    pub fn new(len: usize, speed: Speed) -> Self {
        Player {
            cursor: 0,
            len: len.max(1),
            state: PlayState::Idle,
            speed,
        }
    }

    /// Point at a new trace: cursor back to zero, playback stopped
    pub fn reset(&mut self, len: usize) {
        self.len = len.max(1);
        self.cursor = 0;
        self.state = PlayState::Idle;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlayState::Playing { .. })
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor + 1 >= self.len
    }

    /// Move one step forward; pauses playback. Returns whether the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        self.pause();
        self.advance()
    }

    /// Move one step back; pauses playback. Returns whether the cursor moved.
    pub fn step_backward(&mut self) -> bool {
        self.pause();
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn jump_to_start(&mut self) {
        self.pause();
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.pause();
        self.cursor = self.len - 1;
    }

    /// Start playing. Any pending deadline is replaced.
    ///
    /// Returns false, and stays idle, when the cursor is already on the last
    /// step.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.at_end() {
            self.state = PlayState::Idle;
            return false;
        }
        self.state = PlayState::Playing {
            deadline: now + self.speed.interval(),
        };
        debug!(cursor = self.cursor, interval = ?self.speed.interval(), "playback started");
        true
    }

    pub fn pause(&mut self) {
        if self.is_playing() {
            debug!(cursor = self.cursor, "playback paused");
        }
        self.state = PlayState::Idle;
    }

    /// Play if idle, pause if playing. Returns whether the player is now playing.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            self.pause();
            false
        } else {
            self.play(now)
        }
    }

    /// Advance if the pending deadline has passed. Returns whether the cursor
    /// moved. Reaching the last step ends playback.
    pub fn tick(&mut self, now: Instant) -> bool {
        let PlayState::Playing { deadline } = self.state else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let moved = self.advance();
        if self.at_end() {
            self.state = PlayState::Idle;
            debug!(cursor = self.cursor, "playback reached the last step");
        } else {
            self.state = PlayState::Playing {
                deadline: now + self.speed.interval(),
            };
        }
        moved
    }

    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        self.speed = speed;
        // The pending advance follows the new interval right away
        if self.is_playing() {
            self.state = PlayState::Playing {
                deadline: now + speed.interval(),
            };
        }
    }

    pub fn faster(&mut self, now: Instant) {
        let speed = Speed::new(self.speed.value().saturating_add(Speed::STEP));
        self.set_speed(speed, now);
    }

    pub fn slower(&mut self, now: Instant) {
        let speed = Speed::new(self.speed.value().saturating_sub(Speed::STEP));
        self.set_speed(speed, now);
    }

    fn advance(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.cursor += 1;
        true
    }
}
