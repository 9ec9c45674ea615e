//! Console-theme boot intro.
//!
//! The intro is purely time-gated: it never looks at the sheet, and the
//! loader runs alongside it. A [`BootSchedule`] is computed once up front so
//! the UI only has to ask what is on screen at a given elapsed time.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const BOOT_LINES: [&str; 5] = [
    "INITIALIZING BIOS...",
    "CHECKING VRAM... 4096KB OK",
    "LOADING VISON_OS KERNEL...",
    "MOUNTING MEMORY CARD SLOT 1...",
    "ACCESS GRANTED.",
];

const POWER_ON_DELAY: Duration = Duration::from_millis(1000);
const LINE_DELAY_MIN_MS: u64 = 600;
const LINE_DELAY_MAX_MS: u64 = 1000;
const LOGO_DELAY: Duration = Duration::from_millis(1500);
const LOGO_HOLD: Duration = Duration::from_millis(3500);

/// What the intro is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BootPhase {
    /// Blank screen before power-on
    Off,
    /// Boot log scrolling
    Bios,
    /// Logo card
    Logo,
    /// The gallery itself
    Os,
}

/// Offsets (from mount) at which each part of the intro appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSchedule {
    bios_at: Duration,
    line_at: Vec<Duration>,
    logo_at: Duration,
    os_at: Duration,
}

impl BootSchedule {
    /// Schedule with random per-line jitter.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Reproducible schedule for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(&mut StdRng::seed_from_u64(seed))
    }

    fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let bios_at = POWER_ON_DELAY;
        let mut at = bios_at;
        let line_at = BOOT_LINES
            .iter()
            .map(|_| {
                at += Duration::from_millis(rng.random_range(LINE_DELAY_MIN_MS..=LINE_DELAY_MAX_MS));
                at
            })
            .collect();
        let logo_at = at + LOGO_DELAY;

        Self {
            bios_at,
            line_at,
            logo_at,
            os_at: logo_at + LOGO_HOLD,
        }
    }

    pub fn phase_at(&self, elapsed: Duration) -> BootPhase {
        if elapsed < self.bios_at {
            BootPhase::Off
        } else if elapsed < self.logo_at {
            BootPhase::Bios
        } else if elapsed < self.os_at {
            BootPhase::Logo
        } else {
            BootPhase::Os
        }
    }

    /// Boot log lines visible at `elapsed`.
    pub fn lines_at(&self, elapsed: Duration) -> &'static [&'static str] {
        let shown = self.line_at.iter().filter(|t| **t <= elapsed).count();
        &BOOT_LINES[..shown]
    }

    /// Next instant after `elapsed` at which the screen changes.
    pub fn next_change(&self, elapsed: Duration) -> Option<Duration> {
        std::iter::once(self.bios_at)
            .chain(self.line_at.iter().copied())
            .chain([self.logo_at, self.os_at])
            .find(|t| *t > elapsed)
    }

    /// When the gallery appears.
    pub fn total(&self) -> Duration {
        self.os_at
    }
}

impl Default for BootSchedule {
    fn default() -> Self {
        Self::new()
    }
}
