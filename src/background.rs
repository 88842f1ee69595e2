use std::time::Duration;

use thiserror::Error;

/// Below this viewport width the Detailed background is never attempted.
pub const DETAILED_MIN_WIDTH: f64 = 768.0;
/// Below this logical-core count the Detailed background is never attempted.
pub const DETAILED_MIN_CORES: u32 = 4;
/// How long a capable device gets to finish loading the page before the
/// background is downgraded anyway.
pub const LOAD_GRACE: Duration = Duration::from_secs(3);

const TRACK_SPACING: f64 = 40.0;
const MAX_TRACKS: usize = 30;

/// Particle count for the Simple mode; small fixed set, minimal paint cost.
pub const SIMPLE_PARTICLE_COUNT: usize = 8;

/// Icons cycled through the Detailed tracks. Common enough that the CDN
/// copies are effectively always cacheable.
pub const ICON_POOL: [&str; 16] = [
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/css3/css3-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/figma/figma-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/github/github-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/java/java-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vscode/vscode-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/docker/docker-original.svg",
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/bootstrap/bootstrap-original.svg",
];

/// The two visual fidelity tiers of the ambient background. Chosen once
/// per session; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundMode {
    Detailed,
    Simple,
}

/// Device signals sampled once at mount. Injected rather than read inline
/// so tests can simulate constrained devices.
#[derive(Debug, Clone, Copy)]
pub struct DeviceProfile {
    pub viewport_width: f64,
    pub logical_cores: u32,
}

impl DeviceProfile {
    pub fn is_constrained(&self) -> bool {
        self.viewport_width < DETAILED_MIN_WIDTH || self.logical_cores < DETAILED_MIN_CORES
    }
}

/// Settles the Detailed-vs-Simple decision for one session.
///
/// Constrained devices settle on Simple immediately. Capable devices start
/// on Detailed provisionally: whichever of `on_load` (page load event) or
/// `on_deadline` (the [`LOAD_GRACE`] timer) arrives first settles the
/// mode, and the later event is a no-op.
#[derive(Debug)]
pub struct ModeController {
    mode: BackgroundMode,
    settled: bool,
}

impl ModeController {
    pub fn new(profile: DeviceProfile) -> Self {
        if profile.is_constrained() {
            Self {
                mode: BackgroundMode::Simple,
                settled: true,
            }
        } else {
            Self {
                mode: BackgroundMode::Detailed,
                settled: false,
            }
        }
    }

    pub fn mode(&self) -> BackgroundMode {
        self.mode
    }

    /// True once no further event can change the mode, meaning the grace
    /// timer no longer needs to run.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// The page's load event fired (or the document was already complete
    /// at mount).
    pub fn on_load(&mut self) -> BackgroundMode {
        self.settled = true;
        self.mode
    }

    /// The grace timer elapsed without a load event.
    pub fn on_deadline(&mut self) -> BackgroundMode {
        if !self.settled {
            self.mode = BackgroundMode::Simple;
            self.settled = true;
        }
        self.mode
    }
}

/// Number of vertical tracks the Detailed mode renders: one per 40px of
/// viewport, capped at 30.
pub fn track_count(viewport_width: f64) -> usize {
    ((viewport_width / TRACK_SPACING).floor().max(0.0) as usize).min(MAX_TRACKS)
}

/// One independently animated vertical lane in the Detailed background.
/// Purely presentational; no identity beyond its render key.
#[derive(Debug, Clone, PartialEq)]
pub struct IconColumn {
    pub x: f64,
    pub start_y: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub icon_index: usize,
}

/// Generates the Detailed track layout once at mount. Duration and delay
/// are staggered in four phases so neighbouring tracks never fall in
/// lockstep.
pub fn icon_columns(viewport_width: f64) -> Vec<IconColumn> {
    (0..track_count(viewport_width))
        .map(|i| {
            let phase = (i % 4) as f64;
            IconColumn {
                x: i as f64 * TRACK_SPACING + TRACK_SPACING / 2.0,
                start_y: -50.0 + phase * 25.0,
                duration_secs: 12.0 + phase * 2.0,
                delay_secs: phase * 2.0,
                icon_index: i % ICON_POOL.len(),
            }
        })
        .collect()
}

/// One low-cost floating particle in the Simple background.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

pub fn simple_particles() -> Vec<Particle> {
    (0..SIMPLE_PARTICLE_COUNT)
        .map(|i| Particle {
            left_pct: 10.0 + i as f64 * 12.0,
            top_pct: 20.0 + (i % 3) as f64 * 20.0,
            duration_secs: 4.0 + i as f64,
            delay_secs: i as f64 * 0.5,
        })
        .collect()
}

#[derive(Error, Debug, Clone)]
pub enum BackgroundError {
    #[error("no animation tracks fit the viewport")]
    NoTracks,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capable() -> DeviceProfile {
        DeviceProfile {
            viewport_width: 1440.0,
            logical_cores: 8,
        }
    }

    #[test]
    fn narrow_viewport_forces_simple_regardless_of_cores() {
        let controller = ModeController::new(DeviceProfile {
            viewport_width: 400.0,
            logical_cores: 8,
        });
        assert_eq!(controller.mode(), BackgroundMode::Simple);
        assert!(controller.is_settled());
    }

    #[test]
    fn few_cores_force_simple_regardless_of_width() {
        let controller = ModeController::new(DeviceProfile {
            viewport_width: 1440.0,
            logical_cores: 2,
        });
        assert_eq!(controller.mode(), BackgroundMode::Simple);
        assert!(controller.is_settled());
    }

    #[test]
    fn capable_device_starts_detailed_but_unsettled() {
        let controller = ModeController::new(capable());
        assert_eq!(controller.mode(), BackgroundMode::Detailed);
        assert!(!controller.is_settled());
    }

    #[test]
    fn load_before_deadline_keeps_detailed() {
        let mut controller = ModeController::new(capable());

        // Load fires at 1s; the 3s deadline later is a no-op.
        assert_eq!(controller.on_load(), BackgroundMode::Detailed);
        assert!(controller.is_settled());
        assert_eq!(controller.on_deadline(), BackgroundMode::Detailed);
    }

    #[test]
    fn deadline_before_load_downgrades_to_simple() {
        let mut controller = ModeController::new(capable());

        // Load never arrives (or arrives at 4s): downgrade at the 3s mark.
        assert_eq!(controller.on_deadline(), BackgroundMode::Simple);
        assert_eq!(controller.on_load(), BackgroundMode::Simple);
    }

    #[test]
    fn deadline_on_constrained_device_is_a_no_op() {
        let mut controller = ModeController::new(DeviceProfile {
            viewport_width: 400.0,
            logical_cores: 8,
        });
        assert_eq!(controller.on_deadline(), BackgroundMode::Simple);
    }

    #[test]
    fn track_count_is_width_over_spacing_capped_at_thirty() {
        assert_eq!(track_count(1200.0), 30);
        assert_eq!(track_count(400.0), 10);
        assert_eq!(track_count(3840.0), 30);
        assert_eq!(track_count(39.0), 0);
        assert_eq!(track_count(-100.0), 0);
    }

    #[test]
    fn columns_stagger_in_four_phases() {
        let columns = icon_columns(1200.0);
        assert_eq!(columns.len(), 30);

        assert_eq!(columns[0].delay_secs, 0.0);
        assert_eq!(columns[0].duration_secs, 12.0);
        assert_eq!(columns[3].delay_secs, 6.0);
        assert_eq!(columns[3].duration_secs, 18.0);
        // Phase repeats every four tracks.
        assert_eq!(columns[4].delay_secs, columns[0].delay_secs);

        assert_eq!(columns[1].x - columns[0].x, 40.0);
    }

    #[test]
    fn icon_indices_wrap_around_the_pool() {
        let columns = icon_columns(1200.0);
        assert_eq!(columns[0].icon_index, 0);
        assert_eq!(columns[15].icon_index, 15);
        assert_eq!(columns[16].icon_index, 0);
        assert!(columns.iter().all(|c| c.icon_index < ICON_POOL.len()));
    }

    #[test]
    fn simple_mode_uses_a_small_fixed_particle_set() {
        let particles = simple_particles();
        assert_eq!(particles.len(), SIMPLE_PARTICLE_COUNT);
        assert_eq!(particles[0].left_pct, 10.0);
        assert_eq!(particles[7].duration_secs, 11.0);
    }
}
