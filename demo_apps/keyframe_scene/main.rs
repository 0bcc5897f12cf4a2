//! Keyframe scene replay.
//!
//! A crate bobbing on animated water under a light that fades through the
//! day. Four animators are built from a JSON scene description and driven by
//! a fixed-step clock; a short script flips the same switches a user would
//! (loop on/off, duration, per-animator toggles), each of which resets the
//! targets and rebuilds every animator.
//!
//! Run with `cargo run -p keyframe_scene [--realtime] [scene.json]`. The
//! replay steps a simulated 16 ms clock unless `--realtime` is given, in which
//! case it samples the wall clock every frame. Set `RUST_LOG=debug` to see
//! animator lifecycle events.

use std::collections::BTreeMap;
use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use kinema::glam::{Vec2, Vec3};
use kinema::prelude::*;
use parking_lot::Mutex;

const SCENE_JSON: &str = include_str!("scene.json");
const FRAME: Duration = Duration::from_millis(16);
const RUN_SECONDS: f64 = 24.0;

#[derive(Debug, Clone, Copy)]
enum Control {
    ToggleLoop,
    SetDuration(f64),
    Toggle(&'static str),
}

/// (seconds, control) pairs applied in order as the clock passes them.
const SCRIPT: &[(f64, Control)] = &[
    (4.0, Control::ToggleLoop),
    (10.0, Control::SetDuration(4.0)),
    (15.0, Control::Toggle("waves")),
    (19.0, Control::ToggleLoop),
];

struct SceneTargets {
    group_position: Arc<Mutex<Vec3>>,
    group_rotation: Arc<Mutex<Vec3>>,
    waves_rotation: Arc<Mutex<Vec3>>,
    light_color: Arc<Mutex<Color>>,
    map_offset: Arc<Mutex<Vec2>>,
}

impl SceneTargets {
    fn new() -> Self {
        Self {
            group_position: shared(Vec3::ZERO),
            group_rotation: shared(Vec3::ZERO),
            waves_rotation: shared(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
            light_color: shared(Color::WHITE),
            map_offset: shared(Vec2::ZERO),
        }
    }

    fn table(&self) -> TargetTable {
        let mut table = TargetTable::default();
        table.insert("group.position".into(), self.group_position.clone() as TargetHandle);
        table.insert("group.rotation".into(), self.group_rotation.clone() as TargetHandle);
        table.insert("waves.rotation".into(), self.waves_rotation.clone() as TargetHandle);
        table.insert("light.color".into(), self.light_color.clone() as TargetHandle);
        table.insert("waves.map_offset".into(), self.map_offset.clone() as TargetHandle);
        table
    }

    fn print_snapshot(&self, now: Timestamp) {
        let position = *self.group_position.lock();
        let rotation = *self.group_rotation.lock();
        let waves = *self.waves_rotation.lock();
        let light = *self.light_color.lock();
        let offset = *self.map_offset.lock();
        print!(
            "{now:>6.0} ms | crate pos ({:+.3}, {:+.3}, {:+.3})",
            position.x, position.y, position.z
        );
        print!(" rot ({:+.3}, {:+.3})", rotation.x, rotation.z);
        println!(" | waves {:+.3} | light {:.3} | water {:.3}", waves.x, light.r, offset.x);
    }
}

struct Settings {
    duration_secs: f64,
    looping: bool,
}

struct KeyframeScene {
    configs: BTreeMap<String, AnimatorConfig>,
    enabled: BTreeMap<String, bool>,
    targets: SceneTargets,
    table: TargetTable,
    registry: AnimationRegistry,
    handles: BTreeMap<String, AnimatorHandle>,
    settings: Settings,
}

impl KeyframeScene {
    fn new(configs: BTreeMap<String, AnimatorConfig>) -> Self {
        let targets = SceneTargets::new();
        let table = targets.table();
        let enabled = configs.keys().map(|name| (name.clone(), true)).collect();
        Self {
            configs,
            enabled,
            targets,
            table,
            registry: AnimationRegistry::new(),
            handles: BTreeMap::new(),
            settings: Settings {
                duration_secs: 10.0,
                looping: false,
            },
        }
    }

    /// Resets every running animator's targets, then rebuilds and starts the
    /// enabled ones with the current settings.
    fn play_animations(&mut self, now: Timestamp) -> anyhow::Result<()> {
        for handle in std::mem::take(&mut self.handles).into_values() {
            self.registry.reset(handle);
            self.registry.remove(handle);
        }

        let loop_mode = LoopMode::from_flag(self.settings.looping);
        for (name, config) in &self.configs {
            if !self.enabled.get(name).copied().unwrap_or(true) {
                continue;
            }
            let mut config = config.clone();
            config.duration = self.settings.duration_secs * 1000.0;
            config.loop_mode = Some(loop_mode);

            let animator = Binder::bind(&config, &self.table)
                .with_context(|| format!("failed to bind animator `{name}`"))?;
            let handle = self.registry.insert(animator);
            self.registry.start(handle, now);
            self.handles.insert(name.clone(), handle);
        }

        log::info!(
            "Playing {} animator(s): {:.1} s, {:?}",
            self.handles.len(),
            self.settings.duration_secs,
            loop_mode
        );
        Ok(())
    }

    fn apply(&mut self, control: Control, now: Timestamp) -> anyhow::Result<()> {
        match control {
            Control::ToggleLoop => self.settings.looping = !self.settings.looping,
            Control::SetDuration(secs) => self.settings.duration_secs = secs,
            Control::Toggle(name) => {
                let Some(flag) = self.enabled.get_mut(name) else {
                    log::warn!("No animator named `{name}` in this scene");
                    return Ok(());
                };
                *flag = !*flag;
            }
        }
        println!("-- {control:?}");
        self.play_animations(now)
    }

    fn name_of(&self, handle: AnimatorHandle) -> &str {
        self.handles
            .iter()
            .find_map(|(name, &h)| (h == handle).then_some(name.as_str()))
            .unwrap_or("<unknown>")
    }
}

struct Options {
    realtime: bool,
    scene_path: Option<String>,
}

impl Options {
    fn from_args() -> Self {
        let mut options = Self {
            realtime: false,
            scene_path: None,
        };
        for arg in std::env::args().skip(1) {
            if arg == "--realtime" {
                options.realtime = true;
            } else {
                options.scene_path = Some(arg);
            }
        }
        options
    }
}

fn load_configs(scene_path: Option<&str>) -> anyhow::Result<BTreeMap<String, AnimatorConfig>> {
    let configs = match scene_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read scene file {path}"))?;
            serde_json::from_str(&json).with_context(|| format!("invalid scene file {path}"))?
        }
        None => serde_json::from_str(SCENE_JSON).context("invalid embedded scene")?,
    };
    Ok(configs)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = Options::from_args();
    let mut scene = KeyframeScene::new(load_configs(options.scene_path.as_deref())?);
    let mut clock = FrameClock::new();
    let mut script = SCRIPT.iter().peekable();
    let mut next_snapshot = 0.0;

    scene.play_animations(clock.now_ms())?;

    while clock.elapsed.as_secs_f64() < RUN_SECONDS {
        if options.realtime {
            std::thread::sleep(FRAME);
            clock.tick();
        } else {
            clock.step(FRAME);
        }
        let now = clock.now_ms();
        log::trace!("frame {} ({:.4} s)", clock.frame_count, clock.dt_seconds());

        while let Some(&(_, control)) = script.next_if(|entry| now >= entry.0 * 1000.0) {
            scene.apply(control, now)?;
        }

        let report = scene.registry.tick(now);
        for &handle in &report.completed {
            println!("-- {} finished", scene.name_of(handle));
        }

        if now >= next_snapshot {
            scene.targets.print_snapshot(now);
            next_snapshot += 1000.0;
        }
    }

    log::info!(
        "Replay done after {} frames, {} animator(s) still playing",
        clock.frame_count,
        scene.registry.active_count()
    );
    Ok(())
}
