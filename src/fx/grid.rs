// Dot grid field: a responsive lattice that recolors by pointer proximity
// and gets knocked around by fast pointer motion and clicks.

use super::color::Rgb;
use super::config::GridConfig;
use super::constants::{
    ELASTIC_AMPLITUDE, ELASTIC_PERIOD, GRID_POINTER_THROTTLE_MS, INERTIA_MAX_SECS,
    POINTER_VELOCITY_PUSH, RESIZE_DEBOUNCE_MS,
};
use super::easing::{elastic_out, Inertia};
use super::pointer::PointerState;
use super::surface::{has_area, DrawSurface};
use super::throttle::{Debounce, Throttle};
use glam::Vec2;

/// Displacement state machine: `AtRest -> Inertia -> Returning -> AtRest`.
/// Only `AtRest` dots accept a new push.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DotState {
    AtRest,
    Inertia {
        from: Vec2,
        motion: Inertia,
        start_ms: f64,
    },
    Returning {
        from: Vec2,
        start_ms: f64,
    },
}

impl DotState {
    #[inline]
    pub fn is_displaced(&self) -> bool {
        !matches!(self, DotState::AtRest)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub center: Vec2,
    pub offset: Vec2,
    pub state: DotState,
}

impl Dot {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            offset: Vec2::ZERO,
            state: DotState::AtRest,
        }
    }

    /// Start a push. Refused while another displacement owns the dot.
    pub fn displace(&mut self, impulse: Vec2, now_ms: f64, resistance: f32) -> bool {
        if self.state.is_displaced() {
            return false;
        }
        // Overwriting the state drops whatever animation was attached.
        self.state = DotState::Inertia {
            from: self.offset,
            motion: Inertia::new(impulse, resistance, INERTIA_MAX_SECS),
            start_ms: now_ms,
        };
        true
    }

    /// Bring `offset` up to date for `now_ms`.
    pub fn advance(&mut self, now_ms: f64, return_secs: f32) {
        loop {
            match self.state {
                DotState::AtRest => return,
                DotState::Inertia {
                    from,
                    motion,
                    start_ms,
                } => {
                    let elapsed = ((now_ms - start_ms) / 1000.0) as f32;
                    if !motion.is_settled(elapsed) {
                        self.offset = from + motion.travel(elapsed);
                        return;
                    }
                    self.offset = from + motion.rest();
                    self.state = DotState::Returning {
                        from: self.offset,
                        start_ms: start_ms + motion.duration as f64 * 1000.0,
                    };
                }
                DotState::Returning { from, start_ms } => {
                    let span_ms = return_secs as f64 * 1000.0;
                    let p = if span_ms > 0.0 {
                        ((now_ms - start_ms) / span_ms) as f32
                    } else {
                        1.0
                    };
                    if p >= 1.0 {
                        self.offset = Vec2::ZERO;
                        self.state = DotState::AtRest;
                    } else {
                        let k = elastic_out(p, ELASTIC_AMPLITUDE, ELASTIC_PERIOD);
                        self.offset = from * (1.0 - k);
                    }
                    return;
                }
            }
        }
    }
}

/// Lattice geometry for a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
    pub pitch: f32,
    /// Center of the first dot.
    pub origin: Vec2,
}

impl GridLayout {
    pub fn compute(size: Vec2, dot_size: f32, gap: f32) -> GridLayout {
        let pitch = dot_size + gap;
        if !has_area(size) || pitch <= 0.0 {
            return GridLayout {
                cols: 0,
                rows: 0,
                pitch,
                origin: Vec2::ZERO,
            };
        }
        let cols = ((size.x + gap) / pitch).floor().max(0.0) as usize;
        let rows = ((size.y + gap) / pitch).floor().max(0.0) as usize;
        let grid_w = pitch * cols as f32 - gap;
        let grid_h = pitch * rows as f32 - gap;
        let origin = Vec2::new(
            (size.x - grid_w) / 2.0 + dot_size / 2.0,
            (size.y - grid_h) / 2.0 + dot_size / 2.0,
        );
        GridLayout {
            cols,
            rows,
            pitch,
            origin,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dots in row-major order.
    pub fn dots(&self) -> Vec<Dot> {
        let mut dots = Vec::with_capacity(self.len());
        for y in 0..self.rows {
            for x in 0..self.cols {
                let center = self.origin + Vec2::new(x as f32, y as f32) * self.pitch;
                dots.push(Dot::new(center));
            }
        }
        dots
    }
}

/// Fill color for a dot at squared distance `dist_sq` from the pointer.
#[inline]
pub fn proximity_color(base: Rgb, active: Rgb, dist_sq: f32, proximity: f32) -> Rgb {
    if proximity <= 0.0 || dist_sq > proximity * proximity {
        return base;
    }
    let t = 1.0 - dist_sq.sqrt() / proximity;
    base.lerp(active, t)
}

pub struct GridField {
    config: GridConfig,
    size: Vec2,
    layout: GridLayout,
    dots: Vec<Dot>,
    pointer: PointerState,
    pointer_throttle: Throttle,
    resize: Debounce,
    pending_size: Option<Vec2>,
}

impl GridField {
    pub fn new(config: GridConfig) -> Self {
        Self {
            layout: GridLayout::compute(Vec2::ZERO, config.dot_size, config.gap),
            config,
            size: Vec2::ZERO,
            dots: Vec::new(),
            pointer: PointerState::default(),
            pointer_throttle: Throttle::new(GRID_POINTER_THROTTLE_MS),
            resize: Debounce::new(RESIZE_DEBOUNCE_MS),
            pending_size: None,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Rebuild the lattice for `size` right away. In-flight displacements
    /// are dropped with their dots.
    pub fn rebuild(&mut self, size: Vec2) {
        self.size = size;
        self.layout = GridLayout::compute(size, self.config.dot_size, self.config.gap);
        self.dots = self.layout.dots();
        self.pending_size = None;
        log::debug!(
            "[grid] rebuilt {}x{} dots for {:.0}x{:.0}",
            self.layout.cols,
            self.layout.rows,
            size.x,
            size.y
        );
    }

    /// Note a container size change; see [`GridField::take_resize`].
    /// Reports of the size already in use are ignored.
    pub fn request_resize(&mut self, size: Vec2, now_ms: f64) {
        if size == self.size && self.pending_size.is_none() {
            return;
        }
        self.pending_size = Some(size);
        self.resize.trigger(now_ms);
    }

    /// Pointer moved to `position` (surface-local). Returns `None` when the
    /// throttle dropped the event, otherwise how many dots were pushed.
    pub fn pointer_move(&mut self, position: Vec2, now_ms: f64) -> Option<usize> {
        if !self.pointer_throttle.ready(now_ms) {
            return None;
        }
        self.pointer.sample(position, now_ms, self.config.max_speed);
        if self.pointer.speed <= self.config.speed_trigger {
            return Some(0);
        }
        let pointer = self.pointer;
        let proximity = self.config.proximity;
        let resistance = self.config.resistance;
        let mut pushed = 0;
        for dot in self.dots.iter_mut() {
            if dot.state.is_displaced() {
                continue;
            }
            let to_dot = dot.center - pointer.position;
            if to_dot.length() >= proximity {
                continue;
            }
            let impulse = to_dot + pointer.velocity * POINTER_VELOCITY_PUSH;
            if dot.displace(impulse, now_ms, resistance) {
                pushed += 1;
            }
        }
        Some(pushed)
    }

    /// Shock wave from a click at `position`. Returns how many dots were pushed.
    pub fn click(&mut self, position: Vec2, now_ms: f64) -> usize {
        let radius = self.config.shock_radius;
        if radius <= 0.0 {
            return 0;
        }
        let strength = self.config.shock_strength;
        let resistance = self.config.resistance;
        let mut pushed = 0;
        for dot in self.dots.iter_mut() {
            if dot.state.is_displaced() {
                continue;
            }
            let away = dot.center - position;
            let dist = away.length();
            if dist >= radius {
                continue;
            }
            let falloff = (1.0 - dist / radius).max(0.0);
            if dot.displace(away * strength * falloff, now_ms, resistance) {
                pushed += 1;
            }
        }
        pushed
    }

    /// Rebuild once resizing has gone quiet. Returns the new size so the
    /// host can reallocate its surface.
    pub fn take_resize(&mut self, now_ms: f64) -> Option<Vec2> {
        if !self.resize.poll(now_ms) {
            return None;
        }
        let size = self.pending_size.take()?;
        self.rebuild(size);
        Some(size)
    }

    /// Advance every displacement to `now_ms` without drawing.
    pub fn advance(&mut self, now_ms: f64) {
        let return_secs = self.config.return_secs;
        for dot in self.dots.iter_mut() {
            dot.advance(now_ms, return_secs);
        }
    }

    /// One animation frame: advance, then redraw every dot.
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl DrawSurface) {
        self.advance(now_ms);
        if !has_area(self.size) {
            return;
        }
        let pointer = self.pointer;
        let have_pointer = pointer.last_ms.is_some();
        let GridConfig {
            base_color,
            active_color,
            proximity,
            dot_size,
            ..
        } = self.config;
        let radius = dot_size / 2.0;

        surface.clear(self.size);
        for dot in &self.dots {
            let color = if have_pointer {
                let dist_sq = dot.center.distance_squared(pointer.position);
                proximity_color(base_color, active_color, dist_sq, proximity)
            } else {
                base_color
            };
            surface.fill_circle(dot.center + dot.offset, radius, color);
        }
    }

    pub fn displaced_count(&self) -> usize {
        self.dots.iter().filter(|d| d.state.is_displaced()).count()
    }
}
