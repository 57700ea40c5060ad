use std::cell::RefCell;
use std::rc::Rc;

use swipedeck_core::{FrameCallbackRegistration, RuntimeHandle};
use swipedeck_ui_graphics::Point;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}

/// Easing curves applied to a tween's linear progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Material standard curve.
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Evaluate the CSS-style cubic bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`,
/// `(1,1)` at horizontal position `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |t: f32| (3.0 * ax * t + 2.0 * bx) * t + cx;

    // Newton-Raphson first, bisection if the slope flattens out.
    let mut t = fraction;
    for _ in 0..8 {
        let error = curve(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            return curve(ay, by, cy, t);
        }
        let derivative = slope(t);
        if derivative.abs() < 1e-6 {
            break;
        }
        t = (t - error / derivative).clamp(0.0, 1.0);
    }

    let (mut low, mut high) = (0.0f32, 1.0f32);
    t = fraction;
    for _ in 0..24 {
        let x = curve(ax, bx, cx, t);
        if (x - fraction).abs() < 1e-6 {
            break;
        }
        if x > fraction {
            high = t;
        } else {
            low = t;
        }
        t = 0.5 * (low + high);
    }

    curve(ay, by, cy, t)
}

/// Time-based tween: duration, easing and an optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Damped spring configuration.
///
/// Thresholds are expressed in progress units, where `0.0` is the value the
/// spring started from and `1.0` is its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 is critically damped, below bounces, above creeps.
    pub damping_ratio: f32,
    pub stiffness: f32,
    pub velocity_threshold: f32,
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Whether a spring with these parameters comes to rest at all.
    ///
    /// Stiffness, damping and both thresholds must be finite and positive.
    pub fn is_valid(&self) -> bool {
        [
            self.damping_ratio,
            self.stiffness,
            self.velocity_threshold,
            self.position_threshold,
        ]
        .iter()
        .all(|value| value.is_finite() && *value > 0.0)
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// How an animation started by [`Animatable::animate_to`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// The value reached its target.
    Finished,
    /// Another `animate_to`, a `snap_to`, `stop`, or the animatable being
    /// dropped cut the animation short.
    Interrupted,
}

type EndCallback = Box<dyn FnOnce(AnimationEnd) + 'static>;

/// Integration step for spring physics, roughly one 60Hz frame.
const SPRING_TIMESTEP_SECS: f32 = 0.016;

/// A value that can be snapped or animated on the frame clock.
///
/// Clones share the same underlying value. Each `animate_to` call reports its
/// end exactly once through the supplied callback, with no internal borrow
/// held, so the callback may freely call back into the animatable.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    runtime: RuntimeHandle,
    current: T,
    start: T,
    target: T,
    /// Fraction of the way from `start` to `target`.
    progress: f32,
    /// Progress units per second, used by springs.
    velocity: f32,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_end: Option<EndCallback>,
}

impl<T: Lerp + Clone + 'static> AnimatableInner<T> {
    fn settle(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.progress = 1.0;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
    }

    /// Cancel any pending frame and hand back the callback of the animation
    /// that was running, if any.
    fn interrupt(&mut self) -> Option<EndCallback> {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.on_end.take()
    }

    fn step_tween(&mut self, spec: AnimationSpec, frame_time_nanos: u64) -> bool {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = spec.delay_millis.saturating_mul(1_000_000);
        if elapsed_nanos < delay_nanos {
            return false;
        }

        let duration_nanos = spec.duration_millis.saturating_mul(1_000_000).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        self.progress = spec.easing.transform(linear_progress);
        self.current = self.start.lerp(&self.target, self.progress);
        linear_progress >= 1.0
    }

    fn step_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) -> bool {
        if !spec.is_valid() {
            log::warn!("spring {:?} never settles, jumping to target", spec);
            return true;
        }
        let last = self.last_frame_nanos.replace(frame_time_nanos);
        let Some(last) = last else {
            return false;
        };
        let dt = frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0;

        // Semi-implicit Euler on displacement from the target at progress 1.0.
        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let mut simulated = 0.0f32;
        while simulated < dt {
            let step = SPRING_TIMESTEP_SECS.min(dt - simulated);
            let displacement = self.progress - 1.0;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.progress = (self.progress + self.velocity * step).clamp(-1.0, 2.0);
            simulated += step;
        }
        self.current = self.start.lerp(&self.target, self.progress);

        let at_rest = self.velocity.abs() < spec.velocity_threshold;
        let near_target = (1.0 - self.progress).abs() < spec.position_threshold;
        at_rest && near_target
    }
}

impl<T: Lerp + Clone + 'static> Drop for AnimatableInner<T> {
    fn drop(&mut self) {
        if let Some(on_end) = self.on_end.take() {
            on_end(AnimationEnd::Interrupted);
        }
    }
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            runtime,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            progress: 1.0,
            velocity: 0.0,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
            on_end: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().on_end.is_some()
    }

    /// Animate from the current value to `target`.
    ///
    /// A running animation is interrupted first; its callback fires with
    /// [`AnimationEnd::Interrupted`] before this call returns.
    pub fn animate_to(
        &self,
        target: T,
        animation: AnimationType,
        on_end: impl FnOnce(AnimationEnd) + 'static,
    ) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.interrupt();
            inner.start = inner.current.clone();
            inner.target = target;
            inner.progress = 0.0;
            inner.velocity = 0.0;
            inner.animation_type = animation;
            inner.on_end = Some(Box::new(on_end));
            interrupted
        };

        Self::schedule_frame(&self.inner);

        if let Some(callback) = interrupted {
            callback(AnimationEnd::Interrupted);
        }
    }

    /// Jump to `target` immediately, interrupting any running animation.
    pub fn snap_to(&self, target: T) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.interrupt();
            inner.target = target;
            inner.settle();
            interrupted
        };
        if let Some(callback) = interrupted {
            callback(AnimationEnd::Interrupted);
        }
    }

    /// Freeze at the current value, interrupting any running animation.
    pub fn stop(&self) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.interrupt();
            inner.target = inner.current.clone();
            inner.settle();
            interrupted
        };
        if let Some(callback) = interrupted {
            callback(AnimationEnd::Interrupted);
        }
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if !registration.is_active() {
            log::warn!("runtime is gone, animation cannot advance");
        }
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let finished = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if inner.on_end.is_none() {
                return;
            }

            let done = match inner.animation_type {
                AnimationType::Tween(spec) => inner.step_tween(spec, frame_time_nanos),
                AnimationType::Spring(spec) => inner.step_spring(spec, frame_time_nanos),
            };
            log::trace!(
                "animation frame at {}ns: progress {:.4}",
                frame_time_nanos,
                inner.progress
            );

            if done {
                inner.settle();
                inner.on_end.take()
            } else {
                None
            }
        };

        match finished {
            Some(callback) => callback(AnimationEnd::Finished),
            None => Self::schedule_frame(this),
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
