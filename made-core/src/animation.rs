//! Animated values.
//!
//! Every cosmetic animation on the page is one of four small state machines,
//! each advanced one step per timer tick:
//!
//! - [`Ramp`] - counter from `start` to `target` (settle, loop or wrap)
//! - [`Cycle`] - index rotating over `len` sub-items
//! - [`Typewriter`] - string revealed one character at a time
//! - [`Script`] - reveal / pause / type sequence (conversation demo)
//!
//! They never look at a clock themselves. A host either calls
//! [`Animation::tick`] from an interval callback, or feeds wall time through
//! [`Animation::advance`], which converts it to whole ticks.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Converts elapsed time into whole ticks of a fixed interval.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pacer {
    interval: Duration,
    carry: Duration,
}

impl Pacer {
    /// Pacer for the given tick interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            carry: Duration::ZERO,
        }
    }

    /// Tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add elapsed time and return how many ticks became due. The partial
    /// tick left over is carried into the next call.
    pub fn due(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        let carry = self.carry.saturating_add(elapsed);
        let ticks = carry.as_nanos() / self.interval.as_nanos();
        self.carry = remainder(carry, self.interval);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    /// Time left until the next tick becomes due.
    pub fn until_next(&self) -> Duration {
        if self.interval.is_zero() {
            return Duration::MAX;
        }
        self.interval.saturating_sub(self.carry)
    }

    /// Drop any partial tick.
    pub fn reset(&mut self) {
        self.carry = Duration::ZERO;
    }
}

/// `elapsed` modulo `interval`; zero for a zero interval.
pub fn remainder(elapsed: Duration, interval: Duration) -> Duration {
    let interval = interval.as_nanos();
    if interval == 0 {
        return Duration::ZERO;
    }
    let rest = elapsed.as_nanos() % interval;
    // rest < interval, whose whole seconds already fit a u64
    let secs = u64::try_from(rest / 1_000_000_000).unwrap_or(u64::MAX);
    Duration::new(secs, (rest % 1_000_000_000) as u32)
}

/// Whole ticks needed to cover `pause`, at least one.
pub fn ticks_for(pause: Duration, interval: Duration) -> u32 {
    if interval.is_zero() {
        return 1;
    }
    let ticks = pause.as_nanos().div_ceil(interval.as_nanos());
    u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
}

/// Common surface of the animated values.
pub trait Animation {
    /// Apply one step. Returns true when the visible value changed.
    fn tick(&mut self) -> bool;

    /// Back to the initial, stopped state.
    fn reset(&mut self);

    /// True while further ticks can still change something.
    fn is_running(&self) -> bool;

    /// Pacer used by [`Animation::advance`].
    fn pacer(&mut self) -> &mut Pacer;

    /// Tick interval.
    fn interval(&self) -> Duration;

    /// Apply `ticks` steps at once. Returns true when the visible value
    /// changed. Periodic animations override this with a closed form so a
    /// long gap costs no more than a short one.
    fn skip(&mut self, ticks: u32) -> bool {
        let mut changed = false;
        for _ in 0..ticks {
            if !self.is_running() {
                break;
            }
            changed |= self.tick();
        }
        changed
    }

    /// Feed elapsed wall time; applies every tick that became due.
    fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.is_running() {
            return false;
        }
        let due = self.pacer().due(elapsed);
        self.skip(due)
    }
}

/// What a ramp does once it reaches its target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Completion {
    /// Stop at the target.
    #[default]
    Settle,
    /// Hold at the target for `pause_ms`, then restart from `start`.
    Loop {
        /// Hold time at the target
        pause_ms: u64,
    },
    /// Keep going modulo the target (angles).
    Wrap,
}

/// Parameters of a [`Ramp`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampSpec {
    /// Value at activation
    #[serde(default)]
    pub start: u32,
    /// Final value (exclusive upper bound for [`Completion::Wrap`])
    pub target: u32,
    /// Increment per tick
    pub step: u32,
    /// Tick interval in milliseconds
    pub interval_ms: u64,
    /// Behavior at the target
    #[serde(default)]
    pub completion: Completion,
}

impl RampSpec {
    /// Tick interval.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Lifecycle of a [`Ramp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampPhase {
    /// Not started
    Idle,
    /// Moving toward the target
    Ramping,
    /// Parked at the target, waiting to loop
    Holding,
    /// Parked at the target for good
    Settled,
}

/// Monotonic counter: idle -> ramping -> settled, or holding -> ramping for
/// looping progress bars.
#[derive(Clone, Debug)]
pub struct Ramp {
    spec: RampSpec,
    value: u32,
    phase: RampPhase,
    hold_left: u32,
    pacer: Pacer,
}

impl Ramp {
    /// Idle ramp parked at `start`.
    pub fn new(spec: RampSpec) -> Self {
        let pacer = Pacer::new(spec.interval());
        Self {
            value: spec.start,
            spec,
            phase: RampPhase::Idle,
            hold_left: 0,
            pacer,
        }
    }

    /// Begin ramping from `start`.
    pub fn start(&mut self) {
        self.value = self.spec.start;
        self.hold_left = 0;
        self.pacer.reset();
        self.phase = match self.spec.completion {
            Completion::Wrap if self.spec.target > self.spec.start => RampPhase::Ramping,
            Completion::Wrap => RampPhase::Settled,
            _ if self.value >= self.spec.target => RampPhase::Settled,
            _ => RampPhase::Ramping,
        };
    }

    /// Current value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Current phase.
    pub fn phase(&self) -> RampPhase {
        self.phase
    }

    /// Parameters.
    pub fn spec(&self) -> &RampSpec {
        &self.spec
    }

    /// Progress toward the target in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        let span = self.spec.target.saturating_sub(self.spec.start);
        if span == 0 {
            return 1.0;
        }
        f64::from(self.value.saturating_sub(self.spec.start)) / f64::from(span)
    }

    /// Ticks from `start` to the target.
    fn ramp_ticks(&self) -> u64 {
        let span = u64::from(self.spec.target - self.spec.start);
        span.div_ceil(u64::from(self.spec.step.max(1)))
    }

    fn hold_ticks(&self, pause_ms: u64) -> u32 {
        ticks_for(Duration::from_millis(pause_ms), self.spec.interval())
    }

    fn skip_wrapping(&mut self, ticks: u32) {
        let span = u128::from(self.spec.target - self.spec.start);
        let offset = u128::from(self.value - self.spec.start);
        let step = u128::from(self.spec.step) % span;
        let next = (offset + step * u128::from(ticks)) % span;
        // next < span, so it fits back into the u32 range above start
        self.value = self.spec.start + next as u32;
    }

    fn skip_toward_target(&mut self, ticks: u32) {
        let next = u64::from(self.value) + u64::from(self.spec.step) * u64::from(ticks);
        self.value = u32::try_from(next).unwrap_or(u32::MAX).min(self.spec.target);
        if self.value >= self.spec.target {
            self.phase = RampPhase::Settled;
        }
    }

    /// A looping ramp repeats every `ramp + hold` ticks, so only the
    /// position inside that period matters.
    fn skip_looping(&mut self, ticks: u32, pause_ms: u64) {
        let ramp = self.ramp_ticks();
        let hold = self.hold_ticks(pause_ms);
        let period = ramp + u64::from(hold);
        let step = u64::from(self.spec.step);
        let position = match self.phase {
            RampPhase::Holding => ramp + u64::from(hold - self.hold_left.min(hold)),
            _ => u64::from(self.value - self.spec.start) / step,
        };
        let next = (position + u64::from(ticks)) % period;
        if next < ramp {
            // next * step < target - start here
            self.value = self.spec.start + (next * step) as u32;
            self.hold_left = 0;
            self.phase = RampPhase::Ramping;
        } else {
            self.value = self.spec.target;
            self.hold_left = hold - (next - ramp) as u32;
            self.phase = RampPhase::Holding;
        }
    }
}

impl Animation for Ramp {
    fn tick(&mut self) -> bool {
        self.skip(1)
    }

    fn skip(&mut self, ticks: u32) -> bool {
        if ticks == 0 || !self.is_running() {
            return false;
        }
        let before = self.value;
        match self.spec.completion {
            Completion::Wrap => self.skip_wrapping(ticks),
            Completion::Settle => self.skip_toward_target(ticks),
            Completion::Loop { pause_ms } => self.skip_looping(ticks, pause_ms),
        }
        self.value != before
    }

    fn reset(&mut self) {
        self.value = self.spec.start;
        self.phase = RampPhase::Idle;
        self.hold_left = 0;
        self.pacer.reset();
    }

    fn is_running(&self) -> bool {
        matches!(self.phase, RampPhase::Ramping | RampPhase::Holding)
    }

    fn pacer(&mut self) -> &mut Pacer {
        &mut self.pacer
    }

    fn interval(&self) -> Duration {
        self.pacer.interval()
    }
}

/// Index rotating over a fixed number of sub-items.
#[derive(Clone, Debug)]
pub struct Cycle {
    len: usize,
    index: usize,
    running: bool,
    pacer: Pacer,
}

impl Cycle {
    /// Stopped cycle over `len` items.
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            index: 0,
            running: false,
            pacer: Pacer::new(interval),
        }
    }

    /// Start rotating from the first item.
    pub fn start(&mut self) {
        self.index = 0;
        self.pacer.reset();
        self.running = self.len > 1;
    }

    /// Current item.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Time left until the next rotation.
    pub fn until_next(&self) -> Duration {
        self.pacer.until_next()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for an empty cycle.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Animation for Cycle {
    fn tick(&mut self) -> bool {
        if !self.running || self.len == 0 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    fn skip(&mut self, ticks: u32) -> bool {
        if ticks == 0 || !self.running || self.len == 0 {
            return false;
        }
        let steps = usize::try_from(ticks).unwrap_or(usize::MAX) % self.len;
        self.index = (self.index + steps) % self.len;
        true
    }

    fn reset(&mut self) {
        self.index = 0;
        self.running = false;
        self.pacer.reset();
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn pacer(&mut self) -> &mut Pacer {
        &mut self.pacer
    }

    fn interval(&self) -> Duration {
        self.pacer.interval()
    }
}

/// Reveals a string one character per tick.
#[derive(Clone, Debug)]
pub struct Typewriter {
    target: String,
    revealed_bytes: usize,
    revealed_chars: usize,
    total_chars: usize,
    running: bool,
    pacer: Pacer,
}

impl Typewriter {
    /// Stopped typewriter with nothing revealed.
    pub fn new(target: impl Into<String>, interval: Duration) -> Self {
        let target = target.into();
        let total_chars = target.chars().count();
        Self {
            target,
            revealed_bytes: 0,
            revealed_chars: 0,
            total_chars,
            running: false,
            pacer: Pacer::new(interval),
        }
    }

    /// Start typing from the first character.
    pub fn start(&mut self) {
        self.revealed_bytes = 0;
        self.revealed_chars = 0;
        self.pacer.reset();
        self.running = self.total_chars > 0;
    }

    /// Swap in a new target and start typing it from scratch.
    pub fn retarget(&mut self, target: impl Into<String>) {
        self.target = target.into();
        self.total_chars = self.target.chars().count();
        self.start();
    }

    /// The part typed so far.
    pub fn revealed(&self) -> &str {
        &self.target[..self.revealed_bytes]
    }

    /// The full string being typed.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Characters revealed so far.
    pub fn revealed_chars(&self) -> usize {
        self.revealed_chars
    }

    /// True once every character is visible.
    pub fn is_complete(&self) -> bool {
        self.revealed_chars == self.total_chars
    }
}

impl Animation for Typewriter {
    fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let Some(next) = self.target[self.revealed_bytes..].chars().next() else {
            self.running = false;
            return false;
        };
        self.revealed_bytes += next.len_utf8();
        self.revealed_chars += 1;
        if self.is_complete() {
            self.running = false;
        }
        true
    }

    fn reset(&mut self) {
        self.revealed_bytes = 0;
        self.revealed_chars = 0;
        self.running = false;
        self.pacer.reset();
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn pacer(&mut self) -> &mut Pacer {
        &mut self.pacer
    }

    fn interval(&self) -> Duration {
        self.pacer.interval()
    }
}

/// One step of a [`Script`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Wait without changing anything.
    Pause {
        /// Wait time
        ms: u64,
    },
    /// Make the next item visible.
    Reveal,
    /// Type `text` into reply slot `slot`, one character per tick.
    Type {
        /// Reply slot
        slot: usize,
        /// Reply text
        text: String,
    },
}

/// Parameters of a [`Script`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSpec {
    /// Tick interval in milliseconds (also the typing speed)
    pub interval_ms: u64,
    /// Steps, played once in order
    pub steps: Vec<ScriptStep>,
}

impl ScriptSpec {
    /// Tick interval.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Number of reply slots the script writes to.
    pub fn slots(&self) -> usize {
        self.steps
            .iter()
            .filter_map(|s| match s {
                ScriptStep::Type { slot, .. } => Some(slot + 1),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }
}

/// Plays a [`ScriptSpec`] once: reveal an item, pause, type its reply, ...
#[derive(Clone, Debug)]
pub struct Script {
    spec: ScriptSpec,
    cursor: usize,
    pause_left: Option<u32>,
    typed_chars: usize,
    visible: usize,
    replies: Vec<String>,
    typing: Option<usize>,
    running: bool,
    pacer: Pacer,
}

impl Script {
    /// Stopped script with nothing shown.
    pub fn new(spec: ScriptSpec) -> Self {
        let slots = spec.slots();
        let pacer = Pacer::new(spec.interval());
        Self {
            spec,
            cursor: 0,
            pause_left: None,
            typed_chars: 0,
            visible: 0,
            replies: vec![String::new(); slots],
            typing: None,
            running: false,
            pacer,
        }
    }

    /// Play from the first step.
    pub fn start(&mut self) {
        self.clear();
        self.running = !self.spec.steps.is_empty();
    }

    /// Number of revealed items.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Reply text typed so far, per slot.
    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// Slot currently being typed.
    pub fn typing(&self) -> Option<usize> {
        self.typing
    }

    /// True after the last step.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.spec.steps.len()
    }

    fn clear(&mut self) {
        self.cursor = 0;
        self.pause_left = None;
        self.typed_chars = 0;
        self.visible = 0;
        self.typing = None;
        for reply in &mut self.replies {
            reply.clear();
        }
        self.pacer.reset();
    }

    fn next_step(&mut self) {
        self.cursor += 1;
        self.pause_left = None;
        self.typed_chars = 0;
        if self.is_finished() {
            self.running = false;
        }
    }
}

impl Animation for Script {
    fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let interval = self.spec.interval();
        let Some(step) = self.spec.steps.get(self.cursor).cloned() else {
            self.running = false;
            return false;
        };

        match step {
            ScriptStep::Pause { ms } => {
                let left = self
                    .pause_left
                    .unwrap_or_else(|| ticks_for(Duration::from_millis(ms), interval))
                    .saturating_sub(1);
                if left == 0 {
                    self.next_step();
                } else {
                    self.pause_left = Some(left);
                }
                false
            }
            ScriptStep::Reveal => {
                self.visible += 1;
                self.next_step();
                true
            }
            ScriptStep::Type { slot, text } => {
                let next = text.chars().nth(self.typed_chars);
                match next {
                    Some(c) => {
                        if let Some(reply) = self.replies.get_mut(slot) {
                            reply.push(c);
                        }
                        self.typed_chars += 1;
                        self.typing = Some(slot);
                        if self.typed_chars == text.chars().count() {
                            self.typing = None;
                            self.next_step();
                        }
                        true
                    }
                    None => {
                        self.typing = None;
                        self.next_step();
                        false
                    }
                }
            }
        }
    }

    /// Pauses are consumed in bulk; every other step still costs one tick.
    fn skip(&mut self, ticks: u32) -> bool {
        let interval = self.spec.interval();
        let mut left = ticks;
        let mut changed = false;
        while left > 0 && self.running {
            if let Some(&ScriptStep::Pause { ms }) = self.spec.steps.get(self.cursor) {
                let remaining = self
                    .pause_left
                    .unwrap_or_else(|| ticks_for(Duration::from_millis(ms), interval));
                let used = remaining.min(left);
                left -= used;
                if used == remaining {
                    self.next_step();
                } else {
                    self.pause_left = Some(remaining - used);
                }
                continue;
            }
            changed |= self.tick();
            left -= 1;
        }
        changed
    }

    fn reset(&mut self) {
        self.clear();
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn pacer(&mut self) -> &mut Pacer {
        &mut self.pacer
    }

    fn interval(&self) -> Duration {
        self.pacer.interval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ramp(start: u32, target: u32, step: u32, completion: Completion) -> Ramp {
        Ramp::new(RampSpec {
            start,
            target,
            step,
            interval_ms: 20,
            completion,
        })
    }

    #[test]
    fn idle_ramp_ignores_ticks() {
        let mut r = ramp(0, 10, 3, Completion::Settle);
        assert!(!r.tick());
        assert_eq!(r.value(), 0);
        assert_eq!(r.phase(), RampPhase::Idle);
    }

    #[test]
    fn ramp_stops_exactly_at_target() {
        // 94 is not a multiple of 3: the last step is clamped.
        let mut r = ramp(0, 94, 3, Completion::Settle);
        r.start();
        let mut last = 0;
        for _ in 0..100 {
            r.tick();
            assert!(r.value() >= last);
            assert!(r.value() <= 94);
            last = r.value();
        }
        assert_eq!(r.value(), 94);
        assert_eq!(r.phase(), RampPhase::Settled);
        assert!(!r.tick());
    }

    #[test]
    fn looping_ramp_holds_then_restarts() {
        // 100 / 5 = 20 ticks up, then 1000ms / 20ms = 50 ticks of hold.
        let mut r = ramp(0, 100, 5, Completion::Loop { pause_ms: 1000 });
        r.start();
        for _ in 0..20 {
            r.tick();
        }
        assert_eq!(r.value(), 100);
        assert_eq!(r.phase(), RampPhase::Holding);

        for _ in 0..49 {
            assert!(!r.tick());
            assert_eq!(r.value(), 100);
        }
        assert!(r.tick());
        assert_eq!(r.value(), 0);
        assert_eq!(r.phase(), RampPhase::Ramping);
    }

    #[test]
    fn wrapping_ramp_stays_below_modulus() {
        let mut r = ramp(0, 360, 2, Completion::Wrap);
        r.start();
        for _ in 0..179 {
            r.tick();
        }
        assert_eq!(r.value(), 358);
        r.tick();
        assert_eq!(r.value(), 0);
        assert!(r.is_running());
    }

    #[test]
    fn wrapping_ramp_survives_steps_near_the_top_of_the_range() {
        let mut r = ramp(0, u32::MAX, u32::MAX - 1, Completion::Wrap);
        r.start();
        r.tick();
        assert_eq!(r.value(), u32::MAX - 1);
        r.tick();
        assert_eq!(r.value(), u32::MAX - 2);
        assert!(r.value() < u32::MAX);

        let mut r = ramp(u32::MAX - 10, u32::MAX, u32::MAX, Completion::Settle);
        r.start();
        r.tick();
        assert_eq!(r.value(), u32::MAX);
        assert_eq!(r.phase(), RampPhase::Settled);
    }

    #[test]
    fn skipping_matches_ticking_one_by_one() {
        for completion in [Completion::Wrap, Completion::Loop { pause_ms: 90 }] {
            let mut stepped = ramp(5, 47, 4, completion.clone());
            let mut skipped = stepped.clone();
            stepped.start();
            skipped.start();
            for chunk in [1, 3, 7, 12, 25, 40, 101] {
                for _ in 0..chunk {
                    stepped.tick();
                }
                skipped.skip(chunk);
                assert_eq!(skipped.value(), stepped.value(), "{completion:?} after {chunk}");
                assert_eq!(skipped.phase(), stepped.phase(), "{completion:?} after {chunk}");
            }
        }
    }

    #[test]
    fn huge_gaps_cost_no_more_than_a_small_one() {
        let mut p = Pacer::new(Duration::from_millis(50));
        assert_eq!(p.due(Duration::from_millis(10)), 0);
        assert_eq!(p.due(Duration::MAX), u32::MAX);
        assert!(p.until_next() <= Duration::from_millis(50));

        let mut r = ramp(0, 360, 2, Completion::Wrap);
        r.start();
        r.advance(Duration::from_millis(10));
        r.advance(Duration::MAX);
        assert!(r.value() < 360);
        assert!(r.is_running());

        let mut r = ramp(0, 100, 1, Completion::Loop { pause_ms: 500 });
        r.start();
        r.advance(Duration::MAX);
        assert!(r.value() <= 100);
        assert!(r.is_running());

        let mut c = Cycle::new(3, Duration::from_millis(3000));
        c.start();
        assert!(c.advance(Duration::MAX));
        assert!(c.index() < 3);
    }

    #[test]
    fn ramp_starting_at_target_settles_immediately() {
        let mut r = ramp(7, 7, 1, Completion::Settle);
        r.start();
        assert_eq!(r.phase(), RampPhase::Settled);
        assert_eq!(r.fraction(), 1.0);
    }

    #[test]
    fn advance_converts_time_to_ticks() {
        let mut r = ramp(0, 234, 3, Completion::Settle);
        r.start();
        r.advance(Duration::from_millis(50));
        assert_eq!(r.value(), 6);
        r.advance(Duration::from_millis(10));
        assert_eq!(r.value(), 9);
        r.advance(Duration::from_secs(60));
        assert_eq!(r.value(), 234);
    }

    #[test]
    fn cycle_wraps_and_guards_empty() {
        let mut c = Cycle::new(3, Duration::from_millis(3000));
        c.start();
        let seen: Vec<usize> = (0..4)
            .map(|_| {
                c.tick();
                c.index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1]);

        let mut empty = Cycle::new(0, Duration::from_millis(3000));
        empty.start();
        assert!(!empty.tick());
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn typewriter_reveals_prefixes() {
        let text = "The $1 vs $1000 Challenge";
        let mut t = Typewriter::new(text, Duration::from_millis(30));
        t.start();
        assert_eq!(t.revealed(), "");
        for k in 1..=text.len() {
            assert!(t.tick());
            assert_eq!(t.revealed(), &text[..k]);
        }
        assert!(t.is_complete());
        assert!(!t.tick());
    }

    #[test]
    fn typewriter_counts_characters_not_bytes() {
        let mut t = Typewriter::new("héllo 🚀", Duration::from_millis(20));
        t.start();
        for _ in 0..7 {
            t.tick();
        }
        assert!(t.is_complete());
        assert_eq!(t.revealed(), "héllo 🚀");
        assert_eq!(t.revealed_chars(), 7);
    }

    #[test]
    fn empty_typewriter_is_complete_without_running() {
        let mut t = Typewriter::new("", Duration::from_millis(20));
        t.start();
        assert!(t.is_complete());
        assert!(!t.is_running());
    }

    #[test]
    fn retarget_restarts_typing() {
        let mut t = Typewriter::new("abc", Duration::from_millis(20));
        t.start();
        t.tick();
        t.tick();
        t.retarget("xyz!");
        assert_eq!(t.revealed(), "");
        t.tick();
        assert_eq!(t.revealed(), "x");
    }

    #[test]
    fn script_reveals_pauses_and_types() {
        let mut s = Script::new(ScriptSpec {
            interval_ms: 20,
            steps: vec![
                ScriptStep::Pause { ms: 40 },
                ScriptStep::Reveal,
                ScriptStep::Type {
                    slot: 0,
                    text: "hi".into(),
                },
            ],
        });
        s.start();
        assert!(!s.tick());
        assert!(!s.tick());
        assert_eq!(s.visible(), 0);

        assert!(s.tick());
        assert_eq!(s.visible(), 1);

        assert!(s.tick());
        assert_eq!(s.replies()[0], "h");
        assert_eq!(s.typing(), Some(0));

        assert!(s.tick());
        assert_eq!(s.replies()[0], "hi");
        assert_eq!(s.typing(), None);
        assert!(s.is_finished());
        assert!(!s.is_running());
    }

    #[test]
    fn pacer_reports_time_to_next_tick() {
        let mut p = Pacer::new(Duration::from_millis(30));
        assert_eq!(p.until_next(), Duration::from_millis(30));
        assert_eq!(p.due(Duration::from_millis(70)), 2);
        assert_eq!(p.until_next(), Duration::from_millis(20));
        assert_eq!(Pacer::new(Duration::ZERO).until_next(), Duration::MAX);
    }

    #[test]
    fn ticks_for_rounds_up() {
        assert_eq!(ticks_for(Duration::from_millis(500), Duration::from_millis(50)), 10);
        assert_eq!(ticks_for(Duration::from_millis(510), Duration::from_millis(50)), 11);
        assert_eq!(ticks_for(Duration::ZERO, Duration::from_millis(50)), 1);
    }
}
