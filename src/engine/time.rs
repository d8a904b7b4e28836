use hecs::{Entity, World};
use tracing::debug;
use uom::si::{f32::Time, time::second};
use uuid::Uuid;

use crate::components::{cue::Cue, id::ScheduledCueId};

/// Negative and NaN delays collapse to zero.
pub fn normalize_delay(delay: Time) -> Time {
    let seconds = delay.get::<second>();
    if seconds.is_nan() || seconds < 0.0 {
        Time::new::<second>(0.0)
    } else {
        delay
    }
}

/// The host's cue-apply capability. Cues are always instant.
pub trait CueSink {
    fn apply_cue(&mut self, world: &mut World, target: Entity, cue: Cue);
}

impl<F> CueSink for F
where
    F: FnMut(&mut World, Entity, Cue),
{
    fn apply_cue(&mut self, world: &mut World, target: Entity, cue: Cue) {
        (self)(world, target, cue)
    }
}

/// Sink that only remembers what it was asked to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingCueSink {
    pub applied: Vec<(Entity, Cue)>,
}

impl CueSink for RecordingCueSink {
    fn apply_cue(&mut self, _world: &mut World, target: Entity, cue: Cue) {
        self.applied.push((target, cue));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedCue {
    pub id: ScheduledCueId,
    pub target: Entity,
    pub cue: Cue,
}

#[derive(Debug, Clone)]
struct ScheduledCue {
    id: ScheduledCueId,
    sequence: u64,
    due: f64,
    target: Entity,
    cue: Cue,
}

/// Fire-and-forget queue of delayed cues.
///
/// - Scheduling never applies anything; cues only fire from `advance`, so a
///   resolver's verdict is always available before its cue renders.
/// - Cues fire in due-time order, ties broken by scheduling order.
/// - There is no cancellation. A cue whose target has left the world is dropped.
#[derive(Debug, Default)]
pub struct CueScheduler {
    // Seconds
    clock: f64,
    next_sequence: u64,
    queue: Vec<ScheduledCue>,
}

impl CueScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, target: Entity, cue: Cue, delay: Time) -> ScheduledCueId {
        let delay = f64::from(normalize_delay(delay).get::<second>());
        let id = Uuid::new_v4();
        debug!(
            "Scheduling cue {} ({:?}) on {:?} in {}s",
            cue, id, target, delay
        );
        self.queue.push(ScheduledCue {
            id,
            sequence: self.next_sequence,
            due: self.clock + delay,
            target,
            cue,
        });
        self.next_sequence += 1;
        id
    }

    pub fn now(&self) -> Time {
        Time::new::<second>(self.clock as f32)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn pending_for(&self, target: Entity) -> Vec<Cue> {
        self.queue
            .iter()
            .filter(|scheduled| scheduled.target == target)
            .map(|scheduled| scheduled.cue)
            .collect()
    }

    /// Moves the clock forward by `elapsed` and fires every cue that is due.
    /// Zero elapsed time still fires cues scheduled with zero delay.
    pub fn advance(
        &mut self,
        world: &mut World,
        sink: &mut dyn CueSink,
        elapsed: Time,
    ) -> Vec<AppliedCue> {
        self.clock += f64::from(normalize_delay(elapsed).get::<second>());

        let clock = self.clock;
        let (mut due, waiting): (Vec<_>, Vec<_>) = self
            .queue
            .drain(..)
            .partition(|scheduled| scheduled.due <= clock);
        self.queue = waiting;

        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.sequence.cmp(&b.sequence)));

        // Fire after the queue is settled
        let mut applied = Vec::with_capacity(due.len());
        for scheduled in due {
            if !world.contains(scheduled.target) {
                debug!(
                    "Dropping cue {} ({:?}): target {:?} no longer exists",
                    scheduled.cue, scheduled.id, scheduled.target
                );
                continue;
            }
            debug!(
                "Applying cue {} ({:?}) to {:?}",
                scheduled.cue, scheduled.id, scheduled.target
            );
            sink.apply_cue(world, scheduled.target, scheduled.cue);
            applied.push(AppliedCue {
                id: scheduled.id,
                target: scheduled.target,
                cue: scheduled.cue,
            });
        }
        applied
    }
}
