use hecs::{Entity, World};
use uom::si::f32::Time;

use crate::{
    components::{
        cue::Cue,
        id::ScheduledCueId,
        resistance::ResistVerdict,
        saving_throw::{SaveRoll, SaveVerdict},
        spell::SpellCast,
    },
    engine::{
        config::DefenseConfig,
        event::{Event, EventId, EventKind, EventLog},
        time::{AppliedCue, CueScheduler, CueSink, normalize_delay},
    },
    systems::rolls::{
        D20SavingThrowRoller, D20SpellResistanceRoller, SavingThrowRoller, SpellResistanceRoller,
    },
};

/// Everything a resolution call touches: the participants, the injected rules
/// configuration and roll capabilities, pending cues and the event log.
pub struct GameState {
    pub world: World,
    pub config: DefenseConfig,
    pub cue_scheduler: CueScheduler,
    event_log: EventLog,

    save_roller: Box<dyn SavingThrowRoller>,
    resistance_roller: Box<dyn SpellResistanceRoller>,
}

impl GameState {
    pub fn new(config: DefenseConfig) -> Self {
        Self::with_rollers(
            config,
            D20SavingThrowRoller::from_entropy(),
            D20SpellResistanceRoller::from_entropy(),
        )
    }

    /// Deterministic rolls: the same seed and the same calls give the same verdicts.
    pub fn with_seed(config: DefenseConfig, seed: u64) -> Self {
        Self::with_rollers(
            config,
            D20SavingThrowRoller::new(seed),
            // Offset so the two streams don't mirror each other
            D20SpellResistanceRoller::new(seed.wrapping_add(1)),
        )
    }

    pub fn with_rollers(
        config: DefenseConfig,
        save_roller: impl SavingThrowRoller + 'static,
        resistance_roller: impl SpellResistanceRoller + 'static,
    ) -> Self {
        Self {
            world: World::new(),
            config,
            cue_scheduler: CueScheduler::new(),
            event_log: EventLog::new(),
            save_roller: Box::new(save_roller),
            resistance_roller: Box::new(resistance_roller),
        }
    }

    pub fn set_save_roller(&mut self, roller: impl SavingThrowRoller + 'static) {
        self.save_roller = Box::new(roller);
    }

    pub fn roll_saving_throw(&mut self, roll: &SaveRoll) -> SaveVerdict {
        self.save_roller.roll_saving_throw(&self.world, roll)
    }

    pub fn check_spell_resistance(&mut self, cast: &SpellCast) -> ResistVerdict {
        self.resistance_roller
            .check_spell_resistance(&self.world, cast)
    }

    pub fn log_event(&mut self, kind: EventKind) -> EventId {
        let event = Event::new(kind);
        let id = event.id;
        self.event_log.push(event);
        id
    }

    pub fn log_response(&mut self, kind: EventKind, response_to: EventId) -> EventId {
        let event = Event::new(kind).as_response_to(response_to);
        let id = event.id;
        self.event_log.push(event);
        id
    }

    /// Queues `cue` on `target`. Nothing is applied until `advance_time`.
    pub fn schedule_cue(
        &mut self,
        target: Entity,
        cue: Cue,
        delay: Time,
        cause: EventId,
    ) -> ScheduledCueId {
        let delay = normalize_delay(delay);
        let id = self.cue_scheduler.schedule(target, cue, delay);
        self.log_response(
            EventKind::CueScheduled {
                id,
                target,
                cue,
                delay,
            },
            cause,
        );
        id
    }

    /// Advances the cue clock and applies every due cue through `sink`.
    pub fn advance_time(&mut self, sink: &mut dyn CueSink, elapsed: Time) -> Vec<AppliedCue> {
        let applied = self.cue_scheduler.advance(&mut self.world, sink, elapsed);
        for cue in &applied {
            self.log_event(EventKind::CueApplied {
                id: cue.id,
                target: cue.target,
                cue: cue.cue,
            });
        }
        applied
    }

    pub fn events(&self) -> &[Event] {
        &self.event_log
    }

    pub fn events_for(&self, entity: Entity) -> impl Iterator<Item = &Event> {
        self.event_log
            .iter()
            .filter(move |event| event.target() == Some(entity))
    }

    /// The log is never trimmed on its own; hosts drain it once they have
    /// consumed the events.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.event_log)
    }
}
