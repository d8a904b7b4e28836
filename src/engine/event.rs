use hecs::Entity;
use uom::si::f32::Time;
use uuid::Uuid;

use crate::components::{
    cue::Cue,
    id::ScheduledCueId,
    resistance::ResistVerdict,
    saving_throw::{SaveCategory, SaveDifficulty, SaveQualifier, SaveVerdict},
    spell::SpellCast,
};

pub type EventId = Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
    pub response_to: Option<EventId>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            response_to: None,
        }
    }

    pub fn as_response_to(mut self, event_id: EventId) -> Self {
        self.response_to = Some(event_id);
        self
    }

    /// The entity the event happened to, if any.
    pub fn target(&self) -> Option<Entity> {
        match &self.kind {
            EventKind::SpellCastAt(cast) => Some(cast.target),
            EventKind::SavingThrowResolved { defender, .. } => Some(*defender),
            EventKind::SpellResistanceResolved { defender, .. } => Some(*defender),
            EventKind::CueScheduled { target, .. } => Some(*target),
            EventKind::CueApplied { target, .. } => Some(*target),
            EventKind::ReflexDamageAdjusted { target, .. } => Some(*target),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// A spell was cast at a target. Hosts use this to let the target react
    /// (e.g. turn hostile), it carries no rules outcome by itself.
    SpellCastAt(SpellCast),
    SavingThrowResolved {
        defender: Entity,
        opponent: Entity,
        category: SaveCategory,
        qualifier: SaveQualifier,
        difficulty: SaveDifficulty,
        verdict: SaveVerdict,
        succeeded: bool,
    },
    SpellResistanceResolved {
        attacker: Entity,
        defender: Entity,
        verdict: ResistVerdict,
    },
    CueScheduled {
        id: ScheduledCueId,
        target: Entity,
        cue: Cue,
        delay: Time,
    },
    CueApplied {
        id: ScheduledCueId,
        target: Entity,
        cue: Cue,
    },
    ReflexDamageAdjusted {
        target: Entity,
        raw: u32,
        adjusted: u32,
    },
}

pub type EventLog = Vec<Event>;
