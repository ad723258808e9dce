//! The scheduler proper.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::trace;

use crate::{ScheduleError, ScheduleResult};

/// Something the scheduler can run: a cheap handle carrying a kind tag.
///
/// Members are handles (ids, slots), not the entities themselves, so that a
/// behavior can take `&mut` of the whole context while it runs.
pub trait Member: Copy {
    type Kind: Copy + Eq + Hash + fmt::Debug;

    fn kind(&self) -> Self::Kind;
}

/// A registered behavior: mutate the context on behalf of one member.
pub type Behavior<C, M, E> = fn(&mut C, M) -> Result<(), E>;

/// Ordered phases plus the behavior registry.
///
/// `C` is the context every behavior mutates, `M` the member handle and `E`
/// the behaviors' error type.
pub struct Scheduler<C, M: Member, E> {
    phases:   Vec<&'static str>,
    registry: HashMap<(usize, M::Kind), Behavior<C, M, E>>,
}

impl<C, M: Member, E> Scheduler<C, M, E> {
    /// A scheduler with the given phases, in execution order, and an empty
    /// registry.
    pub fn new(phases: &[&'static str]) -> Self {
        Self { phases: phases.to_vec(), registry: HashMap::new() }
    }

    pub fn phases(&self) -> &[&'static str] {
        &self.phases
    }

    /// Position of `phase` in execution order.
    pub fn phase_index(&self, phase: &str) -> Option<usize> {
        self.phases.iter().position(|p| *p == phase)
    }

    /// Number of registered `(phase, kind)` pairs.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Register `behavior` for members of `kind` during `phase`.
    ///
    /// Fails with `UnknownPhase` for a name not passed to [`new`](Self::new)
    /// and with `DuplicateBehavior` if the pair is already taken.
    pub fn register(
        &mut self,
        phase: &str,
        kind: M::Kind,
        behavior: Behavior<C, M, E>,
    ) -> ScheduleResult<()> {
        let index = self
            .phase_index(phase)
            .ok_or_else(|| ScheduleError::UnknownPhase(phase.to_owned()))?;
        if self.registry.contains_key(&(index, kind)) {
            return Err(ScheduleError::DuplicateBehavior {
                phase: phase.to_owned(),
                kind:  format!("{kind:?}"),
            });
        }
        self.registry.insert((index, kind), behavior);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, phase: &str, kind: M::Kind, behavior: Behavior<C, M, E>) -> ScheduleResult<Self> {
        self.register(phase, kind, behavior)?;
        Ok(self)
    }

    pub fn has_behavior(&self, phase: &str, kind: M::Kind) -> bool {
        self.phase_index(phase)
            .is_some_and(|index| self.registry.contains_key(&(index, kind)))
    }

    /// Run every phase over `members`, phase-major.
    ///
    /// Members without a behavior for a phase are skipped for that phase.
    pub fn execute(&self, ctx: &mut C, members: &[M]) -> Result<(), E> {
        for (index, phase) in self.phases.iter().enumerate() {
            trace!(phase = *phase, members = members.len(), "executing phase");
            for &member in members {
                if let Some(behavior) = self.registry.get(&(index, member.kind())) {
                    behavior(ctx, member)?;
                }
            }
        }
        Ok(())
    }
}

impl<C, M: Member, E> fmt::Debug for Scheduler<C, M, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<(usize, String)> = self
            .registry
            .keys()
            .map(|(index, kind)| (*index, format!("{kind:?}")))
            .collect();
        pairs.sort();
        f.debug_struct("Scheduler")
            .field("phases", &self.phases)
            .field("registry", &pairs)
            .finish()
    }
}
