/// Fixed-capacity slot arena for projectiles and asteroids.
///
/// Slots are allocated once at construction and recycled through their
/// `active` flag.  A `Handle` is just a slot index: it names whatever entity
/// currently occupies the slot, so callers must not hold one past `release`.

use log::debug;

use crate::entities::{Entity, EntityKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(pub usize);

#[derive(Clone, Debug)]
pub struct Pool {
    kind: EntityKind,
    slots: Vec<Entity>,
}

impl Pool {
    pub fn new(kind: EntityKind, capacity: usize) -> Self {
        Self {
            kind,
            slots: vec![Entity::default(); capacity],
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|e| e.active).count()
    }

    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(|e| e.active)
    }

    /// Reinitialise the first free slot at (x, y) and mark it active.
    /// Returns `None` when every slot is in use.
    pub fn acquire(&mut self, x: f32, y: f32) -> Option<Handle> {
        let index = self.slots.iter().position(|e| !e.active);
        let Some(index) = index else {
            debug!("{:?} pool exhausted ({} active)", self.kind, self.capacity());
            return None;
        };
        self.slots[index] = Entity {
            x,
            y,
            active: true,
            ..Entity::default()
        };
        Some(Handle(index))
    }

    /// Mark the slot inactive.  Returns `false` if it already was, so a
    /// second release has no effect.
    pub fn release(&mut self, handle: Handle) -> bool {
        match self.slots.get_mut(handle.0) {
            Some(entity) if entity.active => {
                entity.active = false;
                true
            }
            _ => false,
        }
    }

    /// The entity in `handle`'s slot, if that slot is active.
    pub fn get(&self, handle: Handle) -> Option<&Entity> {
        self.slots.get(handle.0).filter(|e| e.active)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut Entity> {
        self.slots.get_mut(handle.0).filter(|e| e.active)
    }

    /// Active entities with their handles, in slot order.
    pub fn iter_active(&self) -> impl Iterator<Item = (Handle, &Entity)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, e)| e.active)
            .map(|(i, e)| (Handle(i), e))
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (Handle, &mut Entity)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, e)| e.active)
            .map(|(i, e)| (Handle(i), e))
    }

    pub fn handles(&self) -> Vec<Handle> {
        self.iter_active().map(|(h, _)| h).collect()
    }
}
