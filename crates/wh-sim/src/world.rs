//! Fixed world entities: item generators and drop zones.

use wh_core::{GeneratorId, GridPos, ItemAttrs, SimRng, ZoneId};

/// A wall-mounted item source with a single-item buffer.
///
/// A generator holding an item does not fire again until an agent has picked
/// the item up; the buffered attributes stay the canonical copy until then.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generator {
    pub id:      GeneratorId,
    pub pos:     GridPos,
    /// The buffered item awaiting pickup, if any.
    pub holding: Option<ItemAttrs>,
}

impl Generator {
    pub fn new(id: GeneratorId, pos: GridPos) -> Self {
        Self { id, pos, holding: None }
    }

    /// Roll the firing probability and, on success, buffer a fresh random
    /// item.  Returns the generated attributes, or `None` when the buffer is
    /// full or the roll fails.
    pub fn try_generate(&mut self, probability: f64, rng: &mut SimRng) -> Option<ItemAttrs> {
        if self.holding.is_some() || !rng.gen_bool(probability) {
            return None;
        }
        let attrs = ItemAttrs::random(rng);
        self.holding = Some(attrs);
        Some(attrs)
    }

    /// Hand the buffered item to a picking agent.
    #[inline]
    pub fn take(&mut self) -> Option<ItemAttrs> {
        self.holding.take()
    }
}

/// A delivery destination.  Zones only count what they receive; delivered
/// items leave the simulation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropZone {
    pub id:       ZoneId,
    pub pos:      GridPos,
    pub name:     String,
    /// Number of items delivered here so far.
    pub received: u64,
}

impl DropZone {
    pub fn new(id: ZoneId, pos: GridPos) -> Self {
        Self { id, pos, name: id.label(), received: 0 }
    }

    #[inline]
    pub fn receive(&mut self) {
        self.received += 1;
    }
}
