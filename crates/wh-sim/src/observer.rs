//! Simulation observer trait for progress reporting and data collection.

use wh_core::{AgentId, GeneratorId, ItemAttrs, Tick, ZoneId};

/// Callbacks invoked by [`Warehouse::tick`][crate::Warehouse::tick] at the
/// item-lifecycle milestones.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — delivery counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct DeliveryCounter(u64);
///
/// impl SimObserver for DeliveryCounter {
///     fn on_delivery(&mut self, _: Tick, _: AgentId, _: ZoneId, _: ItemAttrs) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// A generator buffered a fresh item.
    fn on_item_generated(&mut self, _tick: Tick, _gen: GeneratorId, _item: ItemAttrs) {}

    /// An idle agent accepted a pending item and began its pickup leg.
    fn on_task_assigned(&mut self, _tick: Tick, _agent: AgentId, _gen: GeneratorId) {}

    /// An agent collected the buffered item and was routed to `zone`.
    fn on_pickup(&mut self, _tick: Tick, _agent: AgentId, _gen: GeneratorId, _zone: ZoneId, _item: ItemAttrs) {}

    /// An agent handed its item to a drop zone and went idle.
    fn on_delivery(&mut self, _tick: Tick, _agent: AgentId, _zone: ZoneId, _item: ItemAttrs) {}

    /// A fleet movement round completed.
    fn on_movement_round(&mut self, _tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `tick`
/// but don't want lifecycle callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
