//! Plain data row types written by output backends.

/// One generated item: where it appeared and its attribute triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRow {
    pub tick:         u64,
    pub generator_id: u32,
    pub size:         f64,
    pub fragility:    f64,
    pub priority:     f64,
}

/// One completed delivery: who carried it, where it landed, what it was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryRow {
    pub tick:      u64,
    pub agent_id:  u32,
    pub zone:      u16,
    pub size:      f64,
    pub fragility: f64,
    pub priority:  f64,
}
