//! The zone rule base and the classifier.

use wh_core::{ItemAttrs, ZoneId};

use crate::membership::{high, low, medium};

/// Number of zone rules.  Layouts with at least this many drop zones give
/// every rule its own zone; smaller layouts overflow into the last zone (a
/// dispatcher policy, not a classifier concern).
pub const RULE_COUNT: usize = 5;

/// Classify an item into a drop zone.
///
/// Each rule's firing strength is the fuzzy AND (minimum) of its antecedent
/// memberships:
///
/// | Zone | Rule                                          | Intent                    |
/// |------|-----------------------------------------------|---------------------------|
/// | Z1   | low(size) ∧ high(fragility) ∧ high(priority)  | fast-access fragile       |
/// | Z2   | high(size) ∧ low(fragility) ∧ high(priority)  | fast-access bulk          |
/// | Z3   | high(fragility) ∧ medium(priority)            | climate-controlled fragile|
/// | Z4   | high(size) ∧ low(fragility) ∧ medium(priority)| bulk storage              |
/// | Z5   | low(priority)                                 | long-term / overflow      |
///
/// The winner is the rule with maximal strength.  Rules are evaluated in the
/// declared order with a strict `>` update, so ties go to the
/// earliest-declared zone — an explicit part of the contract, since several
/// attribute triples fire two rules equally.
pub fn classify(item: ItemAttrs) -> ZoneId {
    let size_low  = low(item.size);
    let size_high = high(item.size);

    let frag_low  = low(item.fragility);
    let frag_high = high(item.fragility);

    let prio_low  = low(item.priority);
    let prio_med  = medium(item.priority);
    let prio_high = high(item.priority);

    let strengths: [f64; RULE_COUNT] = [
        size_low.min(frag_high).min(prio_high),
        size_high.min(frag_low).min(prio_high),
        frag_high.min(prio_med),
        size_high.min(frag_low).min(prio_med),
        prio_low,
    ];

    let mut best = ZoneId(0);
    let mut best_strength = strengths[0];
    for (i, &s) in strengths.iter().enumerate().skip(1) {
        if s > best_strength {
            best = ZoneId(i as u16);
            best_strength = s;
        }
    }
    best
}
