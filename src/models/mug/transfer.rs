use tracing::debug;
use uom::{ConstZero, si::f64::Volume};

use crate::support::units::{rounded_millilitres, volume_tolerance};

use super::{Mug, TransferOutcome};

/// Pours as much of `source` as fits into `target`.
///
/// Both mugs are updated together: the volume leaving `source` is exactly the
/// volume arriving in `target`, so their combined level is unchanged.
///
/// The pour is refused when `source` has something to give and `target`
/// holds a different beverage. An unlabelled `target` takes on the source's
/// beverage once anything arrives. `source` keeps its label even if the pour
/// drains it, as it would after a draining sip.
///
/// This never fails. A pour into a full mug moves nothing and reports
/// [`TransferOutcome::Partial`] with `moved` of zero.
pub fn transfer(source: &mut Mug, target: &mut Mug) -> TransferOutcome {
    match (&target.content, &source.content) {
        (Some(held), Some(offered)) if held != offered && source.level > volume_tolerance() => {
            debug!(%held, %offered, "refused to pour between mugs");
            return TransferOutcome::Refused;
        }
        _ => {}
    }

    let room = target.room();
    let outcome = if room + volume_tolerance() >= source.level {
        let moved = source.level;
        target.level += moved;
        target.snap_level();
        source.level = Volume::ZERO;
        TransferOutcome::Complete { moved }
    } else {
        target.level = *target.capacity;
        source.level -= room;
        source.snap_level();
        TransferOutcome::Partial {
            moved: room,
            remaining: source.level,
        }
    };

    let moved = outcome.moved();
    if moved > volume_tolerance() {
        if target.content.is_none() {
            target.content.clone_from(&source.content);
        }
        target.clean = false;
    }

    debug!(
        moved_ml = rounded_millilitres(moved),
        source_ml = rounded_millilitres(source.level),
        target_ml = rounded_millilitres(target.level),
        "poured between mugs"
    );
    outcome
}
