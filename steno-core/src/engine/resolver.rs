//! Stroke resolution: chord bits to emitted codes

use log::debug;
use crate::tables::Layout;
use crate::types::{KeyCode, Mods, STROKE_ORDER};
use super::host::HostOutput;
use super::state::Stroke;

/// Emits the codes of a completed stroke
///
/// Families are walked in [`STROKE_ORDER`]. The count of emitted codes runs
/// across all families, so "capitalize second" shifts the second code of the
/// whole stroke even when it comes from another family than the first.
/// Returns the number of codes sent.
pub fn resolve<H: HostOutput>(stroke: &Stroke, layout: &Layout, case_shift: Mods, host: &mut H) -> usize {
    let original_mods = host.mods();
    let case_mode = stroke.case_mode();
    if !case_mode.is_none() {
        host.add_mods(case_shift);
    }
    let release_after = case_mode.shifted_codes();

    let mut sent = 0usize;
    for desc in STROKE_ORDER.iter().filter(|d| d.has_table) {
        let Some(table) = layout.table(desc.family) else {
            continue;
        };
        for code in table.codes(stroke.bits(desc.family)) {
            host.tap_code(code);
            sent += 1;
            if release_after == Some(sent) {
                host.del_mods(case_shift);
            }
        }
    }

    if !case_mode.is_none() {
        host.set_mods(original_mods);
    }

    debug!("stroke {:?}: {} codes, case {:?}", stroke.keys().collect::<Vec<_>>(), sent, case_mode);
    sent
}

/// Codes a stroke would emit, without case handling
pub fn preview(stroke: &Stroke, layout: &Layout) -> Vec<KeyCode> {
    STROKE_ORDER
        .iter()
        .filter_map(|d| layout.table(d.family).map(|t| (d.family, t)))
        .flat_map(|(family, table)| table.codes(stroke.bits(family)).collect::<Vec<_>>())
        .collect()
}
