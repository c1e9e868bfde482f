use crate::{ApplicantId, ClassifyError, IdTable, RuleMask};

/// The branch-free hot loop: for every record and every rule column, stage
/// the id in the column's bucket and commit it by the 0/1 match mask.
///
/// The store is unconditional; a non-match wastes one store into a slot
/// that the next genuine match overwrites. The only data-dependent work in
/// the loop body is integer arithmetic.
pub(crate) fn classify(
    masks: &[RuleMask],
    bindings: &[usize],
    ids: &[ApplicantId],
    bitfields: &[u32],
    outputs: &mut [IdTable],
) -> Result<(), ClassifyError> {
    for (&id, &bits) in ids.iter().zip(bitfields) {
        for (mask, &slot) in masks.iter().zip(bindings) {
            let hit = mask.matches(bits);
            outputs[slot].push_speculative(id, hit)?;
        }
    }
    Ok(())
}
