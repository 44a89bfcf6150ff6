//! Import ordering check.
//!
//! Expected order: entries grouped by rank (builtin < external < internal <
//! parent < sibling < index), modules sorted case-sensitively ascending
//! within each group. The check reconstructs the expected sequence and
//! reports only the first position where the actual sequence diverges, so
//! report volume stays proportional to file count rather than import count.

use crate::model::ImportEntry;

/// Compare actual import order against the expected order.
///
/// Returns `None` when the sequence is already well-ordered, otherwise the
/// violation message describing the first divergent position.
pub fn first_divergence(entries: &[ImportEntry]) -> Option<String> {
    let expected = expected_order(entries);

    for (position, (want, got)) in expected.iter().zip(entries.iter()).enumerate() {
        if *want != got {
            return Some(format!(
                "imports diverge at position {}: expected \"{}\" ({}), found \"{}\" ({})",
                position,
                want.module,
                want.group.name(),
                got.module,
                got.group.name()
            ));
        }
    }

    None
}

/// Reconstruct the expected ordering of `entries`.
///
/// Stable sort by (group rank, module): equal entries keep their relative
/// input order, so duplicated imports never produce a spurious divergence.
fn expected_order(entries: &[ImportEntry]) -> Vec<&ImportEntry> {
    let mut expected: Vec<&ImportEntry> = entries.iter().collect();
    expected.sort_by(|a, b| a.group.cmp(&b.group).then_with(|| a.module.cmp(&b.module)));
    expected
}

#[cfg(test)]
#[path = "import_order_tests.rs"]
mod tests;
