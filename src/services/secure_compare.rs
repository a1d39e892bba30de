use subtle::ConstantTimeEq;

/// Constant-time byte comparison.
///
/// Equal-length inputs are compared with `subtle`, so the running time does
/// not depend on where the first difference sits. Empty inputs and inputs
/// of unequal length return `false` straight away: the length is not
/// secret here, since signatures from one algorithm always have the same
/// number of hex digits.
pub fn secure_compare(a: &[u8], b: &[u8]) -> bool {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}
