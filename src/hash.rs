/// Fold a string into a non-negative integer.
///
/// Each UTF-16 code unit is mixed in with `acc * 31 + unit`, written as
/// `(acc << 5) - acc + unit`, wrapping at 32 bits. The absolute value of the
/// final accumulator is returned, so `i32::MIN` maps to `2^31`.
pub fn hash_string(input: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in input.encode_utf16() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}
