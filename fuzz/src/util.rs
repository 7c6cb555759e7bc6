use std::mem;

/// Reinterprets `data` as little-endian `u16` keys, dropping a trailing odd byte.
pub fn u8_as_u16_keys(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(mem::size_of::<u16>())
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Pairs each key with its input position so stability can be checked after sorting.
///
/// Keys are folded into a narrow range to force many equal elements.
pub fn tag_positions(keys: &[u16], key_range: u16) -> Vec<(u16, usize)> {
    keys.iter()
        .enumerate()
        .map(|(pos, key)| (key % key_range.max(1), pos))
        .collect()
}
