/// Finds the length of the common prefix between a key and a node's key.
///
/// Returns the number of bytes that match starting from the given offset.
pub fn prefix_match(key: &[u8], start_idx: usize, node_key: &[u8]) -> usize {
    let mut i = 0;

    while i < node_key.len() && start_idx + i < key.len() && key[start_idx + i] == node_key[i] {
        i += 1;
    }

    i
}

/// Returns `true` when either string is a prefix of the other.
///
/// The empty string is a prefix of everything, so it is related to any key.
pub fn prefix_related(a: &str, b: &str) -> bool {
    let common = prefix_match(a.as_bytes(), 0, b.as_bytes());
    common == a.len() || common == b.len()
}

/// Splits off the leading character of `s` as its own string.
///
/// Returns `None` for the empty string.
pub fn leading_char(s: &str) -> Option<(char, String)> {
    s.chars().next().map(|c| (c, c.to_string()))
}
