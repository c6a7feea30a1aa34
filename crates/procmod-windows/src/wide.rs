//! UTF-16 helpers for Win32 string parameters and snapshot comparisons.

/// Nul-terminated UTF-16 encoding of `s`.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Compare a fixed-size, nul-terminated UTF-16 buffer against a UTF-8 name.
///
/// Process snapshots report executable filenames as UTF-16; encoding the
/// query once and comparing code units keeps non-ASCII names exact instead
/// of going through a lossy byte comparison.
pub fn wide_buf_eq(buf: &[u16], name: &str) -> bool {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    let mut units = name.encode_utf16();
    for &c in &buf[..len] {
        match units.next() {
            Some(u) if u == c => {}
            _ => return false,
        }
    }
    units.next().is_none()
}
