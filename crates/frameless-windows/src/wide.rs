//! UTF-16 string helpers for Win32 fixed-size buffers.

/// Encodes a Rust string as a null-terminated UTF-16 buffer.
pub(crate) fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Decodes a fixed-size UTF-16 buffer, stopping at the first null.
pub(crate) fn from_wide(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}
