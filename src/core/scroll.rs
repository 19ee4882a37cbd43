//! Per-location scroll offsets for scroll restoration.

use std::collections::HashMap;

/// Remembers the scroll offset last seen at each location.
///
/// A committed location is armed once; the first view to render its content
/// takes the offset, later renders (refreshes) do not scroll again.
#[derive(Debug, Default)]
pub struct ScrollMemory {
    offsets: HashMap<String, f64>,
    pending: Option<String>,
}

impl ScrollMemory {
    pub fn save(&mut self, key: &str, offset: f64) {
        self.offsets.insert(key.to_string(), offset);
    }

    /// Offset to restore on arriving at `key`; unseen locations start at the top.
    pub fn restore(&self, key: &str) -> f64 {
        self.offsets.get(key).copied().unwrap_or(0.0)
    }

    /// Mark `key` as newly shown and waiting for its offset.
    pub fn arm(&mut self, key: &str) {
        self.pending = Some(key.to_string());
    }

    /// Offset for `key` if it is armed. Disarms it.
    pub fn take(&mut self, key: &str) -> Option<f64> {
        if self.pending.as_deref() != Some(key) {
            return None;
        }
        self.pending = None;
        Some(self.restore(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_restore() {
        let mut memory = ScrollMemory::default();
        assert_eq!(memory.restore("/fs"), 0.0);

        memory.save("/fs", 420.0);
        memory.save("/fs/docs", 12.5);
        assert_eq!(memory.restore("/fs"), 420.0);
        assert_eq!(memory.restore("/fs/docs"), 12.5);

        memory.save("/fs", 0.0);
        assert_eq!(memory.restore("/fs"), 0.0);
    }

    #[test]
    fn test_armed_offset_is_taken_once() {
        let mut memory = ScrollMemory::default();
        memory.save("/fs/docs", 300.0);
        assert_eq!(memory.take("/fs/docs"), None);

        memory.arm("/fs/docs");
        assert_eq!(memory.take("/fs"), None);
        assert_eq!(memory.take("/fs/docs"), Some(300.0));
        // A later render of the same listing keeps the user's position.
        assert_eq!(memory.take("/fs/docs"), None);

        memory.arm("/fs/docs");
        memory.arm("/fs");
        assert_eq!(memory.take("/fs/docs"), None);
        assert_eq!(memory.take("/fs"), Some(0.0));
    }
}
