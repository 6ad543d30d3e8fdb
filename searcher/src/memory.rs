//! Best-effort sampling of the process's memory use.

/// Size of a memory page as reported in `/proc/self/statm`.
#[cfg(target_os = "linux")]
const PAGE_SIZE: usize = 4096;

/// Resident memory of the current process, in bytes.
///
/// Returns `None` when the host does not expose it.
#[cfg(target_os = "linux")]
pub fn sample() -> Option<usize> {
    let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
    let pages: usize = statm.split_whitespace().nth(1)?.parse().ok()?;
    Some(pages * PAGE_SIZE)
}

/// Resident memory of the current process, in bytes.
///
/// Returns `None` when the host does not expose it.
#[cfg(not(target_os = "linux"))]
pub fn sample() -> Option<usize> {
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn resident_memory_is_reported() {
        let bytes = sample().unwrap();
        assert!(bytes > 0);
        assert_eq!(bytes % PAGE_SIZE, 0);
    }
}
