use rand::{rngs::OsRng, RngCore};

/// Source of identifiers for new in-memory records.
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> Result<i64, rand::Error>;
}

/// Uniform draws from `[0, 2^63)` using the operating system's CSPRNG.
///
/// Uniqueness is not checked; collisions are treated as negligible.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRngIds;

impl IdGenerator for OsRngIds {
    fn new_id(&self) -> Result<i64, rand::Error> {
        let mut buf = [0u8; 8];
        OsRng.try_fill_bytes(&mut buf)?;
        Ok((u64::from_le_bytes(buf) >> 1) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_non_negative() {
        let ids = OsRngIds;
        for _ in 0..1_000 {
            assert!(ids.new_id().expect("os rng") >= 0);
        }
    }

    #[test]
    fn ids_do_not_repeat_in_practice() {
        let ids = OsRngIds;
        let drawn: HashSet<i64> = (0..1_000).map(|_| ids.new_id().expect("os rng")).collect();
        assert_eq!(drawn.len(), 1_000);
    }
}
