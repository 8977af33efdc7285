//! Password hashing parameters

use serde::{Deserialize, Serialize};

/// Default Argon2id parameters for stored passwords
pub const DEFAULT_TIME_COST: u32 = 3;
pub const DEFAULT_MEMORY_COST: u32 = 19456; // 19 MiB
pub const DEFAULT_PARALLELISM: u32 = 1;
pub const DEFAULT_SALT_LEN: usize = 16;

/// Argon2id cost parameters used when hashing registration passwords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argon2Params {
    pub time_cost: u32,
    pub memory_cost: u32,
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            time_cost: DEFAULT_TIME_COST,
            memory_cost: DEFAULT_MEMORY_COST,
            parallelism: DEFAULT_PARALLELISM,
        }
    }
}

impl Argon2Params {
    /// Cheap parameters for tests
    pub fn fast() -> Self {
        Self {
            time_cost: 1,
            memory_cost: 1024,
            parallelism: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = Argon2Params::default();
        assert_eq!(params.time_cost, 3);
        assert_eq!(params.memory_cost, 19456);
        assert_eq!(params.parallelism, 1);
    }
}
