/// Scan inputs supplied by the coordinator.
use std::path::PathBuf;

/// Which simulation the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttackMode {
    #[default]
    Dictionary,
    BruteForce,
}

impl AttackMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dictionary => "Dictionary Attack",
            Self::BruteForce => "Brute-Force Attack",
        }
    }
}

/// Everything one dictionary scan needs. Immutable once built.
#[derive(Debug, Clone)]
pub struct ScanTarget {
    password: String,
    sources: Vec<PathBuf>,
    cinematic: bool,
}

impl ScanTarget {
    /// Build a target. The password is trimmed because every candidate is
    /// trimmed before comparison; an untrimmed password could never match.
    pub fn new(password: &str, sources: Vec<PathBuf>, cinematic: bool) -> Self {
        Self {
            password: password.trim().to_owned(),
            sources,
            cinematic,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn cinematic(&self) -> bool {
        self.cinematic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_trimmed() {
        let t = ScanTarget::new("  hunter2\n", vec![], false);
        assert_eq!(t.password(), "hunter2");
    }

    #[test]
    fn sources_keep_their_order() {
        let sources = vec![PathBuf::from("b.txt"), PathBuf::from("a.txt")];
        let t = ScanTarget::new("x", sources.clone(), true);
        assert_eq!(t.sources(), sources.as_slice());
        assert!(t.cinematic());
    }
}
