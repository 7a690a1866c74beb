//! Assignment resolution: many claims down to one owner per file
//!
//! Every file claimed by at least one database ends up with exactly
//! one owning database key. Files with multiple claimants are recorded
//! as conflicts for reporting, then resolved by a deterministic
//! tie-break. Resolution is a pure function of the claim set: no I/O,
//! no randomness, and running it twice on the same claims yields
//! identical results.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::database::Claim;

/// Final file → database-key assignment plus the conflicts observed
/// while producing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Exactly one owning database key per claimed file.
    pub assignment: BTreeMap<String, String>,
    /// Files claimed by more than one database, with every claimant.
    /// Informational only: the assignment above already picked one.
    pub conflicts: BTreeMap<String, BTreeSet<String>>,
}

/// Order database keys by specificity: longer keys first, equal
/// lengths lexicographically.
///
/// This is a policy choice, not a proven invariant: a longer key
/// usually denotes a more deeply nested, more specific build
/// configuration, which should win over a broader one. When two
/// unrelated keys happen to share a length, the lexical fallback is
/// arbitrary but total, so resolution stays deterministic.
pub fn specificity_order(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

/// Resolve claims with the default specificity policy.
pub fn resolve(claims: &[Claim]) -> Resolution {
    resolve_with(claims, specificity_order)
}

/// Resolve claims with a caller-supplied tie-break ordering; for each
/// conflicted file, the claimant that sorts first under `policy` wins.
///
/// The policy is injected here so alternative tie-break strategies can
/// be substituted without touching the compression logic downstream.
pub fn resolve_with(claims: &[Claim], policy: impl Fn(&str, &str) -> Ordering) -> Resolution {
    let mut file_to_dbs: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for claim in claims {
        file_to_dbs
            .entry(claim.file.as_str())
            .or_default()
            .insert(claim.db_key.as_str());
    }

    let mut resolution = Resolution::default();
    for (file, dbs) in file_to_dbs {
        if dbs.len() > 1 {
            resolution.conflicts.insert(
                file.to_string(),
                dbs.iter().map(|db| db.to_string()).collect(),
            );
        }
        if let Some(winner) = dbs.iter().min_by(|a, b| policy(a, b)) {
            resolution
                .assignment
                .insert(file.to_string(), winner.to_string());
        }
    }
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(file: &str, db_key: &str) -> Claim {
        Claim {
            file: file.to_string(),
            db_key: db_key.to_string(),
        }
    }

    #[test]
    fn test_single_claimant_wins_unopposed() {
        let resolution = resolve(&[claim("source/a.c", "build/x")]);
        assert_eq!(
            resolution.assignment.get("source/a.c"),
            Some(&"build/x".to_string())
        );
        assert!(resolution.conflicts.is_empty());
    }

    #[test]
    fn test_longer_key_wins() {
        let resolution = resolve(&[claim("f.c", "a"), claim("f.c", "a/b/c")]);
        assert_eq!(resolution.assignment.get("f.c"), Some(&"a/b/c".to_string()));
    }

    #[test]
    fn test_equal_length_falls_back_to_lexicographic() {
        let resolution = resolve(&[claim("f.c", "zeta"), claim("f.c", "alpha")]);
        assert_eq!(resolution.assignment.get("f.c"), Some(&"alpha".to_string()));
    }

    #[test]
    fn test_conflicts_record_all_claimants() {
        let resolution = resolve(&[
            claim("f.c", "build/x"),
            claim("f.c", "build/y"),
            claim("g.c", "build/x"),
        ]);
        let claimants = resolution.conflicts.get("f.c").unwrap();
        assert_eq!(claimants.len(), 2);
        assert!(claimants.contains("build/x"));
        assert!(claimants.contains("build/y"));
        assert!(!resolution.conflicts.contains_key("g.c"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let forward = [
            claim("f.c", "build/x"),
            claim("f.c", "build/y"),
            claim("g.c", "build/y"),
        ];
        let reversed: Vec<Claim> = forward.iter().rev().cloned().collect();
        assert_eq!(resolve(&forward), resolve(&reversed));
    }

    #[test]
    fn test_duplicate_claims_are_not_conflicts() {
        let resolution = resolve(&[claim("f.c", "build/x"), claim("f.c", "build/x")]);
        assert!(resolution.conflicts.is_empty());
        assert_eq!(
            resolution.assignment.get("f.c"),
            Some(&"build/x".to_string())
        );
    }

    #[test]
    fn test_injected_policy_overrides_default() {
        let resolution = resolve_with(
            &[claim("f.c", "a"), claim("f.c", "a/b/c")],
            |a: &str, b: &str| a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        );
        assert_eq!(resolution.assignment.get("f.c"), Some(&"a".to_string()));
    }
}
