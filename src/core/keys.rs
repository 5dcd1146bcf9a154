//! Key generation.
//!
//! A key fragment is a readable, deterministic slug of a string value:
//! `"Don't have an account?"` → `dont_have_an_account`. Values with nothing
//! usable left (punctuation, or non-ASCII text when `asciiKeys` is on) fall
//! back to a hashed key such as `key_1x2y3z`.
//!
//! Uniqueness is a property of the run, not of the fragment, and is enforced
//! by [`KeyRegistry`].

use std::collections::HashSet;

/// Fragments are cut to this many characters.
pub const MAX_KEY_LENGTH: usize = 40;

const MIN_KEY_LENGTH: usize = 2;
const FALLBACK_PREFIX: &str = "key_";
const FALLBACK_HASH_LENGTH: usize = 8;

/// Build the key fragment for a value.
pub fn key_fragment(value: &str, ascii_only: bool) -> String {
    let keep = |c: &char| {
        if ascii_only {
            c.is_ascii_alphanumeric()
        } else {
            c.is_alphanumeric()
        }
    };

    let cleaned: String = value
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_whitespace() || keep(c))
        .collect();

    let joined = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    let truncated: String = joined.chars().take(MAX_KEY_LENGTH).collect();
    let fragment = truncated.trim_end_matches('_');

    if fragment.chars().count() < MIN_KEY_LENGTH {
        return fallback_key(value);
    }
    fragment.to_string()
}

/// `key_` followed by the base-36 hash of the value.
pub fn fallback_key(value: &str) -> String {
    format!("{}{}", FALLBACK_PREFIX, fallback_hash(value))
}

/// 32-bit rolling hash (`h * 31 + unit` over UTF-16 code units, wrapping),
/// absolute value in base 36, at most 8 characters.
pub fn fallback_hash(value: &str) -> String {
    let hash = value
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    let mut encoded = to_base36(i64::from(hash).unsigned_abs());
    encoded.truncate(FALLBACK_HASH_LENGTH);
    encoded
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Join a namespace and a fragment into a full key.
pub fn full_key(namespace: Option<&str>, fragment: &str) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() => format!("{}.{}", ns, fragment),
        _ => fragment.to_string(),
    }
}

/// Full keys claimed so far in one generation run.
///
/// Claims must be made in the run's total occurrence order: the first
/// claimant keeps the bare key, later ones get `_1`, `_2`, ...
#[derive(Debug, Default)]
pub struct KeyRegistry {
    claimed: HashSet<String>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the first free full key for `fragment` under `namespace`.
    pub fn claim(&mut self, namespace: Option<&str>, fragment: &str) -> String {
        let mut candidate = full_key(namespace, fragment);
        let mut suffix = 1;
        while self.claimed.contains(&candidate) {
            candidate = full_key(namespace, &format!("{}_{}", fragment, suffix));
            suffix += 1;
        }
        self.claimed.insert(candidate.clone());
        candidate
    }
}
