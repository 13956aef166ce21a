//! Version ranking of directory names.
//!
//! The version of a name is its trailing run of digits and dots, read as a
//! decimal number the way a float parser reads a prefix: `WebStorm 2020.1`
//! is 2020.1, `WebStorm 8.0.1` is 8.0, `WebStormBeta` has none.

use idegen_types::MalformedVersionPolicy;
use std::cmp::Ordering;

/// Extract the numeric version at the end of `name`.
///
/// Returns `None` when the name has no trailing digit/dot run, or when the
/// run has no digits before its second dot (`WebStorm.`, `x..5`).
pub fn trailing_version(name: &str) -> Option<f64> {
    let head = name.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    parse_float_prefix(&name[head.len()..])
}

// Longest `digits [. digits]` prefix of a digit/dot run.
fn parse_float_prefix(run: &str) -> Option<f64> {
    let integer = run.chars().take_while(|c| c.is_ascii_digit()).count();
    let mut end = integer;
    let mut fraction = 0;

    if run[end..].starts_with('.') {
        fraction = run[end + 1..].chars().take_while(|c| c.is_ascii_digit()).count();
        end += 1 + fraction;
    }

    if integer + fraction == 0 {
        return None;
    }
    run[..end].parse().ok()
}

/// Order two extracted versions, highest first.
///
/// `Ordering::Less` means `a` ranks ahead of `b`. Names without a version
/// go ahead of (policy `First`) or behind (policy `Last`) every versioned
/// name and compare equal to each other.
pub fn compare_ranked(a: Option<f64>, b: Option<f64>, policy: MalformedVersionPolicy) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => match policy {
            MalformedVersionPolicy::First => Ordering::Less,
            MalformedVersionPolicy::Last => Ordering::Greater,
        },
        (Some(_), None) => match policy {
            MalformedVersionPolicy::First => Ordering::Greater,
            MalformedVersionPolicy::Last => Ordering::Less,
        },
        (Some(x), Some(y)) => y.total_cmp(&x),
    }
}

/// Sort names highest version first.
///
/// Names are put in lexical order before the stable version sort, so
/// equal versions come out in a fixed order regardless of directory
/// listing order.
pub fn sort_ranked(names: &mut [String], policy: MalformedVersionPolicy) {
    names.sort();
    names.sort_by_cached_key(|name| RankKey(trailing_version(name), policy));
}

// Adapter so `sort_by_cached_key` can use `compare_ranked`.
struct RankKey(Option<f64>, MalformedVersionPolicy);

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ranked(self.0, other.0, self.1)
    }
}
