use std::cmp::Ordering;

/// Version reported for plugins whose listing line carries no version.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Number of dotted components taken into account (major, minor, patch).
const COMPONENTS: usize = 3;

/// Returns `true` when `latest` is newer than `current`.
///
/// An installed version of [`UNKNOWN_VERSION`] is always considered stale.
/// Otherwise major, minor and patch are compared in order and the first
/// component that differs decides. A segment that is missing or not a plain
/// non-negative integer has no value: it is neither greater nor smaller than
/// anything, so that component never decides and the comparison moves on.
/// Numeric segments of any width compare by value.
/// When nothing decides the answer is `false`.
pub fn compare_versions(current: &str, latest: &str) -> bool {
    if current == UNKNOWN_VERSION {
        return true;
    }

    let current = components(current);
    let latest = components(latest);

    for (cur, lat) in current.into_iter().zip(latest) {
        match lat.zip(cur).map(|(l, c)| compare_numeric(l, c)) {
            Some(Ordering::Greater) => return true,
            Some(Ordering::Less) => return false,
            Some(Ordering::Equal) | None => continue,
        }
    }

    false
}

/// Digits of each component with leading zeros stripped, `None` when the
/// segment is missing or not all ASCII digits.
fn components(version: &str) -> [Option<&str>; COMPONENTS] {
    let mut parts = version.split('.');
    std::array::from_fn(|_| parts.next().and_then(numeric_segment))
}

fn numeric_segment(part: &str) -> Option<&str> {
    let digits = part.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    Some(if significant.is_empty() { "0" } else { significant })
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
