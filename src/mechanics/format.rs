//! Display helpers shared by the binary and the demos.

/// Compact suffixes, largest first. `None` switches to scientific notation.
const THRESHOLDS: [(f64, Option<&str>); 8] = [
    (1e24, None),
    (1e21, Some("QQQ")),
    (1e18, Some("QQ")),
    (1e15, Some("Q")),
    (1e12, Some("T")),
    (1e9, Some("B")),
    (1e6, Some("M")),
    (1e3, Some("K")),
];

/// Filename-safe form: spaces become `_`, anything else non-alphanumeric is dropped.
pub fn slugify(s: &str) -> String {
    s.chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Hours as `Xh Ym`, `Ym Zs` or `Zs`, dropping zero trailing units.
pub fn format_time(hours: f64) -> String {
    let total = (hours * 3600.0).round_ties_even().max(0.0) as u64;
    let (h, rem) = (total / 3600, total % 3600);
    let (m, s) = (rem / 60, rem % 60);

    match (h, m, s) {
        (0, 0, s) => format!("{s}s"),
        (0, m, 0) => format!("{m}m"),
        (0, m, s) => format!("{m}m {s}s"),
        (h, 0, _) => format!("{h}h"),
        (h, m, _) => format!("{h}h {m}m"),
    }
}

/// Idle-game style compact number: `1.50K`, `2.00M`, ..., `1.23E+24`.
pub fn format_number(n: f64) -> String {
    for (threshold, suffix) in THRESHOLDS {
        if n >= threshold {
            return match suffix {
                Some(suffix) => format!("{:.2}{suffix}", n / threshold),
                None => scientific(n),
            };
        }
    }
    format!("{}", n.trunc() as i64)
}

fn scientific(n: f64) -> String {
    let s = format!("{n:.2E}");
    match s.split_once('E') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}E+{exp}"),
        _ => s,
    }
}
