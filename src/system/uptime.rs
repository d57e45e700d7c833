//! Uptime rendered as natural language.

/// Break `seconds` into units and join the nonzero ones, largest first.
///
/// Years are a flat 365 days and there is no month unit. Zero-valued units
/// are omitted entirely, so zero seconds yields an empty string.
pub fn humanize(seconds: u64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let years = days / 365;

    let mut out = String::new();
    push_unit(&mut out, years, "year");
    push_unit(&mut out, days % 365, "day");
    push_unit(&mut out, hours % 24, "hour");
    push_unit(&mut out, minutes % 60, "minute");
    push_unit(&mut out, seconds % 60, "second");
    out
}

fn push_unit(out: &mut String, value: u64, unit: &str) {
    if value == 0 {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    let plural = if value > 1 { "s" } else { "" };
    out.push_str(&format!("{} {}{}", value, unit, plural));
}
