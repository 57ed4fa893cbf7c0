/// Percentage of `part` within `total`, rounded to the nearest integer.
///
/// Convention: rounding is to nearest (half away from zero), and the result
/// is clamped to 100 when `part` exceeds `total`. A zero `total` yields 0
/// rather than a division error, so "no PRs yet" renders as 0%.
pub fn percent(total: u32, part: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = (part as f64 / total as f64 * 100.0).round() as u32;
    pct.min(100)
}
