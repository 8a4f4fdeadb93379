// File: crates/texfig-core/src/grid.rs
// Summary: Grid/tick layout helpers: linspace, nice major ticks and minor subdivisions.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Spacing of "nice" ticks covering `[min, max]` with at most `max_ticks` intervals.
/// Steps are 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_step(min: f64, max: f64, max_ticks: usize) -> f64 {
    let span = (max - min).abs();
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let raw = span / max_ticks.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&s| norm <= s + 1e-9)
        .unwrap_or(10.0);
    nice * mag
}

/// Major tick positions inside `[min, max]` (inclusive, with a small tolerance).
pub fn major_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(lo, hi, max_ticks);
    let eps = step * 1e-9;
    let first = (lo / step).ceil() * step;
    let mut out = Vec::new();
    let mut k = 0usize;
    loop {
        let v = first + step * k as f64;
        if v > hi + eps || k > 1000 { break; }
        // snap onto the step grid; -0.0 becomes 0.0
        let v = match (v / step).round() {
            n if n == 0.0 => 0.0,
            n => n * step,
        };
        out.push(v);
        k += 1;
    }
    out
}

/// Number of minor intervals between majors: 4 for 2/2.5-type steps, 5 otherwise.
pub fn minor_divisions(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() { return 5; }
    let norm = step / 10f64.powf(step.log10().floor());
    if (norm - 2.0).abs() < 1e-6 || (norm - 2.5).abs() < 1e-6 { 4 } else { 5 }
}

/// Minor tick positions between (and just outside) the given majors, clipped to `[min, max]`.
pub fn minor_ticks(majors: &[f64], min: f64, max: f64) -> Vec<f64> {
    if majors.len() < 2 { return Vec::new(); }
    let step = majors[1] - majors[0];
    let n = minor_divisions(step);
    let minor = step / n as f64;
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let start = majors[0] - step;
    let count = (majors.len() + 1) * n;
    (0..=count)
        .map(|i| start + minor * i as f64)
        .filter(|v| *v >= lo - minor * 1e-6 && *v <= hi + minor * 1e-6)
        .filter(|v| majors.iter().all(|m| (m - v).abs() > minor * 1e-3))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(0.0, 10.0, 5), 2.0);
        assert_eq!(nice_step(0.0, 1.0, 4), 0.25);
        assert_eq!(nice_step(0.0, 20_000.0, 4), 5000.0);
    }

    #[test]
    fn majors_cover_range() {
        let t = major_ticks(0.0, 20.0, 5);
        assert_eq!(t, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn majors_sit_on_step_grid() {
        let t = major_ticks(-0.7, 0.9, 8);
        let step = nice_step(-0.7, 0.9, 8);
        assert!(t.contains(&0.0));
        assert!(t.iter().all(|v| (v / step).round() * step == *v));
        assert!(t.iter().all(|v| !(*v == 0.0 && v.is_sign_negative())));
    }

    #[test]
    fn minors_skip_majors() {
        let majors = major_ticks(0.0, 10.0, 5);
        let minors = minor_ticks(&majors, 0.0, 10.0);
        // step 2 -> 4 subdivisions of 0.5
        assert!(minors.iter().any(|v| (v - 0.5).abs() < 1e-9));
        assert!(!minors.iter().any(|v| (v - 2.0).abs() < 1e-9));
        assert!(minors.iter().all(|v| *v >= 0.0 && *v <= 10.0));
    }
}
