//! Time utilities: minute formatting and clock-text parsing.

/// Render a non-negative minute count as `H:MM`.
/// Hours are unbounded, minutes are zero-padded, nothing is rounded.
pub fn format_minutes(mins: i64) -> String {
    let hours = mins / 60;
    format!("{}:{:02}", hours, mins - hours * 60)
}

/// Parse a clock-like duration text (`H:MM` or `H:MM:SS`) into whole minutes.
/// Seconds are truncated.
pub fn parse_clock_minutes(s: &str) -> Option<i64> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let nums: Vec<i64> = parts
        .iter()
        .map(|p| {
            if p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()) {
                None
            } else {
                p.parse::<i64>().ok()
            }
        })
        .collect::<Option<Vec<_>>>()?;

    if nums[1] >= 60 || nums.get(2).is_some_and(|s| *s >= 60) {
        return None;
    }

    Some(nums[0] * 60 + nums[1])
}

/// Parse an ISO-8601 duration (`PT00H15M00S`, `P1DT2H`, `PT15M30.5S`)
/// into seconds. Year and month parts are not accepted.
pub fn parse_iso_duration_seconds(s: &str) -> Option<f64> {
    let rest = s.trim().strip_prefix('P')?;
    let (date_part, time_part) = match rest.split_once('T') {
        Some((d, t)) => (d, Some(t)),
        None => (rest, None),
    };

    let mut secs = 0.0;
    let mut any = false;

    if !date_part.is_empty() {
        let days = date_part.strip_suffix('D')?;
        secs += parse_component(days)? * 86_400.0;
        any = true;
    }

    if let Some(t) = time_part {
        let mut num = String::new();
        for c in t.chars() {
            let factor = match c {
                'H' => 3_600.0,
                'M' => 60.0,
                'S' => 1.0,
                _ => {
                    num.push(c);
                    continue;
                }
            };
            secs += parse_component(&num)? * factor;
            num.clear();
            any = true;
        }
        if !num.is_empty() {
            return None;
        }
    }

    any.then_some(secs)
}

fn parse_component(s: &str) -> Option<f64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    s.parse::<f64>().ok()
}
