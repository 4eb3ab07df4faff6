/// Signed to-par parser for upstream display values.
///
/// "E", empty, and unparseable input all map to 0: upstream uses "E" for
/// even par, and the same zero stands in for absent data. Consumers that
/// need "no data yet" read the textual fields, which keep a "-" placeholder
/// instead of a zero.
#[must_use]
pub fn parse_score(text: &str) -> i32 {
    if text.is_empty() || text == "E" {
        return 0;
    }
    text.trim_start_matches('+').parse().unwrap_or(0)
}

/// Inverse of `parse_score` for display: 0 -> "E", positive carries an
/// explicit '+'.
#[must_use]
pub fn format_score(score: i32) -> String {
    if score == 0 {
        "E".to_string()
    } else if score > 0 {
        format!("+{score}")
    } else {
        score.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_representative_range() {
        for n in -20..=20 {
            assert_eq!(parse_score(&format_score(n)), n);
        }
    }

    #[test]
    fn even_par_symmetry() {
        assert_eq!(parse_score("E"), 0);
        assert_eq!(format_score(0), "E");
    }

    #[test]
    fn absent_and_garbage_default_to_zero() {
        assert_eq!(parse_score(""), 0);
        assert_eq!(parse_score("WD"), 0);
        assert_eq!(parse_score("+3"), 3);
        assert_eq!(parse_score("-12"), -12);
    }
}
