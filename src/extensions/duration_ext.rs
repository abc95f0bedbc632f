use chrono::TimeDelta;

pub trait ToHms {
    fn to_hms(&self) -> String;
}

impl ToHms for TimeDelta {
    /// Renders the duration as `HH:MM:SS`. The hours field widens past two
    /// digits instead of wrapping; negative durations clamp to zero.
    fn to_hms(&self) -> String {
        let total_seconds = self.num_seconds().max(0);
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, "00:00:00")]
    #[case(59, "00:00:59")]
    #[case(61, "00:01:01")]
    #[case(3661, "01:01:01")]
    #[case(86399, "23:59:59")]
    #[case(360000, "100:00:00")]
    fn formats_seconds_as_hms(#[case] seconds: i64, #[case] expected: &str) {
        assert_eq!(TimeDelta::seconds(seconds).to_hms(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(61)]
    #[case(3661)]
    #[case(360000)]
    fn formatted_value_parses_back_to_the_input(#[case] seconds: i64) {
        let formatted = TimeDelta::seconds(seconds).to_hms();

        let parts: Vec<i64> = formatted.split(':').map(|p| p.parse().unwrap()).collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], seconds);
    }

    #[test]
    fn clamps_negative_durations_to_zero() {
        assert_eq!(TimeDelta::seconds(-5).to_hms(), "00:00:00");
    }
}
