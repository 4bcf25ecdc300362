/// Human form of a whole-second duration: `45s`, `2m 05s`, `1h 00m`.
pub fn format_secs(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_secs() {
        assert_eq!(format_secs(0), "0s");
        assert_eq!(format_secs(23), "23s");
        assert_eq!(format_secs(125), "2m 05s");
        assert_eq!(format_secs(3600), "1h 00m");
        assert_eq!(format_secs(5430), "1h 30m");
    }
}
