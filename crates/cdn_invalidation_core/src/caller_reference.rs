use chrono::{DateTime, Utc};

const MAX_SUBSEC_NANOS: u32 = 999_999_999;

/// Derives the caller reference for an invalidation issued at `invoked_at`.
///
/// The reference is the epoch timestamp with its decimal point removed: whole
/// seconds followed by the zero-padded nanosecond fraction. The fraction has a
/// fixed width, so distinct instants always map to distinct references.
pub fn caller_reference(invoked_at: DateTime<Utc>) -> String {
    let seconds = invoked_at.timestamp();
    if seconds < 0 {
        return format!("0{:09}", 0);
    }

    // chrono folds leap seconds into the fraction
    let nanos = invoked_at.timestamp_subsec_nanos().min(MAX_SUBSEC_NANOS);
    format!("{seconds}{nanos:09}")
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn joins_seconds_and_padded_fraction() {
        let invoked_at = Utc.timestamp_opt(1_760_000_000, 1_500).unwrap();
        assert_eq!(caller_reference(invoked_at), "1760000000000001500");
    }

    #[test]
    fn contains_only_digits() {
        let reference = caller_reference(Utc::now());
        assert!(!reference.is_empty());
        assert!(reference.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn differs_for_instants_one_nanosecond_apart() {
        let first = Utc.timestamp_opt(1_760_000_000, 999_999_999).unwrap();
        let second = first + Duration::nanoseconds(1);

        assert_ne!(caller_reference(first), caller_reference(second));
    }

    #[test]
    fn fixed_width_fraction_avoids_ambiguous_concatenation() {
        let short_seconds = Utc.timestamp_opt(1, 100_000_000).unwrap();
        let long_seconds = Utc.timestamp_opt(11, 0).unwrap();

        assert_ne!(
            caller_reference(short_seconds),
            caller_reference(long_seconds)
        );
    }

    #[test]
    fn clamps_pre_epoch_instants() {
        let before_epoch = Utc.timestamp_opt(-5, 0).unwrap();
        assert_eq!(caller_reference(before_epoch), "0000000000");
    }
}
