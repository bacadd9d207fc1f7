use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Duration categories used by the search filter, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationBucket {
    Quick,
    Short,
    Medium,
    DeepDive,
}

/// Inclusive minute range. `high == None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketRange {
    pub low: u32,
    pub high: Option<u32>,
}

impl BucketRange {
    pub fn contains(&self, minutes: i64) -> bool {
        minutes >= i64::from(self.low) && self.high.map_or(true, |h| minutes <= i64::from(h))
    }
}

impl fmt::Display for BucketRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(h) => write!(f, "{}-{}", self.low, h),
            None => write!(f, "{}+", self.low),
        }
    }
}

/// The partition of non-negative minutes. Ordered, contiguous, no overlap.
pub const BUCKET_TABLE: [(DurationBucket, BucketRange); 4] = [
    (DurationBucket::Quick, BucketRange { low: 0, high: Some(9) }),
    (DurationBucket::Short, BucketRange { low: 10, high: Some(29) }),
    (DurationBucket::Medium, BucketRange { low: 30, high: Some(59) }),
    (DurationBucket::DeepDive, BucketRange { low: 60, high: None }),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown duration bucket '{0}' (expected one of: quick, short, medium, deep-dive)")]
pub struct UnknownBucket(pub String);

impl DurationBucket {
    pub const ALL: [DurationBucket; 4] = [
        DurationBucket::Quick,
        DurationBucket::Short,
        DurationBucket::Medium,
        DurationBucket::DeepDive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::Quick => "Quick",
            DurationBucket::Short => "Short",
            DurationBucket::Medium => "Medium",
            DurationBucket::DeepDive => "Deep Dive",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            DurationBucket::Quick => "quick",
            DurationBucket::Short => "short",
            DurationBucket::Medium => "medium",
            DurationBucket::DeepDive => "deep-dive",
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DurationBucket {
    type Err = UnknownBucket;

    /// Accepts the label or the slug, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        DurationBucket::ALL
            .into_iter()
            .find(|b| b.slug().eq_ignore_ascii_case(needle) || b.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownBucket(s.to_string()))
    }
}

/// Maps minutes to a bucket. Absent and negative durations have no bucket.
pub fn classify(minutes: Option<i64>) -> Option<DurationBucket> {
    let m = minutes?;
    BUCKET_TABLE
        .iter()
        .find(|(_, range)| range.contains(m))
        .map(|(bucket, _)| *bucket)
}

pub fn range_of(bucket: DurationBucket) -> BucketRange {
    // Table rows follow declaration order.
    BUCKET_TABLE[bucket as usize].1
}

/// Range lookup by name, for callers holding a bucket as text.
pub fn range_of_name(name: &str) -> Result<BucketRange, UnknownBucket> {
    name.parse::<DurationBucket>().map(range_of)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_whole_domain_edges() {
        for d in 0..=9 {
            assert_eq!(classify(Some(d)), Some(DurationBucket::Quick), "d={d}");
        }
        for d in 10..=29 {
            assert_eq!(classify(Some(d)), Some(DurationBucket::Short), "d={d}");
        }
        for d in 30..=59 {
            assert_eq!(classify(Some(d)), Some(DurationBucket::Medium), "d={d}");
        }
        for d in [60, 61, 240, i64::MAX] {
            assert_eq!(classify(Some(d)), Some(DurationBucket::DeepDive), "d={d}");
        }
    }

    #[test]
    fn test_classify_absent_and_negative() {
        assert_eq!(classify(None), None);
        assert_eq!(classify(Some(-1)), None);
        assert_eq!(classify(Some(i64::MIN)), None);
    }

    #[test]
    fn test_range_of_each_bucket() {
        assert_eq!(range_of(DurationBucket::Quick), BucketRange { low: 0, high: Some(9) });
        assert_eq!(range_of(DurationBucket::Short), BucketRange { low: 10, high: Some(29) });
        assert_eq!(range_of(DurationBucket::Medium), BucketRange { low: 30, high: Some(59) });
        assert_eq!(range_of(DurationBucket::DeepDive), BucketRange { low: 60, high: None });
    }

    #[test]
    fn test_table_partitions_without_gaps() {
        for (i, bucket) in DurationBucket::ALL.into_iter().enumerate() {
            assert_eq!(BUCKET_TABLE[i].0, bucket);
        }
        assert_eq!(BUCKET_TABLE[0].1.low, 0);
        for pair in BUCKET_TABLE.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            assert!(prev.0 < next.0);
            assert_eq!(prev.1.high.map(|h| h + 1), Some(next.1.low));
        }
        assert_eq!(BUCKET_TABLE[BUCKET_TABLE.len() - 1].1.high, None);
    }

    #[test]
    fn test_range_and_classify_agree() {
        for bucket in DurationBucket::ALL {
            let r = range_of(bucket);
            assert_eq!(classify(Some(i64::from(r.low))), Some(bucket));
            if let Some(h) = r.high {
                assert_eq!(classify(Some(i64::from(h))), Some(bucket));
            }
        }
    }

    #[test]
    fn test_parse_accepts_label_and_slug() {
        assert_eq!("Deep Dive".parse::<DurationBucket>(), Ok(DurationBucket::DeepDive));
        assert_eq!("deep-dive".parse::<DurationBucket>(), Ok(DurationBucket::DeepDive));
        assert_eq!(" QUICK ".parse::<DurationBucket>(), Ok(DurationBucket::Quick));
    }

    #[test]
    fn test_range_of_unknown_name_is_rejected() {
        let err = range_of_name("marathon").unwrap_err();
        assert_eq!(err, UnknownBucket("marathon".into()));
        assert!(err.to_string().contains("marathon"));
    }

    #[test]
    fn test_range_display() {
        assert_eq!(range_of(DurationBucket::Short).to_string(), "10-29");
        assert_eq!(range_of(DurationBucket::DeepDive).to_string(), "60+");
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&DurationBucket::DeepDive).unwrap();
        assert_eq!(json, "\"deep-dive\"");
        let back: DurationBucket = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(back, DurationBucket::Medium);
    }
}
