pub mod duration;
pub mod tokens;

pub use duration::{classify, range_of, range_of_name, BucketRange, DurationBucket, UnknownBucket};
