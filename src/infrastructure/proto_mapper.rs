// Conversions between chrono and the protobuf well-known types
use chrono::{DateTime, Utc};
use prost_types::Timestamp;

pub fn datetime_to_timestamp(dt: &DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

/// Wire timestamps are UTC seconds since the epoch. A missing or out of range
/// timestamp maps to the epoch, which is what an unset field means on the wire.
pub fn timestamp_to_datetime(ts: Option<&Timestamp>) -> DateTime<Utc> {
    ts.and_then(|ts| {
        let nanos = u32::try_from(ts.nanos).ok()?;
        DateTime::from_timestamp(ts.seconds, nanos)
    })
    .unwrap_or(DateTime::UNIX_EPOCH)
}
