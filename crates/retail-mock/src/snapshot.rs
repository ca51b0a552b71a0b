use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::data::dates::Period;
use crate::error::MockResult;

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize)]
pub struct SnapshotContext {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub today: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub digest: String,
}

/// CLI output envelope. `digest` covers the payload only, so two runs with the
/// same seed and `today` produce the same digest.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot<T> {
    pub context: SnapshotContext,
    pub payload: T,
}

impl<T: Serialize> Snapshot<T> {
    pub fn new(
        today: NaiveDate,
        period: Option<Period>,
        offset: Option<i32>,
        seed: Option<u64>,
        payload: T,
    ) -> MockResult<Self> {
        let digest = payload_digest(&payload)?;
        Ok(Self {
            context: SnapshotContext {
                schema_version: SNAPSHOT_SCHEMA_VERSION,
                generated_at: Utc::now(),
                today,
                period,
                offset,
                seed,
                digest,
            },
            payload,
        })
    }

    pub fn to_json(&self, pretty: bool) -> MockResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

pub fn payload_digest<T: Serialize>(payload: &T) -> MockResult<String> {
    let bytes = serde_json::to_vec(payload)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("sha256:{digest:x}"))
}
