use aws_lambda_events::event::s3::S3Event;
use serde_json::Value;

/// One object change from an S3 notification, kept for logging only.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectChange {
    pub event_name: Option<String>,
    pub bucket: Option<String>,
    pub key: Option<String>,
}

impl ObjectChange {
    pub fn location(&self) -> String {
        format!(
            "s3://{}/{}",
            self.bucket.as_deref().unwrap_or("?"),
            self.key.as_deref().unwrap_or("?")
        )
    }
}

/// Reads the payload as an S3 notification. Returns `None` when it is
/// anything else; the payload is never rejected.
pub fn object_changes(payload: &Value) -> Option<Vec<ObjectChange>> {
    let event: S3Event = serde_json::from_value(payload.clone()).ok()?;
    if event.records.is_empty() {
        return None;
    }

    Some(
        event
            .records
            .into_iter()
            .map(|record| ObjectChange {
                event_name: record.event_name,
                bucket: record.s3.bucket.name,
                key: record.s3.object.key,
            })
            .collect(),
    )
}
