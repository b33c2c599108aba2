use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;

use crate::profile::ActivityProfile;
use crate::{crypto, facts, prompt, pubsub};

/// Submission payload. Field names are fixed by the ingest pipeline's
/// BigQuery schema; do not rename them.
#[derive(Debug, Serialize)]
pub struct SubmissionRecord {
    pub timestamp: DateTime<Utc>,
    pub id: u64,
    pub name: String,
    pub host: String,
    pub user: String,
    pub os: String,
    pub version: String,
    pub uptime: u64,
    pub ip: String,
    pub pub_ip: String,
}

pub fn build_record(
    timestamp: DateTime<Utc>,
    student_id: u64,
    student_name: String,
    facts: facts::MachineFacts,
) -> SubmissionRecord {
    SubmissionRecord {
        timestamp,
        id: student_id,
        name: student_name,
        host: facts.host,
        user: facts.user,
        os: facts.os,
        version: facts.version,
        uptime: facts.uptime_secs,
        ip: facts.local_ip,
        pub_ip: facts.public_ip,
    }
}

/// Collect identity and machine facts, decrypt the activity credential, and
/// publish the graded submission. Any error here is fatal to the run.
pub async fn submit(
    client: &Client,
    started: DateTime<Utc>,
    profile: &ActivityProfile,
) -> Result<()> {
    println!("🎉 Looks good! Please enter your StudentID and Full name below");
    let (student_id, student_name) = prompt::collect_identity()?;
    let machine = facts::collect(client).await;

    let credential = crypto::decrypt_credential(profile.key.as_bytes(), profile.ciphertext)
        .context("failed to decrypt credential")?;
    let account = pubsub::parse_key(&credential)?;

    let record = build_record(started, student_id, student_name, machine);
    let data = serde_json::to_vec(&record).context("failed to serialize submission")?;

    let message_id = pubsub::publish(client, &account, profile.project, profile.topic, &data)
        .await
        .context("failed to publish submission")?;

    println!("💪 Successfully submitted. Your lucky number is {message_id}");
    println!("🎉🎉🎉 Congratulations! You have completed the activity 🎉🎉🎉");
    println!("⚠️ Don't forget! you still need to submit your assignment via MyCourseVille ⚠️");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_facts() -> facts::MachineFacts {
        facts::MachineFacts {
            host: "student-laptop".to_string(),
            user: "somchai".to_string(),
            os: "linux".to_string(),
            version: "22.04".to_string(),
            uptime_secs: 5400,
            local_ip: "192.168.1.20".to_string(),
            public_ip: "203.0.113.7".to_string(),
        }
    }

    #[test]
    fn test_record_serializes_with_ingest_field_names() {
        let timestamp = "2026-08-06T09:30:00Z".parse().unwrap();
        let record = build_record(timestamp, 6530000021, "สมชาย ใจดี".to_string(), sample_facts());
        let value = serde_json::to_value(&record).unwrap();

        for field in [
            "timestamp", "id", "name", "host", "user", "os", "version", "uptime", "ip", "pub_ip",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["id"], 6530000021u64);
        assert_eq!(value["uptime"], 5400);
        assert_eq!(value["pub_ip"], "203.0.113.7");
        assert!(value["timestamp"].as_str().unwrap().starts_with("2026-08-06T09:30:00"));
    }

    #[test]
    fn test_unresolved_facts_serialize_as_empty_strings() {
        let mut facts = sample_facts();
        facts.local_ip = String::new();
        facts.public_ip = String::new();
        let record = build_record(Utc::now(), 1, "a".to_string(), facts);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["ip"], "");
        assert_eq!(value["pub_ip"], "");
    }
}
