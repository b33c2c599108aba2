/// Per-activity submission settings.
///
/// The encrypted service-account blob and its fixed symmetric key are carried
/// here explicitly instead of living as package globals; `report::submit`
/// receives the profile and hands the pair to the decryption step.
pub struct ActivityProfile {
    pub name: &'static str,
    /// GCP project owning the submission topic.
    pub project: &'static str,
    /// Pub/Sub topic graded submissions are published to.
    pub topic: &'static str,
    /// 32-byte AES-256 key for the embedded credential.
    pub key: &'static str,
    /// base64(nonce || ciphertext || tag), embedded at compile time.
    pub ciphertext: &'static str,
}

const PROJECT: &str = "sds-grader";

/// Topics for activities 1, 3 and 5 can be swapped per course run at build
/// time; 2 and 4 are pinned to their original topic names.
const fn topic_or(override_topic: Option<&'static str>, fallback: &'static str) -> &'static str {
    match override_topic {
        Some(topic) => topic,
        None => fallback,
    }
}

pub const ACTIVITY1: ActivityProfile = ActivityProfile {
    name: "activity1",
    project: PROJECT,
    topic: topic_or(option_env!("GRADER_TOPIC_ACTIVITY1"), "activity1"),
    key: "http://localhosthttp://localhost",
    ciphertext: include_str!("../credentials/activity1.json.enc"),
};

pub const ACTIVITY2: ActivityProfile = ActivityProfile {
    name: "activity2",
    project: PROJECT,
    topic: "activity2_cp",
    key: "graderhttp://localhostsds-grader",
    ciphertext: include_str!("../credentials/activity2.json.enc"),
};

pub const ACTIVITY3: ActivityProfile = ActivityProfile {
    name: "activity3",
    project: PROJECT,
    topic: topic_or(option_env!("GRADER_TOPIC_ACTIVITY3"), "activity3"),
    key: "http://localhost:8000/notificati",
    ciphertext: include_str!("../credentials/activity3.json.enc"),
};

pub const ACTIVITY4: ActivityProfile = ActivityProfile {
    name: "activity4",
    project: PROJECT,
    topic: "activity4",
    key: "http://localhosthttp://localhost",
    ciphertext: include_str!("../credentials/activity4.json.enc"),
};

pub const ACTIVITY5: ActivityProfile = ActivityProfile {
    name: "activity5",
    project: PROJECT,
    topic: topic_or(option_env!("GRADER_TOPIC_ACTIVITY5"), "activity5"),
    key: "http://localhosthttp://localhost",
    ciphertext: include_str!("../credentials/activity5.json.enc"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::decrypt_credential;
    use crate::pubsub::ServiceAccountKey;

    const ALL: &[&ActivityProfile] = &[
        &ACTIVITY1,
        &ACTIVITY2,
        &ACTIVITY3,
        &ACTIVITY4,
        &ACTIVITY5,
    ];

    #[test]
    fn test_every_key_is_aes256_sized() {
        for profile in ALL {
            assert_eq!(profile.key.len(), 32, "{}", profile.name);
        }
    }

    #[test]
    fn test_every_blob_decrypts_to_a_service_account() {
        for profile in ALL {
            let plaintext = decrypt_credential(profile.key.as_bytes(), profile.ciphertext)
                .unwrap_or_else(|e| panic!("{}: {e:#}", profile.name));
            let key: ServiceAccountKey = serde_json::from_slice(&plaintext)
                .unwrap_or_else(|e| panic!("{}: {e}", profile.name));
            assert!(key.client_email.ends_with(".iam.gserviceaccount.com"));
            assert!(key.private_key.contains("PRIVATE KEY"));
        }
    }

    #[test]
    fn test_blob_rejects_a_foreign_key() {
        assert!(
            decrypt_credential(ACTIVITY2.key.as_bytes(), ACTIVITY1.ciphertext).is_err()
        );
    }

    #[test]
    fn test_topics_match_course_configuration() {
        assert_eq!(ACTIVITY2.topic, "activity2_cp");
        assert_eq!(ACTIVITY4.topic, "activity4");
    }
}
