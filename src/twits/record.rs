// ABOUTME: Participant records and the fixed twits participant mapping
// ABOUTME: Builds the five-entry demonstration dataset published into rendering contexts

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const NOT_KNOWN: &str = "not known";

/// Descriptive record for one contestant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    distinguishing_fact: String,
    notable_incident: String,
    result_label: String,
}

impl ParticipantRecord {
    pub fn new(
        distinguishing_fact: impl Into<String>,
        notable_incident: impl Into<String>,
        result_label: impl Into<String>,
    ) -> Self {
        Self {
            distinguishing_fact: distinguishing_fact.into(),
            notable_incident: notable_incident.into(),
            result_label: result_label.into(),
        }
    }

    pub fn distinguishing_fact(&self) -> &str {
        &self.distinguishing_fact
    }

    pub fn notable_incident(&self) -> &str {
        &self.notable_incident
    }

    pub fn result_label(&self) -> &str {
        &self.result_label
    }
}

/// Contestant name to record
pub type ParticipantMapping = BTreeMap<String, ParticipantRecord>;

/// Build a fresh copy of the participant mapping
pub fn participants() -> ParticipantMapping {
    [
        (
            "Vivian Smith-Smythe-Smith",
            "has an O-level in chemo-hygiene",
            "kicking a beggar",
        ),
        (
            "Simon Zinc-Trumpet-Harris",
            "married to a very attractive table lamp",
            "being shot by Nigel",
        ),
        (
            "Nigel Incubator-Jones",
            "his best friend is a tree, and in his spare time he's a stockbroker",
            "shooting Simon",
        ),
        (
            "Gervaise Brook-Hamster",
            "is in the wine trade",
            "shooting himself",
        ),
        (
            "Oliver St John Mollusc",
            "Harrow and the Guards, thought by many to be this year's outstanding twit",
            "running himself over with a car",
        ),
    ]
    .into_iter()
    .map(|(name, fact, incident)| {
        (
            name.to_string(),
            ParticipantRecord::new(fact, incident, NOT_KNOWN),
        )
    })
    .collect()
}
