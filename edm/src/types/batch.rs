use std::fmt;

use crate::types::{AffinityRow, ConsentEventRow, ConsumerRow, OnlineEngagementRow};

/// Names the four target extracts of the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractKind {
    Consumer,
    ConsentEvent,
    OnlineEngagement,
    Affinity,
}

impl ExtractKind {
    /// All extract kinds in delivery order.
    pub const ALL: [ExtractKind; 4] = [
        ExtractKind::Consumer,
        ExtractKind::ConsentEvent,
        ExtractKind::OnlineEngagement,
        ExtractKind::Affinity,
    ];

    /// Returns the table name of this extract in the target data model.
    pub fn table_name(&self) -> &'static str {
        match self {
            ExtractKind::Consumer => "Consumer",
            ExtractKind::ConsentEvent => "Consent_Event",
            ExtractKind::OnlineEngagement => "Online_Engagement",
            ExtractKind::Affinity => "Affinity",
        }
    }
}

impl fmt::Display for ExtractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// The four ordered row collections produced by one pipeline run.
///
/// Rows keep first-seen record order within each extract so repeated runs on
/// the same input produce byte-identical output order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractBatch {
    pub consumers: Vec<ConsumerRow>,
    pub consent_events: Vec<ConsentEventRow>,
    pub online_engagements: Vec<OnlineEngagementRow>,
    pub affinities: Vec<AffinityRow>,
}

impl ExtractBatch {
    /// Appends all rows of `other` to this batch, preserving order.
    pub fn merge(&mut self, other: ExtractBatch) {
        self.consumers.extend(other.consumers);
        self.consent_events.extend(other.consent_events);
        self.online_engagements.extend(other.online_engagements);
        self.affinities.extend(other.affinities);
    }

    /// Returns the number of rows held for the given extract.
    pub fn len(&self, kind: ExtractKind) -> usize {
        match kind {
            ExtractKind::Consumer => self.consumers.len(),
            ExtractKind::ConsentEvent => self.consent_events.len(),
            ExtractKind::OnlineEngagement => self.online_engagements.len(),
            ExtractKind::Affinity => self.affinities.len(),
        }
    }

    /// Returns true when no extract holds any rows.
    pub fn is_empty(&self) -> bool {
        ExtractKind::ALL.iter().all(|kind| self.len(*kind) == 0)
    }
}
