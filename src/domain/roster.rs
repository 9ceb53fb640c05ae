//! Roster: the fixed participant list, ordered by an accent- and case-insensitive key.

use crate::domain::{DomainError, Participant};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Collation key: lowercase, canonically decomposed, combining marks removed.
/// "Ádám" and "adam" share the key "adam". Accents never decide order on their own:
/// "Réka" sorts before "Reni" because the keys compare as "reka" < "reni".
pub fn collation_key(name: &str) -> String {
    name.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Builds the sorted roster. Names equal under the collation key keep their input order.
    pub fn new<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut keyed = Vec::new();
        for name in names {
            let name: String = name.into();
            if !seen.insert(name.clone()) {
                return Err(DomainError::DuplicateParticipant(name));
            }
            keyed.push((collation_key(&name), Participant::new(name)));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(Self {
            participants: keyed.into_iter().map(|(_, p)| p).collect(),
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn contains(&self, participant: &Participant) -> bool {
        self.participants.contains(participant)
    }

    /// Looks a participant up by exact display name.
    pub fn find(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.as_str() == name)
    }
}
