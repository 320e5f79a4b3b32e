use super::Rejection;
use crate::processor::Action;
use anchor_lang::prelude::*;
use std::result::Result;
use sha2::{Digest, Sha256};

pub type Hash = [u8; 32];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitEntry {
    pub sequence: u64,
    pub action: Action,
    pub signer: Option<Pubkey>,
    /// Every address written by the commit and its new version.
    pub writes: Vec<(Pubkey, u64)>,
    pub digest: Hash,
}

/// Append-only record of committed units, each entry hashed over its
/// predecessor.
#[derive(Clone, Debug, Default)]
pub struct CommitLog {
    entries: Vec<CommitEntry>,
}

impl CommitLog {
    pub fn entries(&self) -> &[CommitEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn head(&self) -> Hash {
        self.entries.last().map_or([0; 32], |entry| entry.digest)
    }

    /// Builds the next entry without appending it.
    pub(crate) fn next_entry(
        &self,
        action: Action,
        signer: Option<Pubkey>,
        writes: Vec<(Pubkey, u64)>,
    ) -> Result<CommitEntry, Rejection> {
        let sequence = self.entries.len() as u64;
        let digest = chain_digest(&self.head(), sequence, &action, signer.as_ref(), &writes)?;
        Ok(CommitEntry {
            sequence,
            action,
            signer,
            writes,
            digest,
        })
    }

    pub(crate) fn append(&mut self, entry: CommitEntry) {
        self.entries.push(entry);
    }

    /// Recomputes the whole chain.
    pub fn verify(&self) -> bool {
        let mut head = [0; 32];
        for (sequence, entry) in self.entries.iter().enumerate() {
            let digest = chain_digest(
                &head,
                sequence as u64,
                &entry.action,
                entry.signer.as_ref(),
                &entry.writes,
            );
            match digest {
                Ok(digest) if digest == entry.digest && entry.sequence == sequence as u64 => {
                    head = digest;
                }
                _ => return false,
            }
        }
        true
    }
}

fn chain_digest(
    previous: &Hash,
    sequence: u64,
    action: &Action,
    signer: Option<&Pubkey>,
    writes: &[(Pubkey, u64)],
) -> Result<Hash, Rejection> {
    let mut encoded = Vec::new();
    action
        .serialize(&mut encoded)
        .map_err(|err| Rejection::Encoding(err.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(previous);
    hasher.update(sequence.to_le_bytes());
    hasher.update(&encoded);
    hasher.update(signer.map_or([0; 32], |signer| signer.to_bytes()));
    for (address, version) in writes {
        hasher.update(address.as_ref());
        hasher.update(version.to_le_bytes());
    }
    Ok(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Side;

    fn log_with(actions: &[Action]) -> CommitLog {
        let mut log = CommitLog::default();
        for action in actions {
            let entry = log
                .next_entry(*action, None, vec![(Pubkey::new_unique(), 1)])
                .unwrap();
            log.append(entry);
        }
        log
    }

    #[test]
    fn empty_log_verifies() {
        let log = CommitLog::default();
        assert!(log.is_empty());
        assert_eq!(log.head(), [0; 32]);
        assert!(log.verify());
    }

    #[test]
    fn entries_chain_on_previous_head() {
        let log = log_with(&[
            Action::CreateRound { round_id: 0 },
            Action::Pull {
                round_id: 0,
                side: Side::Left,
            },
        ]);
        assert_eq!(log.len(), 2);
        assert_ne!(log.entries()[0].digest, log.entries()[1].digest);
        assert_eq!(log.head(), log.entries()[1].digest);
        assert!(log.verify());
    }

    #[test]
    fn tampering_breaks_the_chain() {
        let mut log = log_with(&[
            Action::CreateRound { round_id: 0 },
            Action::Pull {
                round_id: 0,
                side: Side::Right,
            },
        ]);
        log.entries[0].action = Action::Pull {
            round_id: 0,
            side: Side::Left,
        };
        assert!(!log.verify());
    }
}
