use rustc_hash::FxHashMap;
use spirit_dns_application::ports::ScoredMember;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Total order over scores so they can key a `BTreeSet`.
#[derive(Debug, Clone, Copy)]
struct Score(f64);

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Members of one key, indexed by member and by (score, member).
#[derive(Debug, Default)]
pub(super) struct SortedSet {
    scores: FxHashMap<String, f64>,
    ordered: BTreeSet<(Score, String)>,
}

impl SortedSet {
    pub(super) fn len(&self) -> usize {
        self.scores.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Inserts or re-scores `member`.
    pub(super) fn insert(&mut self, member: String, score: f64) {
        if let Some(old) = self.scores.insert(member.clone(), score) {
            self.ordered.remove(&(Score(old), member.clone()));
        }
        self.ordered.insert((Score(score), member));
    }

    /// Members with score `>= min`, lowest score first.
    pub(super) fn range_from(&self, min: f64) -> Vec<ScoredMember> {
        self.ordered
            .range((Score(min), String::new())..)
            .map(|(score, member)| ScoredMember {
                member: member.clone(),
                score: score.0,
            })
            .collect()
    }

    /// Drops members with score `<= max`.
    pub(super) fn remove_up_to(&mut self, max: f64) -> u64 {
        let expired: Vec<(Score, String)> = self
            .ordered
            .iter()
            .take_while(|(score, _)| score.0.total_cmp(&max).is_le())
            .cloned()
            .collect();

        for entry in &expired {
            self.ordered.remove(entry);
            self.scores.remove(&entry.1);
        }
        expired.len() as u64
    }
}
