use crate::consts::{ANSWER_COUNT, STATEMENTS_PER_BLOCK, STATEMENT_COUNT};
use crate::error::{DfResult, DiscForgeError};
use crate::scorer::types::StylePair;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One pick from a forced-choice block, in any of the accepted spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// `A`..`D`, case-insensitive.
    Letter(char),
    /// `1`..`4`, mapped to `A`..`D`.
    Ordinal(u8),
    /// 1-based statement id, used as-is instead of being derived from position.
    StatementId(u16),
}

impl Answer {
    /// Statement id this answer marks when it sits at `index` in the sheet.
    pub fn statement_id(self, index: usize) -> DfResult<usize> {
        let invalid = |reason: String| DiscForgeError::InvalidAnswerElement { index, reason };
        match self {
            Answer::Letter(c) => match c.to_ascii_uppercase() {
                'A' => Ok(block_statement(index, 0)),
                'B' => Ok(block_statement(index, 1)),
                'C' => Ok(block_statement(index, 2)),
                'D' => Ok(block_statement(index, 3)),
                other => Err(invalid(format!("'{}' is not one of A, B, C, D", other))),
            },
            Answer::Ordinal(n) if (1..=4).contains(&n) => {
                Ok(block_statement(index, (n - 1) as usize))
            }
            Answer::Ordinal(n) => Err(invalid(format!("ordinal {} is outside 1..=4", n))),
            Answer::StatementId(id) if (1..=STATEMENT_COUNT).contains(&(id as usize)) => {
                Ok(id as usize)
            }
            Answer::StatementId(id) => Err(invalid(format!(
                "statement id {} is outside 1..={}",
                id, STATEMENT_COUNT
            ))),
        }
    }
}

impl FromStr for Answer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Answer::Letter(c)),
            _ => t
                .parse::<u8>()
                .map(Answer::Ordinal)
                .map_err(|_| format!("unrecognized answer '{}'", s)),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Letter(c) => write!(f, "{}", c),
            Answer::Ordinal(n) => write!(f, "{}", n),
            Answer::StatementId(id) => write!(f, "#{}", id),
        }
    }
}

/// `floor(index / 2) * 4 + 1 + offset`: both picks of a block share its four statements.
#[inline]
pub fn block_statement(index: usize, offset: usize) -> usize {
    (index / 2) * STATEMENTS_PER_BLOCK + 1 + offset
}

/// Which statements of the sheet were picked for one style, by statement id.
#[derive(Clone, PartialEq, Eq)]
pub struct PresenceVector {
    flags: [bool; STATEMENT_COUNT],
}

impl Default for PresenceVector {
    fn default() -> Self {
        Self {
            flags: [false; STATEMENT_COUNT],
        }
    }
}

impl fmt::Debug for PresenceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresenceVector")
            .field("set", &self.statement_ids().collect::<Vec<_>>())
            .finish()
    }
}

impl PresenceVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a vector from 0/1 flags, slot 0 being statement 1. Any non-zero
    /// flag counts as set; flags past slot 95 are ignored.
    pub fn from_flags(flags: &[u8]) -> Self {
        let mut v = Self::new();
        for (slot, &flag) in flags.iter().take(STATEMENT_COUNT).enumerate() {
            v.flags[slot] = flag != 0;
        }
        v
    }

    /// Marks a 1-based statement id. Returns false for ids outside 1..=96.
    pub fn set(&mut self, statement_id: usize) -> bool {
        match statement_id.checked_sub(1).and_then(|s| self.flags.get_mut(s)) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    /// Reads a 0-based slot.
    #[inline]
    pub fn slot(&self, slot: usize) -> bool {
        self.flags.get(slot).copied().unwrap_or(false)
    }

    pub fn is_set(&self, statement_id: usize) -> bool {
        statement_id
            .checked_sub(1)
            .map(|s| self.slot(s))
            .unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    pub fn statement_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, f)| **f)
            .map(|(slot, _)| slot + 1)
    }

    pub fn to_flags(&self) -> Vec<u8> {
        self.flags.iter().map(|&f| u8::from(f)).collect()
    }
}

pub type PresenceVectors = StylePair<PresenceVector>;

/// Turns a 48-answer sheet into the two presence vectors.
///
/// Even positions are "most like me" picks and feed `response`; odd positions
/// are "least like me" picks and feed `natural`.
pub fn normalize(answers: &[Answer]) -> DfResult<PresenceVectors> {
    if answers.len() != ANSWER_COUNT {
        return Err(DiscForgeError::InvalidAnswerCount {
            expected: ANSWER_COUNT,
            actual: answers.len(),
        });
    }

    let mut out = PresenceVectors::default();
    for (index, answer) in answers.iter().enumerate() {
        let id = answer.statement_id(index)?;
        if index % 2 == 0 {
            out.response.set(id);
        } else {
            out.natural.set(id);
        }
    }
    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Most,
    Least,
}

/// A pick carrying its own statement id and selection, as the quiz page submits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementSelection {
    pub statement_id: i64,
    pub selection: Selection,
}

/// Lenient variant of [`normalize`] for explicit selections: any count is
/// accepted and ids outside 1..=96 are skipped.
pub fn normalize_selections(selections: &[StatementSelection]) -> PresenceVectors {
    let mut out = PresenceVectors::default();
    for sel in selections {
        let Ok(id) = usize::try_from(sel.statement_id) else {
            continue;
        };
        match sel.selection {
            Selection::Most => out.response.set(id),
            Selection::Least => out.natural.set(id),
        };
    }
    out
}
