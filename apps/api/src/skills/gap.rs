//! Gap Calculator — pure derivation of gap rows from per-skill levels.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_LEVEL: u8 = 5;

/// Self-assessed proficiency for one skill on a 0–5 scale.
/// `target >= current` is enforced by `SkillLevel::new`, not re-checked on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub current: u8,
    pub target: u8,
}

#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("current level {0} is outside 0..=5")]
    CurrentOutOfRange(u8),

    #[error("target level {target} must be between current level {current} and 5")]
    TargetOutOfRange { current: u8, target: u8 },
}

impl SkillLevel {
    pub fn new(current: u8, target: u8) -> Result<Self, LevelError> {
        if current > MAX_LEVEL {
            return Err(LevelError::CurrentOutOfRange(current));
        }
        if target < current || target > MAX_LEVEL {
            return Err(LevelError::TargetOutOfRange { current, target });
        }
        Ok(Self { current, target })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapRow {
    pub skill: String,
    pub current: u8,
    pub target: u8,
    /// target − current; negative only if the level invariant was bypassed.
    pub gap: i16,
}

/// One row per entry, in iteration order. No clamping.
pub fn compute_gaps<'a, S>(levels: impl IntoIterator<Item = (S, &'a SkillLevel)>) -> Vec<GapRow>
where
    S: AsRef<str>,
{
    levels
        .into_iter()
        .map(|(skill, level)| GapRow {
            skill: skill.as_ref().to_string(),
            current: level.current,
            target: level.target,
            gap: i16::from(level.target) - i16::from(level.current),
        })
        .collect()
}

/// Rows with a positive gap, widest first. Ties keep their input order.
pub fn widest_gaps(rows: &[GapRow], limit: usize) -> Vec<&GapRow> {
    let mut open: Vec<&GapRow> = rows.iter().filter(|r| r.gap > 0).collect();
    open.sort_by(|a, b| b.gap.cmp(&a.gap));
    open.truncate(limit);
    open
}
