//! Quests the player can take on and the log that tracks them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

const QUEST_COUNT: usize = 4;

/// A quest the player can take on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quest {
    /// The mysterious stranger's temple expedition (bought with the map).
    StrangersMap,
    /// Hunt the wolves threatening Moonhaven.
    WolfHunt,
    /// Gather rare herbs for the healer.
    HerbGathering,
    /// Deliver a package to Stonebridge.
    Delivery,
}

impl Quest {
    /// Every quest, in declaration order.
    pub const ALL: [Quest; QUEST_COUNT] = [
        Quest::StrangersMap,
        Quest::WolfHunt,
        Quest::HerbGathering,
        Quest::Delivery,
    ];

    /// Stable snake-case key for this quest.
    pub fn key(self) -> &'static str {
        match self {
            Quest::StrangersMap => "accepted_quest",
            Quest::WolfHunt => "wolf_quest",
            Quest::HerbGathering => "herb_quest",
            Quest::Delivery => "delivery_quest",
        }
    }

    /// Player-facing name, as recorded in the completed quest list.
    pub fn name(self) -> &'static str {
        match self {
            Quest::StrangersMap => "Stranger's Expedition",
            Quest::WolfHunt => "Wolf Hunting",
            Quest::HerbGathering => "Herb Quest",
            Quest::Delivery => "Delivery Quest",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Quest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quest {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Quest::ALL
            .into_iter()
            .find(|q| q.key().eq_ignore_ascii_case(needle) || q.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownQuest(s.to_string()))
    }
}

/// Progress of a single quest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestProgress {
    /// The player took the quest on.
    pub accepted: bool,
    /// The quest's objective was fulfilled.
    pub completed: bool,
}

impl QuestProgress {
    /// Accepted but not yet completed.
    pub fn is_active(self) -> bool {
        self.accepted && !self.completed
    }
}

/// Fixed-size record of progress for every [`Quest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestLog")]
pub struct QuestLog {
    progress: [QuestProgress; QUEST_COUNT],
}

#[derive(Deserialize)]
struct RawQuestLog {
    progress: [QuestProgress; QUEST_COUNT],
}

impl TryFrom<RawQuestLog> for QuestLog {
    type Error = CoreError;

    fn try_from(raw: RawQuestLog) -> CoreResult<Self> {
        let stray = Quest::ALL.into_iter().find(|q| {
            let p = raw.progress[q.index()];
            p.completed && !p.accepted
        });
        match stray {
            Some(quest) => Err(CoreError::InvalidState(format!(
                "quest \"{quest}\" completed without being accepted"
            ))),
            None => Ok(Self {
                progress: raw.progress,
            }),
        }
    }
}

impl QuestLog {
    /// Create a log with no quests accepted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress of a quest.
    pub fn progress(&self, quest: Quest) -> QuestProgress {
        self.progress[quest.index()]
    }

    /// Mark a quest accepted. Returns `true` if it was not accepted before.
    pub fn accept(&mut self, quest: Quest) -> bool {
        let entry = &mut self.progress[quest.index()];
        let newly = !entry.accepted;
        entry.accepted = true;
        newly
    }

    /// Mark a quest completed (and therefore accepted).
    ///
    /// Returns `true` only the first time, so rewards tied to completion are
    /// handed out once.
    pub fn complete(&mut self, quest: Quest) -> bool {
        let entry = &mut self.progress[quest.index()];
        let newly = !entry.completed;
        entry.accepted = true;
        entry.completed = true;
        newly
    }

    /// Check if a quest has been accepted.
    pub fn is_accepted(&self, quest: Quest) -> bool {
        self.progress(quest).accepted
    }

    /// Check if a quest has been completed.
    pub fn is_completed(&self, quest: Quest) -> bool {
        self.progress(quest).completed
    }

    /// Quests accepted but not yet completed.
    pub fn active(&self) -> impl Iterator<Item = Quest> + '_ {
        Quest::ALL
            .into_iter()
            .filter(|q| self.progress(*q).is_active())
    }
}
