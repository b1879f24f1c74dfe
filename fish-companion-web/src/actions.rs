//! User intents emitted by the pages and applied to the trackers.
use fish_companion_core::{FishCategory, Lake, PoolTracker, QuestName, QuestTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolAction {
    SelectLake(Lake),
    Catch(FishCategory),
    CatchWholePool,
    Refill,
    Undo,
    AddBrokenLine,
    ResetBrokenLines,
    ResetAll,
}

impl PoolAction {
    /// Apply to the currently selected lake. Returns whether state changed.
    pub fn apply(self, tracker: &mut PoolTracker) -> bool {
        let lake = tracker.current_lake();
        match self {
            Self::SelectLake(next) => tracker.select_lake(next),
            Self::Catch(category) => tracker.catch(lake, category),
            Self::CatchWholePool => tracker.catch_whole_pool(lake),
            Self::Refill => tracker.refill(lake),
            Self::Undo => tracker.undo(lake),
            Self::AddBrokenLine => tracker.add_broken_line(),
            Self::ResetBrokenLines => tracker.reset_broken_lines(),
            Self::ResetAll => tracker.reset_all(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestAction {
    /// Raw text from a quest's progress input.
    SetProgress(QuestName, String),
    ClearAll,
}

impl QuestAction {
    pub fn apply(self, tracker: &mut QuestTracker) -> bool {
        match self {
            Self::SetProgress(name, text) => tracker.set_progress_input(name, &text),
            Self::ClearAll => tracker.clear_all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_actions_target_the_selected_lake() {
        let mut tracker = PoolTracker::new();
        assert!(PoolAction::SelectLake(Lake::Polar).apply(&mut tracker));
        assert!(PoolAction::Catch(FishCategory::Legendary).apply(&mut tracker));
        assert_eq!(tracker.pool(Lake::Polar).actions().len(), 1);
        assert!(tracker.pool(Lake::Lakehouse).is_untouched());

        assert!(!PoolAction::CatchWholePool.apply(&mut tracker));
        assert!(PoolAction::Undo.apply(&mut tracker));
        assert!(PoolAction::CatchWholePool.apply(&mut tracker));
        assert!(PoolAction::Refill.apply(&mut tracker));
        assert!(PoolAction::AddBrokenLine.apply(&mut tracker));
        assert!(PoolAction::ResetBrokenLines.apply(&mut tracker));
        assert!(PoolAction::ResetAll.apply(&mut tracker));
        assert!(!PoolAction::ResetAll.apply(&mut tracker));
    }

    #[test]
    fn quest_actions_parse_input_text() {
        let mut tracker = QuestTracker::default();
        let set = QuestAction::SetProgress(QuestName::KillBosses, "12".to_string());
        assert!(set.clone().apply(&mut tracker));
        assert!(!set.apply(&mut tracker));
        assert_eq!(tracker.totals().earned, 6);
        assert!(QuestAction::ClearAll.apply(&mut tracker));
        assert_eq!(tracker.progress_of(QuestName::KillBosses), None);
    }
}
