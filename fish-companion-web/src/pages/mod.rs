pub mod pool;
pub mod quests;
