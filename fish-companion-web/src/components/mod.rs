pub mod broken_lines;
pub mod caught_totals;
pub mod fish_grid;
pub mod lake_selector;
pub mod pool_status;
pub mod quest_card;
pub mod quest_totals;
pub mod reset_all;
