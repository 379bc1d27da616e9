pub mod badges;
pub mod cards;
pub mod controls;
pub mod gauge;
pub mod progress;
pub mod search;
pub mod sidebar;
pub mod toast;
pub mod track_info;
