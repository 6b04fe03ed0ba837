pub mod avatar;
pub mod card_animated;
pub mod charts;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;
