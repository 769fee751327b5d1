pub mod category_bar;
pub mod error_banner;
pub mod order_dialog;
pub mod product_card;
pub mod product_grid;
pub mod search_box;
pub mod skeleton_grid;
pub mod sort_select;
