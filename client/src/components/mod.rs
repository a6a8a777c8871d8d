//! Reusable UI component modules.
//!
//! Components render the admin chrome and the two list-search-mutate
//! panels while reading/writing shared state from Leptos context
//! providers.

pub mod attribute;
pub mod bike_details;
pub mod bike_form;
pub mod bikes_panel;
pub mod confirm_dialog;
pub mod navbar;
pub mod rating_chart;
pub mod search_input;
pub mod summary_cards;
pub mod user_details;
pub mod user_form;
pub mod users_panel;
