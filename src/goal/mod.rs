//! Savings goals: the model, the goals page and the endpoints that create
//! goals and record how much has been saved.

mod core;
mod create_endpoint;
mod goals_page;
mod update_endpoint;
mod view;

pub use core::{Goal, GoalCategory};
pub use create_endpoint::create_goal_endpoint;
pub use goals_page::get_goals_page;
pub use update_endpoint::update_goal_amount_endpoint;
