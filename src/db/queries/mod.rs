pub mod activities;
pub mod budget;
pub mod events;
pub mod goals;
pub mod meals;
pub mod members;
pub mod notes;
pub mod rewards;
pub mod shopping;
pub mod tasks;
