pub mod activity;
pub mod budget;
pub mod event;
pub mod event_kind;
pub mod goal;
pub mod meal;
pub mod member;
pub mod note;
pub mod priority;
pub mod reward;
pub mod shopping;
pub mod task;
