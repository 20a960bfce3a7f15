pub mod activity;
pub mod backup;
pub mod budget;
pub mod config;
pub mod db;
pub mod duty;
pub mod event;
pub mod export;
pub mod goal;
pub mod init;
pub mod log;
pub mod meal;
pub mod member;
pub mod note;
pub mod reward;
pub mod seed;
pub mod shopping;
pub mod task;
