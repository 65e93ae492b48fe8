//! Questforge - Gamified Personal Productivity Engine

pub mod action;
pub mod ai;
pub mod command;
pub mod core;
pub mod model;
pub mod persistence;
pub mod progression;
pub mod reducer;
