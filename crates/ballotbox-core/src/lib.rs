//! Core logic for a single-station voting terminal.
//!
//! Everything here is hardware-free: input arrives through
//! [`input::InputProvider`], tallies persist through [`storage::TallyStore`],
//! and the menu state machine publishes [`render::Screen`] view models for
//! whatever front end is attached.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod auth;
pub mod election;
pub mod input;
pub mod panel;
pub mod render;
pub mod results;
pub mod storage;
