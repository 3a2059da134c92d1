//! Kazanim Guide - Conversational curriculum objective lookup service.
//!
//! Guides a user through two selections (grade level, subject) and returns
//! the MEB learning objective for the resolved week of the school year.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
