//! Matchday - Modular backend for pickup football groups.
//!
//! Four bounded-context modules (Group, Player, Match, User) own their
//! aggregates independently and stay consistent through domain events
//! dispatched in-process.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
