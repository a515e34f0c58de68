// src/lib.rs
//
// A vertical chain of nodes, each drawing four quarter-circle wedges that
// sweep open or closed one node at a time, driven by a fixed-period ticker.

pub mod animation;
pub mod config;
pub mod draw;
pub mod models;
pub mod views;
