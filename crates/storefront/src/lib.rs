//! Shopfront Storefront library.
//!
//! The storefront state layer: a static product catalog with a
//! filter/sort pipeline, a persisted shopping cart, a demo identity flow,
//! and the admin analytics dashboard.
//!
//! # Architecture
//!
//! Stores receive their durable storage through their constructors, so
//! every caller (the CLI, tests) owns isolated instances. Mutations return
//! events describing what happened and leave notification to the caller.
//!
//! - [`storage`] - Keyed JSON blob persistence (memory and file backends)
//! - [`catalog`] - Product catalog and query pipeline
//! - [`stores`] - Cart and identity stores
//! - [`services`] - Demo authentication and simulated latency
//! - [`dashboard`] - Admin-only analytics report

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;
