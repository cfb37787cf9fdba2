//! # element-utils
//!
//! Per-frame geometry and binding utilities for a retained tree of styled UI
//! elements.
//!
//! The crate answers the questions a host's layout and render passes ask about
//! one element at a time: where does it go inside its parent, which rectangle
//! must it be drawn under, which transform must be active, and which data
//! bindings does it declare. Tree storage, style values and the render backend
//! are modelled just far enough to run these passes end to end.
//!
//! ## Core Systems
//!
//! - **[`dom`]**: Slotmap-backed element arena with offsets, addresses and breadth-first lookups
//! - **[`style`]**: Computed values for overflow, clip and box sizing, with a declaration parser
//! - **[`layout`]**: Box model, box builder and the anchor-aware box positioner
//! - **[`render`]**: Clip region resolver and applier, transform submitter, render context
//! - **[`binding`]**: `data-*` attribute discovery, data model, built-in views and controllers
//! - **[`config`]**: Render context configuration
//! - **[`geometry`]**: Vector, Region, Edges primitives and pixel snapping
//! - **[`testing`]**: Recording render backend for assertions

// Foundation
pub mod config;
pub mod geometry;

// Core systems
pub mod dom;
pub mod layout;
pub mod style;

// Passes
pub mod binding;
pub mod render;

// Test support
pub mod testing;
