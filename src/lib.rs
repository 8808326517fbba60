//! Ear-clipping triangulation and Greiner-Hormann polygon clipping over
//! caller-owned buffers.
//!
//! This crate is a pure computational kernel: every entry point takes plain
//! slices and writes its results back into slices the caller already owns.
//! There is no allocator, no file or network I/O, and no internal mutable
//! state beyond what is passed in. It targets embedding in rendering,
//! physics, or GIS pipelines where vertex and index buffers are already
//! managed by the host application.
//!
//! Two independent subsystems are exposed:
//!
//! - [`triangulate`] turns a simple polygon into a triangle index stream.
//! - The [`clip`] module implements Greiner-Hormann clipping: [`clip::transform`]
//!   builds a [`clip::ClipRing`] from a vertex loop, [`clip::find_intersections`]
//!   and [`clip::mark_entry_exit`] prepare it, and [`clip::emit_polygons`] /
//!   [`clip::emit_single_polygon`] produce the Boolean combination.
//!
//! Both hole-bearing and self-intersecting input polygons are out of scope;
//! see each module's documentation for the exact contract.
#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod index;
mod triangulate;
mod vector;

/// Greiner-Hormann polygon clipping over index-linked vertex rings.
pub mod clip;

pub use clip::{
    emit_polygons, emit_single_polygon, find_intersections, mark_entry_exit, transform, BooleanOp,
    ClipRing, ClipVertex, Direction, PolygonSpan,
};
pub use index::Index;
pub use triangulate::triangulate;
pub use vector::{is_clockwise, signed_area, Vector};
