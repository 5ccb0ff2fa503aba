//! Pixel art front-end for Cove.
//!
//! A macroquad application that renders the play state onto a fixed virtual
//! canvas, feeds it keyboard input, and hosts a small title screen.

pub mod app;
pub mod input;
pub mod screen;
pub mod surface;
pub mod theme;
pub mod widget;
