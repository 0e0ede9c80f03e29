//! Use-Cases der Application-Layer-Orchestrierung.

pub mod draw_mode;
pub mod office;
pub mod placement;
pub mod route_capture;
pub mod route_edit;
pub mod selection;
pub mod sync;
