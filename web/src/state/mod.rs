//! Client-side state actions.
//!
//! DESIGN
//! ======
//! The state itself is `lifecycle::ComplaintsState` held in one `RwSignal`
//! provided via context. This module wires its transitions to the network.

pub mod complaints;
