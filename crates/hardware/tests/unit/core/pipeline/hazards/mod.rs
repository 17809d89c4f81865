/// Taken branches and jumps.
pub mod control_hazards;


/// Load-use stall detection.
pub mod load_use;
