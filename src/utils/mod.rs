// Shared helpers

pub mod icons;
