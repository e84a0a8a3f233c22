//! Shared type definitions for the fandom simulation.
//!
//! This crate is the single source of truth for the data types used across
//! the workspace. Types flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`enums`] -- Affinity types and reward categories
//! - [`structs`] -- Event statements, log records, persona profiles

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{AffinityError, AffinityType, RewardCategory};
pub use structs::{EventStatement, LogRecord, PersonaProfile, REWARD_LOG_KEY};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for exported types.

    #[test]
    fn export_bindings() {
        // The files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::enums::AffinityType::export_all();
        let _ = crate::enums::RewardCategory::export_all();
        let _ = crate::structs::EventStatement::export_all();
        let _ = crate::structs::LogRecord::export_all();
        let _ = crate::structs::PersonaProfile::export_all();
    }
}
