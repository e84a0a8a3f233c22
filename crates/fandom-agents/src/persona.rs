//! Host-facing handles a motive component is built from.

use core::fmt;

use fandom_types::{AffinityType, PersonaProfile};

/// A persona as seen by a motive component.
///
/// Only read at construction time.
pub trait Persona {
    /// Display name of the persona.
    fn name(&self) -> &str;

    /// Affinity of a fan persona, `None` for anyone else.
    fn fan_type(&self) -> Option<AffinityType>;
}

impl Persona for PersonaProfile {
    fn name(&self) -> &str {
        &self.name
    }

    fn fan_type(&self) -> Option<AffinityType> {
        self.fan_type
    }
}

/// Opaque handle to the host's language model.
///
/// Motive components keep the handle so hosts can hand the same component
/// set to model-backed components; keyword scoring never calls it.
pub trait LanguageModel: fmt::Debug + Send + Sync {
    /// Identifier of the backing model, for logs.
    fn model_name(&self) -> &str;
}
