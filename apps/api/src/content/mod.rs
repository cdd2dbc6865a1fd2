// Content Resolver
// Static persona profiles and the technique catalogue that feed the guide compositor.
// Tables are process-wide and read-only; nothing here allocates per request.

pub mod personas;
pub mod techniques;

pub use personas::{resolve, Persona, PersonaProfile};
pub use techniques::{catalogue, TechniqueCatalogue, TechniqueRecord};
