//! Error types for catalog construction and demand resolution

/// Errors raised while building a catalog or resolving demand against it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// The requested target is neither a recipe nor a raw material.
    #[error("unknown item '{name}'")]
    UnknownItem { name: String },

    /// A recipe lists an ingredient the catalog does not know about.
    #[error("unknown ingredient '{name}' (required by '{required_by}')")]
    UnknownIngredient { name: String, required_by: String },

    /// Goal rates must be finite and strictly positive.
    #[error("goal rate must be a positive number of items/min, got {goal}")]
    InvalidGoal { goal: f64 },

    /// Expansion re-entered an item already on the active path.
    #[error("cyclic recipe graph: {}", path.join(" -> "))]
    CyclicRecipe { path: Vec<String> },

    #[error("invalid recipe for '{item}': {detail}")]
    InvalidRecipe { item: String, detail: String },

    #[error("item '{name}' is declared more than once")]
    DuplicateItem { name: String },

    /// A rare variant points at something that is not a produced item.
    #[error("rare variant '{rare}' targets '{target}', which has no recipe to replace")]
    UnknownVariantTarget { rare: String, target: String },
}
