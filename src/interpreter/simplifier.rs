/// Entry point of the algebraic rewrite pass.
///
/// Simplifies children bottom-up and dispatches each node to the local
/// rewrite rules for its kind. Assignments and calls only have their
/// children simplified; conditionals with a constant condition collapse to
/// the selected branch.
pub mod core;

/// Rewrite rules for binary nodes: constant folding, like-term and
/// like-power merging, constant-factor accumulation and identities.
pub mod binary;

/// Rewrite rules for unary nodes.
pub mod unary;

/// Shape recognisers used by the merge rules.
pub mod pattern;
