/// Floating-point tolerance helpers.
///
/// This module holds the single comparison policy shared by constant folding
/// and evaluation: one epsilon for zero guards, equality and truthiness, and
/// exact comparison for ordering.
pub mod num;
