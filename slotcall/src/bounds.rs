//! Compile-time id range assertions for the `_checked` dispatch paths.
//!
//! Each helper carries an associated `CHECK` constant whose evaluation fails
//! the build when the id falls outside the table's window. The checked
//! methods force evaluation at every call site with
//!
//! ```text
//! () = IdInRange::<ID, RANGE, OFFSET>::CHECK;
//! ```
//!
//! so a bad identifier is a build error at monomorphization, never a runtime
//! fault. Two helpers exist because the two table forms are parameterized
//! differently (`RANGE` vs. full array length) and stable Rust does not allow
//! arithmetic on const parameters in generic arguments.

/// Asserts that `ID` lies within `[OFFSET, OFFSET + RANGE)`.
pub(crate) struct IdInRange<const ID: usize, const RANGE: usize, const OFFSET: usize>;

impl<const ID: usize, const RANGE: usize, const OFFSET: usize> IdInRange<ID, RANGE, OFFSET> {
    pub(crate) const CHECK: () = assert!(
        ID >= OFFSET && ID - OFFSET < RANGE,
        "dispatch id out of range for this table"
    );
}

/// Asserts that `ID` lies within `[OFFSET, OFFSET + LEN - 1)`, where `LEN` is
/// the full length of a static table's array including the trailing
/// out-of-range slot.
pub(crate) struct IdInTable<const ID: usize, const LEN: usize, const OFFSET: usize>;

impl<const ID: usize, const LEN: usize, const OFFSET: usize> IdInTable<ID, LEN, OFFSET> {
    pub(crate) const CHECK: () = assert!(
        ID >= OFFSET && ID - OFFSET < LEN - 1,
        "dispatch id out of range for this table"
    );
}
