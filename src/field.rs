//! Provide single-field accessors.

use core::fmt;

use crate::access::{Access, AccessMut};

// -----------------------------------------------------------------------------
// Field accessor

/// An accessor for a single structural member of a composite type.
///
/// Built with the [`field!`] macro, which derives the shared and mutable
/// operations together from one field path; a `Field` therefore always
/// supports both shared and mutable invocation, and both address the same
/// storage.
///
/// A `Field` holds only two function pointers. It is `Copy`, stateless,
/// constructed once, and reusable against any number of owners of the
/// matching type.
///
/// This type is also what makes `|` composition possible: the pipe operator
/// can only be defined on library types, so a bare field path must pass
/// through [`field!`] before it can appear next to `|`.
///
/// # Examples
///
/// ```
/// use vc_access::{Accessible, field};
///
/// struct Engine { cylinder: Cylinder }
/// struct Cylinder { bore_mm: u32 }
///
/// let cylinder = field!(Engine => cylinder);
/// let mut engine = Engine { cylinder: Cylinder { bore_mm: 86 } };
///
/// engine.part_mut(&cylinder).bore_mm = 92;
/// assert_eq!(engine.part(&cylinder).bore_mm, 92);
/// ```
///
/// [`field!`]: crate::field!
pub struct Field<C: ?Sized, M: ?Sized> {
    get: fn(&C) -> &M,
    get_mut: fn(&mut C) -> &mut M,
}

impl<C: ?Sized, M: ?Sized> Field<C, M> {
    /// Creates a field accessor from a pair of aligned operations.
    ///
    /// Prefer [`field!`], which generates both operations from one field path
    /// and cannot get them out of step. Callers of `new` must guarantee the
    /// pair addresses the same storage.
    ///
    /// [`field!`]: crate::field!
    #[inline]
    pub const fn new(get: fn(&C) -> &M, get_mut: fn(&mut C) -> &mut M) -> Self {
        Self { get, get_mut }
    }
}

impl<C: ?Sized, M: ?Sized> Access for Field<C, M> {
    type Source = C;
    type Target = M;

    #[inline]
    fn access<'r>(&self, owner: &'r C) -> &'r M {
        (self.get)(owner)
    }
}

impl<C: ?Sized, M: ?Sized> AccessMut for Field<C, M> {
    #[inline]
    fn access_mut<'r>(&self, owner: &'r mut C) -> &'r mut M {
        (self.get_mut)(owner)
    }
}

impl<C: ?Sized, M: ?Sized> Clone for Field<C, M> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, M: ?Sized> Copy for Field<C, M> {}

impl<C: ?Sized, M: ?Sized> fmt::Debug for Field<C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Constructor macro

/// Creates a [`Field`] accessor for one member of a composite type.
///
/// Accepts a named field or a tuple index. Both the shared and the mutable
/// operation are generated from the same field path.
///
/// # Examples
///
/// ```
/// use vc_access::{Accessible, field};
///
/// struct Engine { cylinder: (u32, u32) }
///
/// let cylinder = field!(Engine => cylinder);
/// let bore = field!((u32, u32) => 0);
///
/// let engine = Engine { cylinder: (86, 99) };
/// assert_eq!(*engine.part(&cylinder).part(&bore), 86);
/// ```
#[macro_export]
macro_rules! field {
    ($owner:ty => $member:tt) => {
        $crate::Field::new(
            |owner: &$owner| &owner.$member,
            |owner: &mut $owner| &mut owner.$member,
        )
    };
}

// -----------------------------------------------------------------------------
// Tests
