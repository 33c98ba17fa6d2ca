//! Provide callable-backed accessors.

use core::fmt;
use core::marker::PhantomData;

use crate::access::{Access, AccessMut};

// -----------------------------------------------------------------------------
// Read-only callables

/// An accessor backed by a user callable.
///
/// Built with [`getter`] from any `Fn(&S) -> &D`. Because only the shared
/// operation exists, a `Getter` supports shared invocation only; composing it
/// into a path makes the whole path read-only. Use [`Lens`] when mutable
/// invocation is needed.
///
/// The callable must follow the accessor rules on [`Access`]: return a
/// reference into the owner it was given, deterministically, for every
/// well-typed owner.
pub struct Getter<S: ?Sized, D: ?Sized, F> {
    f: F,
    marker: PhantomData<fn(&S) -> &D>,
}

/// Lifts a read-only callable into an accessor.
///
/// The closure parameter usually needs its type spelled out so the compiler
/// generalizes the function over the borrow.
///
/// # Examples
///
/// ```
/// use vc_access::{Accessible, getter};
///
/// struct Engine { cylinder: Cylinder }
/// struct Cylinder { bore_mm: u32 }
///
/// let cylinder = getter(|engine: &Engine| &engine.cylinder);
///
/// let engine = Engine { cylinder: Cylinder { bore_mm: 86 } };
/// assert_eq!(engine.part(&cylinder).bore_mm, 86);
/// ```
#[inline]
pub const fn getter<S, D, F>(f: F) -> Getter<S, D, F>
where
    S: ?Sized,
    D: ?Sized,
    F: Fn(&S) -> &D,
{
    Getter {
        f,
        marker: PhantomData,
    }
}

impl<S: ?Sized, D: ?Sized, F> Access for Getter<S, D, F>
where
    F: Fn(&S) -> &D,
{
    type Source = S;
    type Target = D;

    #[inline]
    fn access<'r>(&self, owner: &'r S) -> &'r D {
        (self.f)(owner)
    }
}

impl<S: ?Sized, D: ?Sized, F: Clone> Clone for Getter<S, D, F> {
    #[inline]
    fn clone(&self) -> Self {
        Getter {
            f: self.f.clone(),
            marker: PhantomData,
        }
    }
}

impl<S: ?Sized, D: ?Sized, F: Copy> Copy for Getter<S, D, F> {}

impl<S: ?Sized, D: ?Sized, F> fmt::Debug for Getter<S, D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Getter").finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Read-write callables

/// An accessor backed by a pair of user callables.
///
/// Built with [`lens`] from a `Fn(&S) -> &D` and the matching
/// `Fn(&mut S) -> &mut D`. Supports shared and mutable invocation. The two
/// callables must address the same storage; the library cannot verify this,
/// but with both paths written side by side a mismatch is a plain bug in the
/// caller's code rather than a memory-safety hazard.
pub struct Lens<S: ?Sized, D: ?Sized, F, G> {
    get: F,
    get_mut: G,
    marker: PhantomData<fn(&S) -> &D>,
}

/// Lifts an aligned pair of callables into a read-write accessor.
///
/// # Examples
///
/// ```
/// use vc_access::{Accessible, lens};
///
/// struct Engine { cylinder: Cylinder }
/// struct Cylinder { bore_mm: u32 }
///
/// let cylinder = lens(
///     |engine: &Engine| &engine.cylinder,
///     |engine: &mut Engine| &mut engine.cylinder,
/// );
///
/// let mut engine = Engine { cylinder: Cylinder { bore_mm: 86 } };
/// engine.part_mut(&cylinder).bore_mm = 92;
/// assert_eq!(engine.cylinder.bore_mm, 92);
/// ```
#[inline]
pub const fn lens<S, D, F, G>(get: F, get_mut: G) -> Lens<S, D, F, G>
where
    S: ?Sized,
    D: ?Sized,
    F: Fn(&S) -> &D,
    G: Fn(&mut S) -> &mut D,
{
    Lens {
        get,
        get_mut,
        marker: PhantomData,
    }
}

impl<S: ?Sized, D: ?Sized, F, G> Access for Lens<S, D, F, G>
where
    F: Fn(&S) -> &D,
    G: Fn(&mut S) -> &mut D,
{
    type Source = S;
    type Target = D;

    #[inline]
    fn access<'r>(&self, owner: &'r S) -> &'r D {
        (self.get)(owner)
    }
}

impl<S: ?Sized, D: ?Sized, F, G> AccessMut for Lens<S, D, F, G>
where
    F: Fn(&S) -> &D,
    G: Fn(&mut S) -> &mut D,
{
    #[inline]
    fn access_mut<'r>(&self, owner: &'r mut S) -> &'r mut D {
        (self.get_mut)(owner)
    }
}

impl<S: ?Sized, D: ?Sized, F: Clone, G: Clone> Clone for Lens<S, D, F, G> {
    #[inline]
    fn clone(&self) -> Self {
        Lens {
            get: self.get.clone(),
            get_mut: self.get_mut.clone(),
            marker: PhantomData,
        }
    }
}

impl<S: ?Sized, D: ?Sized, F: Copy, G: Copy> Copy for Lens<S, D, F, G> {}

impl<S: ?Sized, D: ?Sized, F, G> fmt::Debug for Lens<S, D, F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens").finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{Access, AccessMut};
    use crate::field;

    struct Chassis {
        wheelbase_mm: u32,
    }

    #[test]
    fn getter_matches_field_accessor() {
        let by_field = field!(Chassis => wheelbase_mm);
        let by_closure = getter(|chassis: &Chassis| &chassis.wheelbase_mm);

        let chassis = Chassis { wheelbase_mm: 2700 };
        assert_eq!(by_closure.access(&chassis), by_field.access(&chassis));
        assert!(core::ptr::eq(
            by_closure.access(&chassis),
            by_field.access(&chassis),
        ));
    }

    #[test]
    fn getter_accepts_plain_functions() {
        fn wheelbase(chassis: &Chassis) -> &u32 {
            &chassis.wheelbase_mm
        }

        let accessor = getter(wheelbase);
        let chassis = Chassis { wheelbase_mm: 2450 };
        assert_eq!(*accessor.access(&chassis), 2450);
    }

    #[test]
    fn lens_reads_and_writes_same_storage() {
        let accessor = lens(
            |chassis: &Chassis| &chassis.wheelbase_mm,
            |chassis: &mut Chassis| &mut chassis.wheelbase_mm,
        );

        let mut chassis = Chassis { wheelbase_mm: 2700 };
        *accessor.access_mut(&mut chassis) = 2850;
        assert_eq!(*accessor.access(&chassis), 2850);
        assert_eq!(chassis.wheelbase_mm, 2850);
    }
}
