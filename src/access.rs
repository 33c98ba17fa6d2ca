//! Provide the accessor contract and owner-side invocation.

// -----------------------------------------------------------------------------
// Contract

/// The contract every accessor satisfies: a navigation step from a composite
/// [`Source`] value to one [`Target`] part of it.
///
/// Implementors must uphold three rules, none of which the library can check:
///
/// - **Deterministic**: invoked twice on the same unmutated owner, the
///   returned references address the same storage.
/// - **Reference-producing**: the returned reference points *into* the owner
///   passed in, never into unrelated storage. The signature already ties the
///   result lifetime to the owner borrow; implementors must not satisfy it
///   with `&'static` data.
/// - **Total**: invocation never fails for a well-typed owner. A missing
///   target is a type error, not a runtime condition.
///
/// Requiring a specific source or target is an ordinary associated-type
/// bound: `A: Access<Source = Engine, Target = u32>`.
///
/// # Examples
///
/// ```
/// use vc_access::{Access, field};
///
/// struct Engine { cylinder: Cylinder }
/// struct Cylinder { bore_mm: u32 }
///
/// let cylinder = field!(Engine => cylinder);
///
/// let engine = Engine { cylinder: Cylinder { bore_mm: 86 } };
/// assert_eq!(cylinder.access(&engine).bore_mm, 86);
/// ```
///
/// [`Source`]: Access::Source
/// [`Target`]: Access::Target
pub trait Access {
    /// The composite type this accessor navigates from.
    type Source: ?Sized;
    /// The part type this accessor navigates to.
    type Target: ?Sized;

    /// Returns a shared reference to the addressed part of `owner`.
    ///
    /// The result borrows from `owner` alone, never from `self`, so a
    /// short-lived accessor can hand out a long-lived reference.
    fn access<'r>(&self, owner: &'r Self::Source) -> &'r Self::Target;
}

/// The mutable half of the accessor contract.
///
/// `access_mut` must address exactly the storage that [`access`] addresses;
/// the two operations are supplied together (see [`field!`] and [`lens`]) so
/// that alignment holds by construction. Accessors built from a lone
/// read-only closure ([`getter`]) do not implement this trait, and invoking
/// them mutably is a compile-time error.
///
/// [`access`]: Access::access
/// [`field!`]: crate::field!
/// [`lens`]: crate::lens
/// [`getter`]: crate::getter
pub trait AccessMut: Access {
    /// Returns a mutable reference to the addressed part of `owner`.
    fn access_mut<'r>(&self, owner: &'r mut Self::Source) -> &'r mut Self::Target;
}

// -----------------------------------------------------------------------------
// Type projection

/// The composite type an accessor navigates from.
pub type Source<A> = <A as Access>::Source;

/// The part type an accessor navigates to.
pub type Target<A> = <A as Access>::Target;

// -----------------------------------------------------------------------------
// Owner-side invocation

/// Owner-side invocation of an accessor, with the result mutability following
/// the owner binding.
///
/// Implemented for every type, so any value can appear on the left of
/// [`part`]/[`part_mut`] with an accessor whose [`Source`](Access::Source)
/// matches. A shared owner yields a shared reference; a mutable owner yields
/// a mutable reference, and requires the accessor to implement [`AccessMut`].
///
/// Invocation is free of side effects: the owner is only threaded through,
/// and the library retains no reference to it past the call.
///
/// # Examples
///
/// ```
/// use vc_access::{Accessible, chain, field};
///
/// struct Engine { cylinder: Cylinder }
/// struct Cylinder { bore_mm: u32 }
///
/// let bore = chain!(field!(Engine => cylinder), field!(Cylinder => bore_mm));
///
/// let mut engine = Engine { cylinder: Cylinder { bore_mm: 86 } };
/// assert_eq!(*engine.part(&bore), 86);
///
/// *engine.part_mut(&bore) = 92;
/// assert_eq!(engine.cylinder.bore_mm, 92);
/// ```
///
/// [`part`]: Accessible::part
/// [`part_mut`]: Accessible::part_mut
pub trait Accessible {
    /// Returns a shared reference to the part of `self` that `accessor`
    /// addresses.
    #[inline]
    fn part<A>(&self, accessor: &A) -> &A::Target
    where
        A: Access<Source = Self>,
    {
        accessor.access(self)
    }

    /// Returns a mutable reference to the part of `self` that `accessor`
    /// addresses.
    #[inline]
    fn part_mut<A>(&mut self, accessor: &A) -> &mut A::Target
    where
        A: AccessMut<Source = Self>,
    {
        accessor.access_mut(self)
    }
}

impl<T: ?Sized> Accessible for T {}

// -----------------------------------------------------------------------------
// Tests
