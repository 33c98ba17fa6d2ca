//! Provide accessor composition: [`Chain`], the [`chain!`] macro, and the
//! `|` pipe operator.
//!
//! [`chain!`]: crate::chain!

use core::ops::BitOr;

use crate::access::{Access, AccessMut};
use crate::field::Field;
use crate::getter::{Getter, Lens};

// -----------------------------------------------------------------------------
// Two-step composition

/// Two accessors composed end to end.
///
/// `Chain<A, B>` is itself an accessor: its source is `A`'s source, its
/// target is `B`'s target, and invocation applies `A` then `B`, strictly in
/// that order. The second step's source type must equal the first step's
/// target type; a mismatch fails the `Access` bound at compile time.
///
/// Both steps are stored by value, so a composed accessor never borrows from
/// the accessors it was built from and can outlive them freely.
///
/// Longer paths are nested `Chain`s, written with the [`chain!`] macro or the
/// `|` operator. Grouping does not matter: however the nesting falls out,
/// invocation order is the flat left-to-right sequence, and all groupings
/// address the same storage.
///
/// # Examples
///
/// ```
/// use vc_access::{Accessible, Chain, field};
///
/// struct Engine { cylinder: Cylinder }
/// struct Cylinder { bore_mm: u32 }
///
/// let bore = Chain::new(
///     field!(Engine => cylinder),
///     field!(Cylinder => bore_mm),
/// );
///
/// let engine = Engine { cylinder: Cylinder { bore_mm: 86 } };
/// assert_eq!(*engine.part(&bore), 86);
/// ```
///
/// [`chain!`]: crate::chain!
#[derive(Debug, Clone, Copy)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B>
where
    A: Access,
    B: Access<Source = A::Target>,
{
    /// Composes two accessors; `first` is applied to the owner, `second` to
    /// its result.
    #[inline]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Access for Chain<A, B>
where
    A: Access,
    A::Target: 'static,
    B: Access<Source = A::Target>,
{
    type Source = A::Source;
    type Target = B::Target;

    #[inline]
    fn access<'r>(&self, owner: &'r Self::Source) -> &'r Self::Target {
        self.second.access(self.first.access(owner))
    }
}

impl<A, B> AccessMut for Chain<A, B>
where
    A: AccessMut,
    A::Target: 'static,
    B: AccessMut<Source = A::Target>,
{
    #[inline]
    fn access_mut<'r>(&self, owner: &'r mut Self::Source) -> &'r mut Self::Target {
        self.second.access_mut(self.first.access_mut(owner))
    }
}

// -----------------------------------------------------------------------------
// Variadic composition

/// Composes two or more accessors, left to right, into one accessor.
///
/// `chain!(a, b, c)` navigates with `a` on the owner, then `b` on the result,
/// then `c`. Each step's target type must equal the next step's source type;
/// misaligned steps are a compile-time error. Field, getter, lens, and
/// already-composed steps mix freely.
///
/// The expansion is a left fold into nested [`Chain`] values, so the composed
/// accessor owns every step.
///
/// # Examples
///
/// ```
/// use vc_access::{Accessible, chain, field, getter};
///
/// struct Engine { cylinder: Cylinder }
/// struct Cylinder { bore: Bore }
/// struct Bore { mm: u32 }
///
/// let mm = chain!(
///     field!(Engine => cylinder),
///     getter(|cylinder: &Cylinder| &cylinder.bore),
///     field!(Bore => mm),
/// );
///
/// let engine = Engine { cylinder: Cylinder { bore: Bore { mm: 86 } } };
/// assert_eq!(*engine.part(&mm), 86);
/// ```
#[macro_export]
macro_rules! chain {
    ($first:expr, $second:expr $(,)?) => {
        $crate::Chain::new($first, $second)
    };
    ($first:expr, $second:expr, $($rest:expr),+ $(,)?) => {
        $crate::chain!($crate::Chain::new($first, $second), $($rest),+)
    };
}

// -----------------------------------------------------------------------------
// Pipe operator

// `a | b` is `chain!(a, b)`. One impl per library accessor type; a bare
// closure must pass through `getter`/`lens` before it can stand on the left.

impl<C, M, Rhs> BitOr<Rhs> for Field<C, M>
where
    C: ?Sized,
    M: ?Sized,
    Rhs: Access<Source = M>,
{
    type Output = Chain<Self, Rhs>;

    #[inline]
    fn bitor(self, rhs: Rhs) -> Self::Output {
        Chain::new(self, rhs)
    }
}

impl<S, D, F, Rhs> BitOr<Rhs> for Getter<S, D, F>
where
    S: ?Sized,
    D: ?Sized,
    F: Fn(&S) -> &D,
    Rhs: Access<Source = D>,
{
    type Output = Chain<Self, Rhs>;

    #[inline]
    fn bitor(self, rhs: Rhs) -> Self::Output {
        Chain::new(self, rhs)
    }
}

impl<S, D, F, G, Rhs> BitOr<Rhs> for Lens<S, D, F, G>
where
    S: ?Sized,
    D: ?Sized,
    F: Fn(&S) -> &D,
    G: Fn(&mut S) -> &mut D,
    Rhs: Access<Source = D>,
{
    type Output = Chain<Self, Rhs>;

    #[inline]
    fn bitor(self, rhs: Rhs) -> Self::Output {
        Chain::new(self, rhs)
    }
}

impl<A, B, Rhs> BitOr<Rhs> for Chain<A, B>
where
    A: Access,
    A::Target: 'static,
    B: Access<Source = A::Target>,
    Rhs: Access<Source = B::Target>,
{
    type Output = Chain<Self, Rhs>;

    #[inline]
    fn bitor(self, rhs: Rhs) -> Self::Output {
        Chain::new(self, rhs)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Accessible;
    use crate::getter::getter;
    use crate::{chain, field};

    struct Car {
        engine: Engine,
    }

    struct Engine {
        cylinder: Cylinder,
    }

    struct Cylinder {
        bore_mm: u32,
    }

    impl Default for Car {
        fn default() -> Self {
            Car {
                engine: Engine {
                    cylinder: Cylinder { bore_mm: 123 },
                },
            }
        }
    }

    #[test]
    fn depth_two_read() {
        let path = chain!(field!(Car => engine), field!(Engine => cylinder));
        let car = Car::default();

        assert_eq!(car.part(&path).bore_mm, 123);
    }

    #[test]
    fn depth_two_write() {
        let path = chain!(field!(Car => engine), field!(Engine => cylinder));
        let mut car = Car::default();

        car.part_mut(&path).bore_mm = 456;
        assert_eq!(car.engine.cylinder.bore_mm, 456);
    }

    #[test]
    fn depth_three_write() {
        let path = chain!(
            field!(Car => engine),
            field!(Engine => cylinder),
            field!(Cylinder => bore_mm),
        );
        let mut car = Car::default();

        *car.part_mut(&path) = 789;
        assert_eq!(car.engine.cylinder.bore_mm, 789);
    }

    #[test]
    fn chain_equals_stepwise_invocation() {
        let engine = field!(Car => engine);
        let cylinder = field!(Engine => cylinder);
        let path = chain!(engine, cylinder);

        let car = Car::default();
        let stepwise = car.part(&engine).part(&cylinder);
        assert!(core::ptr::eq(car.part(&path), stepwise));
    }

    #[test]
    fn grouping_does_not_move_the_target() {
        let a = field!(Car => engine);
        let b = field!(Engine => cylinder);
        let c = field!(Cylinder => bore_mm);

        let left = chain!(chain!(a, b), c);
        let right = chain!(a, chain!(b, c));
        let flat = chain!(a, b, c);

        let car = Car::default();
        assert!(core::ptr::eq(car.part(&left), car.part(&right)));
        assert!(core::ptr::eq(car.part(&left), car.part(&flat)));
        assert_eq!(*car.part(&flat), 123);
    }

    #[test]
    fn mixed_callable_and_field_steps() {
        let all_fields = chain!(field!(Car => engine), field!(Engine => cylinder));
        let mixed = chain!(
            getter(|car: &Car| &car.engine),
            field!(Engine => cylinder),
        );

        let car = Car::default();
        assert!(core::ptr::eq(car.part(&all_fields), car.part(&mixed)));
    }

    #[test]
    fn pipe_equals_chain() {
        let piped = field!(Car => engine) | field!(Engine => cylinder);
        let chained = chain!(field!(Car => engine), field!(Engine => cylinder));

        let car = Car::default();
        assert!(core::ptr::eq(car.part(&piped), car.part(&chained)));
    }

    #[test]
    fn pipe_builds_incrementally() {
        let path = field!(Car => engine)
            | field!(Engine => cylinder)
            | field!(Cylinder => bore_mm);

        let mut car = Car::default();
        *car.part_mut(&path) = 42;
        assert_eq!(car.engine.cylinder.bore_mm, 42);
    }

    #[test]
    fn composed_accessor_outlives_its_parts() {
        let path = {
            let engine = field!(Car => engine);
            let cylinder = field!(Engine => cylinder);
            chain!(engine, cylinder)
        };

        let car = Car::default();
        assert_eq!(car.part(&path).bore_mm, 123);
    }

    #[test]
    fn read_only_step_keeps_the_path_readable() {
        // A getter step has no mutable operation, so the composed path is
        // shared-only; it still reads through a mutable owner's shared borrow.
        let path = chain!(
            getter(|car: &Car| &car.engine),
            field!(Engine => cylinder),
        );

        let mut car = Car::default();
        car.engine.cylinder.bore_mm = 7;
        assert_eq!(car.part(&path).bore_mm, 7);
    }
}
