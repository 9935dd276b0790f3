//! Exclusive OR and inversion

/// `true` if the two conditions produce different values.
///
/// Both conditions are always invoked, `condition` first.
pub fn exclusive_or<A, B>(condition: A, the_other: B) -> bool
where
    A: FnOnce() -> bool,
    B: FnOnce() -> bool,
{
    condition() != the_other()
}

/// Fallible [`exclusive_or`].
///
/// If `condition` fails, `the_other` is never invoked. Failures are
/// returned unchanged.
pub fn try_exclusive_or<A, B, E>(condition: A, the_other: B) -> Result<bool, E>
where
    A: FnOnce() -> Result<bool, E>,
    B: FnOnce() -> Result<bool, E>,
{
    let first = condition()?;
    Ok(first != the_other()?)
}

/// Logical negation
#[inline]
pub fn invert(value: bool) -> bool {
    !value
}

/// Postfix negation for booleans
pub trait Inverted {
    /// `false` if `self` is `true`; `true` if `self` is `false`
    fn inverted(self) -> Self;
}

impl Inverted for bool {
    #[inline]
    fn inverted(self) -> bool {
        invert(self)
    }
}
