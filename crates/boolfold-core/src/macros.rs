//! Declarative condition lists
//!
//! Every argument is an expression that is only evaluated once the fold
//! reaches it. At least one condition is required; `all!()` does not compile.

/// Short-circuiting AND over boolean expressions.
///
/// ```rust
/// use boolfold_core::all;
///
/// let mut checked = 0;
/// let result = all!(
///     1 + 1 == 2,
///     false,
///     { checked += 1; true },
/// );
/// assert!(!result);
/// assert_eq!(checked, 0);
/// ```
#[macro_export]
macro_rules! all {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let verdict: bool = $first;
        verdict $(&& $rest)*
    }};
}

/// Short-circuiting OR over boolean expressions.
///
/// ```rust
/// use boolfold_core::any;
///
/// assert!(any!(false, 2 > 1, unreachable!()));
/// ```
#[macro_export]
macro_rules! any {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let verdict: bool = $first;
        verdict $(|| $rest)*
    }};
}

/// Exclusive OR of two boolean expressions, evaluated left then right.
///
/// ```rust
/// use boolfold_core::either;
///
/// assert!(either!(true, false));
/// assert!(!either!(false, false));
/// ```
#[macro_export]
macro_rules! either {
    ($condition:expr, $the_other:expr $(,)?) => {{
        let first: bool = $condition;
        let second: bool = $the_other;
        first != second
    }};
}

/// Short-circuiting AND over `Result<bool, E>` expressions.
///
/// Yields the first `Err` unchanged; nothing after a `false` or an `Err`
/// is evaluated.
///
/// ```rust
/// use boolfold_core::try_all;
///
/// fn lookup(key: &str) -> Result<bool, String> {
///     Err(format!("missing {key}"))
/// }
///
/// assert_eq!(try_all!(Ok(true), lookup("a"), lookup("b")), Err("missing a".to_string()));
/// assert_eq!(try_all!(Ok(false), lookup("a")), Ok(false));
/// ```
#[macro_export]
macro_rules! try_all {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::__try_fold!($crate::And; $first $(, $rest)*)
    };
}

/// Short-circuiting OR over `Result<bool, E>` expressions.
///
/// ```rust
/// use boolfold_core::try_any;
///
/// fn lookup(key: &str) -> Result<bool, String> {
///     Err(format!("missing {key}"))
/// }
///
/// assert_eq!(try_any!(Ok(false), lookup("a")), Err("missing a".to_string()));
/// assert_eq!(try_any!(Ok(true), lookup("a")), Ok(true));
/// ```
#[macro_export]
macro_rules! try_any {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::__try_fold!($crate::Or; $first $(, $rest)*)
    };
}

/// Exclusive OR of two `Result<bool, E>` expressions.
///
/// The second expression is not evaluated if the first is an `Err`.
#[macro_export]
macro_rules! try_either {
    ($condition:expr, $the_other:expr $(,)?) => {
        match $condition {
            ::core::result::Result::Ok(first) => match $the_other {
                ::core::result::Result::Ok(second) => ::core::result::Result::Ok(first != second),
                ::core::result::Result::Err(err) => ::core::result::Result::Err(err),
            },
            ::core::result::Result::Err(err) => ::core::result::Result::Err(err),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __try_fold {
    ($connective:path; $first:expr $(, $rest:expr)*) => {{
        'fold: {
            let verdict: bool = match $first {
                ::core::result::Result::Ok(value) => value,
                ::core::result::Result::Err(err) => break 'fold ::core::result::Result::Err(err),
            };
            $(
                if <$connective as $crate::Connective>::is_decided(verdict) {
                    break 'fold ::core::result::Result::Ok(verdict);
                }
                let verdict: bool = match $rest {
                    ::core::result::Result::Ok(value) => value,
                    ::core::result::Result::Err(err) => break 'fold ::core::result::Result::Err(err),
                };
            )*
            ::core::result::Result::Ok(verdict)
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::Inverted;
    use std::cell::Cell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestError {
        Yes,
        No,
    }

    fn always_throws() -> Result<bool, TestError> {
        Err(TestError::Yes)
    }

    fn should_not_happen() -> Result<bool, TestError> {
        Err(TestError::No)
    }

    fn always_true() -> Result<bool, TestError> {
        Ok(true)
    }

    fn always_false() -> Result<bool, TestError> {
        Ok(false)
    }

    #[test]
    fn test_nested_truth_table() {
        for bits in 0u32..(1 << 5) {
            let a = (bits >> 4) % 2 == 0;
            let b = (bits >> 3) % 2 == 0;
            let c = (bits >> 2) % 2 == 0;
            let d = (bits >> 1) % 2 == 0;
            let e = bits % 2 == 0;

            assert_eq!(
                all!(any!(a, b.inverted(), either!(c, d)), e),
                (a || !b || (c != d)) && e
            );
        }
    }

    #[test]
    fn test_macro_short_circuit() {
        let counter = Cell::new(0);
        let increment = || {
            counter.set(counter.get() + 1);
            true
        };

        assert!(any!(true, increment()));
        assert!(any!(false, true, increment()));
        assert!(!all!(false, increment()));
        assert!(!all!(true, false, increment()));
        assert_eq!(counter.get(), 0);

        assert!(all!(increment()));
        assert_eq!(counter.get(), 1);
        assert!(any!(increment()));
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_macro_mutable_side_effects() {
        let mut seen = Vec::new();
        let result = all!(
            {
                seen.push(1);
                true
            },
            {
                seen.push(2);
                false
            },
            {
                seen.push(3);
                true
            },
        );

        assert!(!result);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_try_macros() {
        assert_eq!(try_all!(always_true()), Ok(true));
        assert_eq!(try_any!(always_true()), Ok(true));
        assert_eq!(try_all!(always_false()), Ok(false));
        assert_eq!(try_any!(always_false()), Ok(false));
        assert_eq!(try_all!(always_throws()), Err(TestError::Yes));
        assert_eq!(try_any!(always_throws()), Err(TestError::Yes));

        assert_eq!(try_all!(Ok(true), always_throws()), Err(TestError::Yes));
        assert_eq!(try_all!(Ok(false), always_throws()), Ok(false));
        assert_eq!(try_any!(Ok(false), always_throws()), Err(TestError::Yes));
        assert_eq!(try_any!(Ok(true), always_throws()), Ok(true));

        assert_eq!(try_either!(Ok(true), always_throws()), Err(TestError::Yes));
        assert_eq!(try_either!(always_throws(), Ok(false)), Err(TestError::Yes));
        assert_eq!(try_either!(always_true(), Ok(false)), Ok(true));
    }

    #[test]
    fn test_try_macros_first_failure_wins() {
        assert_eq!(
            try_all!(Ok(true), always_throws(), should_not_happen()),
            Err(TestError::Yes)
        );
        assert_eq!(
            try_any!(Ok(false), always_throws(), should_not_happen()),
            Err(TestError::Yes)
        );
    }

    #[test]
    fn test_try_macros_nested() {
        let result = try_all!(
            Ok(all!(true)),
            try_either!(try_any!(Ok(true), always_throws()), always_throws()),
        );
        assert_eq!(result, Err(TestError::Yes));
    }

    #[test]
    fn test_mix_and_match() {
        assert!(all!(true || false, true != false));
        assert!(!any!(true && false, true == false));

        let short: Result<bool, TestError> = try_all!(
            always_false().and_then(|v| if v { always_throws() } else { Ok(false) }),
            should_not_happen(),
        );
        assert_eq!(short, Ok(false));

        let short: Result<bool, TestError> = try_any!(
            always_true().and_then(|v| if v { Ok(true) } else { always_throws() }),
            should_not_happen(),
        );
        assert_eq!(short, Ok(true));
    }

    #[test]
    fn test_many_conditions() {
        assert!(all!(
            true, true, true, true, true, true, true, true, true, true, true, true, true, true,
            true, true, true, true, true, true,
        ));
        assert!(!any!(
            false, false, false, false, false, false, false, false, false, false, false, false,
            false, false, false, false, false, false, false, false,
        ));
        assert_eq!(
            try_all!(
                Ok(true), Ok(true), Ok(true), Ok(true), Ok(true), Ok(true), Ok(true), Ok(true),
                Ok(true), Ok(true), Ok(true), Ok(true), Ok(true), Ok(true), Ok(true), Ok(true),
                Ok(true), Ok(true), Ok(true), Ok(true), always_throws(),
            ),
            Err(TestError::Yes)
        );
        assert_eq!(
            try_any!(
                Ok(false), Ok(false), Ok(false), Ok(false), Ok(false), Ok(false), Ok(false),
                Ok(false), Ok(false), Ok(false), Ok(false), Ok(false), Ok(false), Ok(false),
                Ok(false), Ok(false), Ok(false), Ok(false), Ok(false), Ok(false), always_throws(),
            ),
            Err(TestError::Yes)
        );
    }
}
