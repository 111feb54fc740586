/// Asserts that an expression matches a pattern, printing the value on failure.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables)]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn matches() {
        assert_matches!(Some(3), Some(_));
        assert_matches!(Ok::<_, ()>(7), Ok(x) if *x > 5);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn no_match() {
        assert_matches!(None::<u8>, Some(_));
    }

    #[test]
    #[should_panic(expected = "does not match predicate")]
    fn predicate_fails() {
        assert_matches!(Some(1), Some(x) if *x > 5);
    }
}
