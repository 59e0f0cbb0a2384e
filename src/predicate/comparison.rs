//! Curried comparison predicates.
//!
//! Each constructor captures a threshold `x` and returns a predicate over
//! `y` that compares `y` against `x`: `gt(x)(&y)` is `y > x`.

macro_rules! comparator {
    ($(#[$attribute:meta])* $name:ident, $bound:ident, $operator:tt) => {
        $(#[$attribute])*
        pub fn $name<T>(threshold: T) -> impl Fn(&T) -> bool + Clone
        where
            T: $bound + Clone,
        {
            move |value: &T| *value $operator threshold
        }
    };
}

comparator!(
    /// Returns a predicate that holds for values strictly greater than `threshold`.
    ///
    /// ```rust
    /// use lazyseq::predicate::gt;
    ///
    /// assert!(gt(3)(&4));
    /// assert!(!gt(3)(&3));
    /// ```
    gt, PartialOrd, >
);

comparator!(
    /// Returns a predicate that holds for values strictly less than `threshold`.
    ///
    /// ```rust
    /// use lazyseq::predicate::lt;
    ///
    /// assert!(lt(3.5)(&1.0));
    /// assert!(!lt(3.5)(&3.5));
    /// ```
    lt, PartialOrd, <
);

comparator!(
    /// Returns a predicate that holds for values greater than or equal to `threshold`.
    ///
    /// ```rust
    /// use lazyseq::predicate::gte;
    ///
    /// assert!(gte(3)(&3));
    /// assert!(!gte(3)(&2));
    /// ```
    gte, PartialOrd, >=
);

comparator!(
    /// Returns a predicate that holds for values less than or equal to `threshold`.
    ///
    /// ```rust
    /// use lazyseq::predicate::lte;
    ///
    /// assert!(lte('m')(&'a'));
    /// assert!(!lte('m')(&'z'));
    /// ```
    lte, PartialOrd, <=
);

comparator!(
    /// Returns a predicate that holds for values equal to `threshold`.
    ///
    /// ```rust
    /// use lazyseq::predicate::eq;
    ///
    /// assert!(eq(String::from("lazy"))(&String::from("lazy")));
    /// assert!(!eq(0)(&1));
    /// ```
    eq, PartialEq, ==
);
