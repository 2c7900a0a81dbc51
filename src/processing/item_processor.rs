// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element-wise transformation of sequences.

/// Applies a function to every element of a sequence.
///
/// All operations return a new sequence with exactly one output per input, in
/// input order. The function is expected to be pure; a panic inside it
/// propagates to the caller unchanged.
///
/// # Examples
///
/// ```rust
/// use jsoncfg::processing::ItemProcessor;
///
/// let doubled = ItemProcessor::apply(&[1, 2, 3, 4, 5], |x| x * 2);
/// assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
///
/// let excited = ItemProcessor::apply(&["hello".to_string(), "world".to_string()], |s| {
///     format!("{}!", s)
/// });
/// assert_eq!(excited, vec!["hello!", "world!"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemProcessor;

impl ItemProcessor {
    /// Maps `f` over borrowed items.
    pub fn apply<T, F>(items: &[T], f: F) -> Vec<T>
    where
        F: Fn(&T) -> T,
    {
        let mut result = Vec::with_capacity(items.len());
        result.extend(items.iter().map(f));
        result
    }

    /// Maps `f` over owned items, reusing nothing but the caller's values.
    pub fn apply_owned<T, F>(items: Vec<T>, f: F) -> Vec<T>
    where
        F: FnMut(T) -> T,
    {
        items.into_iter().map(f).collect()
    }

    /// Maps a fallible `f` over the items, stopping at the first error.
    ///
    /// ```rust
    /// use jsoncfg::processing::ItemProcessor;
    ///
    /// let checked = ItemProcessor::try_apply(&[1u8, 2, 200], |x| x.checked_mul(2).ok_or(*x));
    /// assert_eq!(checked, Err(200));
    /// ```
    pub fn try_apply<T, E, F>(items: &[T], f: F) -> Result<Vec<T>, E>
    where
        F: Fn(&T) -> Result<T, E>,
    {
        items.iter().map(f).collect()
    }

    /// Maps `f` over the items on the rayon thread pool.
    ///
    /// Output order matches input order regardless of scheduling.
    #[cfg(feature = "parallel")]
    pub fn par_apply<T, F>(items: &[T], f: F) -> Vec<T>
    where
        T: Send + Sync,
        F: Fn(&T) -> T + Send + Sync,
    {
        use rayon::prelude::*;
        items.par_iter().map(f).collect()
    }
}
