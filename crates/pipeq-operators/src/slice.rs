//! Positional stages: take/skip (and their `while` forms) and reverse.
//!
//! `take(n)` and `skip(n)` clamp `n` into `[0, len]` instead of faulting. The
//! source allocation is reused: take truncates, skip drains the prefix.

use pipeq_core::config::QueryConfig;
use pipeq_core::error::Result;

use crate::scan::while_len;
use crate::traits::Operator;

fn clamp(n: isize, len: usize) -> usize {
    usize::try_from(n).unwrap_or(0).min(len)
}

#[derive(Debug, Clone, Copy)]
pub struct Take {
    pub n: isize,
}

impl<T> Operator<T> for Take {
    type Output = T;

    fn name(&self) -> &'static str {
        "take"
    }

    fn eval(&mut self, mut input: Vec<T>, _cfg: &QueryConfig) -> Result<Vec<T>> {
        let n = clamp(self.n, input.len());
        input.truncate(n);
        Ok(input)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skip {
    pub n: isize,
}

impl<T> Operator<T> for Skip {
    type Output = T;

    fn name(&self) -> &'static str {
        "skip"
    }

    fn eval(&mut self, mut input: Vec<T>, _cfg: &QueryConfig) -> Result<Vec<T>> {
        let n = clamp(self.n, input.len());
        input.drain(..n);
        Ok(input)
    }
}

/// Longest prefix whose elements all satisfy the predicate.
pub struct TakeWhile<F> {
    pub predicate: Option<F>,
}

/// Everything after the longest satisfying prefix.
pub struct SkipWhile<F> {
    pub predicate: Option<F>,
}

macro_rules! while_op {
    ($name:ident, $label:literal, $delegate:ident) => {
        impl<F> $name<F> {
            pub fn new(predicate: F) -> Self {
                Self {
                    predicate: Some(predicate),
                }
            }
        }

        impl<F> Default for $name<F> {
            fn default() -> Self {
                Self { predicate: None }
            }
        }

        impl<T, F> Operator<T> for $name<F>
        where
            F: FnMut(&T) -> Result<bool>,
        {
            type Output = T;

            fn name(&self) -> &'static str {
                $label
            }

            fn eval(&mut self, input: Vec<T>, cfg: &QueryConfig) -> Result<Vec<T>> {
                let n = while_len(&input, self.predicate.as_mut())?;
                $delegate { n: n as isize }.eval(input, cfg)
            }
        }
    };
}

while_op!(TakeWhile, "take_while", Take);
while_op!(SkipWhile, "skip_while", Skip);

#[derive(Debug, Default, Clone, Copy)]
pub struct Reverse;

impl<T> Operator<T> for Reverse {
    type Output = T;

    fn name(&self) -> &'static str {
        "reverse"
    }

    fn eval(&mut self, mut input: Vec<T>, _cfg: &QueryConfig) -> Result<Vec<T>> {
        input.reverse();
        Ok(input)
    }
}
