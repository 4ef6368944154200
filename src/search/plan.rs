//! A plan is a sequence of actions that leads from the initial state of a
//! problem to a goal. This module provides the [`Plan`] struct. An empty plan
//! is the normal way a search reports that no goal could be reached.

use crate::search::Action;
use itertools::Itertools;
use std::fmt::Display;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A: Action> Plan<A> {
    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    /// The plan returned when a search exhausts its frontier.
    pub fn failure() -> Self {
        Self { steps: vec![] }
    }

    /// The plan returned when the initial state is already a goal: a single
    /// no-op step.
    pub fn no_op() -> Self {
        Self {
            steps: vec![A::no_op()],
        }
    }

    pub fn is_failure(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<A: Display> Display for Plan<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<A> DerefMut for Plan<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.steps
    }
}
