//! The formal description of a state space: initial state, applicable
//! actions, transition model, goal test and step costs. A [`Problem`] has no
//! behaviour of its own, the engine only queries it.
//!
//! Every function must be deterministic for a given state. Nothing is
//! validated here; a function that panics takes the whole search down with
//! it.

use crate::search::GoalTest;

/// Lists the actions applicable in a state, in the order they should be
/// tried.
pub trait ActionsFunction<S, A> {
    fn actions(&self, state: &S) -> Vec<A>;
}

/// Transition model: the state reached by applying an action.
pub trait ResultFunction<S, A> {
    fn result(&self, state: &S, action: &A) -> S;
}

/// Cost of moving from one state to another via an action. Costs are
/// expected to be non-negative.
pub trait StepCostFunction<S, A> {
    fn step_cost(&self, from: &S, action: &A, to: &S) -> f64;
}

impl<S, A, F> ActionsFunction<S, A> for F
where
    F: Fn(&S) -> Vec<A>,
{
    fn actions(&self, state: &S) -> Vec<A> {
        self(state)
    }
}

impl<S, A, F> ResultFunction<S, A> for F
where
    F: Fn(&S, &A) -> S,
{
    fn result(&self, state: &S, action: &A) -> S {
        self(state, action)
    }
}

impl<S, A, F> StepCostFunction<S, A> for F
where
    F: Fn(&S, &A, &S) -> f64,
{
    fn step_cost(&self, from: &S, action: &A, to: &S) -> f64 {
        self(from, action, to)
    }
}

/// Every step costs 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStepCost;

impl<S, A> StepCostFunction<S, A> for DefaultStepCost {
    fn step_cost(&self, _from: &S, _action: &A, _to: &S) -> f64 {
        1.
    }
}

pub struct Problem<S, A> {
    initial_state: S,
    actions_function: Box<dyn ActionsFunction<S, A>>,
    result_function: Box<dyn ResultFunction<S, A>>,
    goal_test: Box<dyn GoalTest<S, A>>,
    step_cost_function: Box<dyn StepCostFunction<S, A>>,
}

impl<S, A> Problem<S, A> {
    /// Create a problem with unit step costs. Use
    /// [`Problem::with_step_cost`] to change that.
    pub fn new(
        initial_state: S,
        actions_function: impl ActionsFunction<S, A> + 'static,
        result_function: impl ResultFunction<S, A> + 'static,
        goal_test: impl GoalTest<S, A> + 'static,
    ) -> Self {
        Self {
            initial_state,
            actions_function: Box::new(actions_function),
            result_function: Box::new(result_function),
            goal_test: Box::new(goal_test),
            step_cost_function: Box::new(DefaultStepCost),
        }
    }

    pub fn with_step_cost(
        mut self,
        step_cost_function: impl StepCostFunction<S, A> + 'static,
    ) -> Self {
        self.step_cost_function = Box::new(step_cost_function);
        self
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    pub fn actions(&self, state: &S) -> Vec<A> {
        self.actions_function.actions(state)
    }

    pub fn result(&self, state: &S, action: &A) -> S {
        self.result_function.result(state, action)
    }

    pub fn step_cost(&self, from: &S, action: &A, to: &S) -> f64 {
        self.step_cost_function.step_cost(from, action, to)
    }

    pub fn goal_test(&self) -> &dyn GoalTest<S, A> {
        self.goal_test.as_ref()
    }

    /// Plain goal test, without consulting any solution checker.
    pub fn is_goal_state(&self, state: &S) -> bool {
        self.goal_test.is_goal_state(state)
    }
}

impl<S: std::fmt::Debug, A> std::fmt::Debug for Problem<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("initial_state", &self.initial_state)
            .finish_non_exhaustive()
    }
}
