//! Goal tests decide which states end a search.

/// Determines whether a given state is a goal state.
pub trait GoalTest<S, A> {
    fn is_goal_state(&self, state: &S) -> bool;

    /// Goal tests that can also reject a found solution return themselves
    /// here. A rejected solution makes the search carry on as if the state
    /// were not a goal, which allows several solutions to be inspected within
    /// one search run.
    fn solution_checker(&self) -> Option<&dyn SolutionChecker<S, A>> {
        None
    }
}

/// Second stage of a goal test, consulted only after
/// [`GoalTest::is_goal_state`] accepted the state.
pub trait SolutionChecker<S, A> {
    fn is_acceptable_solution(&self, actions: &[A], goal: &S) -> bool;
}

impl<S, A, F> GoalTest<S, A> for F
where
    F: Fn(&S) -> bool,
{
    fn is_goal_state(&self, state: &S) -> bool {
        self(state)
    }
}

/// Goal test that checks for equality with a single goal state.
#[derive(Debug, Clone)]
pub struct DefaultGoalTest<S> {
    goal_state: S,
}

impl<S: PartialEq> DefaultGoalTest<S> {
    pub fn new(goal_state: S) -> Self {
        Self { goal_state }
    }

    pub fn goal_state(&self) -> &S {
        &self.goal_state
    }
}

impl<S: PartialEq, A> GoalTest<S, A> for DefaultGoalTest<S> {
    fn is_goal_state(&self, state: &S) -> bool {
        self.goal_state == *state
    }
}
