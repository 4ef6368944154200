//! Helpers shared by the search engines: goal testing with optional solution
//! checking, and turning a goal node back into a plan.

use crate::search::{Action, NodeId, PathCost, Plan, Problem, SearchSpace};

/// Returns the actions along the path from the root to the given node. If the
/// node is the root itself the start state was already a goal, and the plan
/// is a single no-op.
pub fn sequence_of_actions<S, A: Action>(
    space: &SearchSpace<S, A>,
    node_id: NodeId,
) -> Plan<A> {
    let path = space.path_from_root(node_id);
    if path.len() == 1 {
        return Plan::no_op();
    }

    // The root has no incoming action, hence it is skipped.
    let steps = path
        .into_iter()
        .skip(1)
        .filter_map(|id| space.get_node(id).get_action().cloned())
        .collect();
    Plan::new(steps)
}

pub fn failure<A: Action>() -> Plan<A> {
    Plan::failure()
}

pub fn is_failure<A>(actions: &[A]) -> bool {
    actions.is_empty()
}

/// Calls the goal test of the problem and, if the goal test comes with a
/// solution checker, additionally checks whether the solution leading to the
/// node is acceptable.
pub fn is_goal_state<S, A: Action>(
    problem: &Problem<S, A>,
    space: &SearchSpace<S, A>,
    node_id: NodeId,
) -> bool {
    let goal_test = problem.goal_test();
    let state = space.get_state(node_id);
    if !goal_test.is_goal_state(state) {
        return false;
    }
    match goal_test.solution_checker() {
        Some(checker) => {
            checker.is_acceptable_solution(&sequence_of_actions(space, node_id), state)
        }
        None => true,
    }
}

/// The path cost of a node, i.e. `g(n)`.
pub fn path_cost<S, A>(space: &SearchSpace<S, A>, node_id: NodeId) -> PathCost {
    space.get_node(node_id).get_path_cost()
}
