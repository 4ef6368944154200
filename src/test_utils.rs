use crate::search::{Action, DynamicAction, GoalTest, Problem, SolutionChecker};
use tracing_subscriber::EnvFilter;

/// Route tracing output through the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_line_number(true)
        .compact()
        .try_init();
}

pub fn go(from: char, to: char) -> DynamicAction {
    DynamicAction::new(format!("Go({},{})", from, to))
}

/// Directed graph over named locations, one `Go(from,to)` action per edge.
/// Unlisted step costs default to 1.
fn graph_problem(
    initial: char,
    edges: &'static [(char, char, f64)],
    goal_test: impl GoalTest<char, DynamicAction> + 'static,
) -> Problem<char, DynamicAction> {
    Problem::new(
        initial,
        move |state: &char| -> Vec<DynamicAction> {
            edges
                .iter()
                .filter(|(from, _, _)| from == state)
                .map(|&(from, to, _)| go(from, to))
                .collect()
        },
        move |state: &char, action: &DynamicAction| -> char {
            edges
                .iter()
                .find(|&&(from, to, _)| from == *state && go(from, to) == *action)
                .map(|&(_, to, _)| to)
                .expect("action not applicable")
        },
        goal_test,
    )
    .with_step_cost(move |from: &char, _: &DynamicAction, to: &char| -> f64 {
        edges
            .iter()
            .find(|&&(f, t, _)| f == *from && t == *to)
            .map_or(1., |&(_, _, cost)| cost)
    })
}

const CHAIN: &[(char, char, f64)] = &[('A', 'B', 1.), ('B', 'C', 1.)];

const CYCLE: &[(char, char, f64)] = &[('A', 'B', 1.), ('B', 'A', 1.)];

const DIAMOND: &[(char, char, f64)] = &[
    ('A', 'B', 1.),
    ('A', 'C', 4.),
    ('B', 'D', 5.),
    ('C', 'D', 1.),
];

const SHORTCUT: &[(char, char, f64)] = &[('A', 'C', 1.), ('A', 'B', 1.), ('B', 'C', 1.)];

/// `A -> B -> C` with unit costs, goal `C`.
pub fn chain_problem() -> Problem<char, DynamicAction> {
    chain_problem_from('A')
}

pub fn chain_problem_from(initial: char) -> Problem<char, DynamicAction> {
    graph_problem(initial, CHAIN, |state: &char| *state == 'C')
}

/// `A <-> B`, with the goal `C` unreachable.
pub fn cycle_problem() -> Problem<char, DynamicAction> {
    graph_problem('A', CYCLE, |state: &char| *state == 'C')
}

/// `A -> B -> D` costs 6, `A -> C -> D` costs 5. Goal `D`.
pub fn weighted_diamond_problem() -> Problem<char, DynamicAction> {
    graph_problem('A', DIAMOND, |state: &char| *state == 'D')
}

/// The cycle `A <-> B` unrolled up to `depth_limit` steps. The state carries
/// the depth so that every path ends, which makes tree search terminate.
pub fn bounded_cycle_problem(depth_limit: usize) -> Problem<(char, usize), DynamicAction> {
    let other = |location: char| if location == 'A' { 'B' } else { 'A' };
    Problem::new(
        ('A', 0),
        move |&(location, depth): &(char, usize)| -> Vec<DynamicAction> {
            if depth < depth_limit {
                vec![go(location, other(location))]
            } else {
                vec![]
            }
        },
        move |&(location, depth): &(char, usize), _: &DynamicAction| -> (char, usize) {
            (other(location), depth + 1)
        },
        |state: &(char, usize)| state.0 == 'C',
    )
}

/// An `n` by `n` grid with moves in four directions and no goal.
pub fn grid_problem(n: i32) -> Problem<(i32, i32), DynamicAction> {
    const MOVES: [(&str, i32, i32); 4] = [
        ("Up", 0, 1),
        ("Down", 0, -1),
        ("Left", -1, 0),
        ("Right", 1, 0),
    ];
    Problem::new(
        (0, 0),
        move |&(x, y): &(i32, i32)| -> Vec<DynamicAction> {
            MOVES
                .iter()
                .filter(|(_, dx, dy)| (0..n).contains(&(x + dx)) && (0..n).contains(&(y + dy)))
                .map(|(name, _, _)| DynamicAction::new(*name))
                .collect()
        },
        |&(x, y): &(i32, i32), action: &DynamicAction| -> (i32, i32) {
            let &(_, dx, dy) = MOVES
                .iter()
                .find(|(name, _, _)| *name == action.name())
                .expect("unknown move");
            (x + dx, y + dy)
        },
        |_: &(i32, i32)| false,
    )
}

/// Goal `C`, but only solutions with at least two steps are accepted.
struct AtLeastTwoSteps;

impl GoalTest<char, DynamicAction> for AtLeastTwoSteps {
    fn is_goal_state(&self, state: &char) -> bool {
        *state == 'C'
    }

    fn solution_checker(&self) -> Option<&dyn SolutionChecker<char, DynamicAction>> {
        Some(self)
    }
}

impl SolutionChecker<char, DynamicAction> for AtLeastTwoSteps {
    fn is_acceptable_solution(&self, actions: &[DynamicAction], _goal: &char) -> bool {
        actions.len() >= 2 && actions.iter().all(|action| !action.is_no_op())
    }
}

/// `A -> C` directly or via `B`. The direct route is rejected by the
/// solution checker.
pub fn second_solution_problem() -> Problem<char, DynamicAction> {
    graph_problem('A', SHORTCUT, AtLeastTwoSteps)
}
