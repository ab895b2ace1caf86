use bacrama_match::evaluator::{fixture_line, BANNER};
use bacrama_match::{FixedScore, MatchEvaluator, Team};
use env_logger::Env;

fn main() {
    // Diagnostics go to stderr, stdout only carries the announcement
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    println!("{BANNER}");
    let team_a = Team::new("France", 19);
    let team_b = Team::new("Bresil", 17);
    println!("{}", fixture_line(&team_a, &team_b));

    let mut evaluator = MatchEvaluator::new(FixedScore::default());
    let report = evaluator.evaluate(&team_a, &team_b);
    println!("{}", report.result_line());
}
