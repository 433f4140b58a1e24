use lottomax_core::{play_session, DrawGenerator, PlayRequest, ProvablyFairRng, WinningLineSource};

fn main() {
    // Example end-to-end play with a generated winning line
    let rng = ProvablyFairRng::new("example-server-seed", "example-client-seed", 1);
    println!("server_seed_hash={}", rng.server_seed_hash_hex());
    let mut draws = DrawGenerator::new(rng);
    let request = PlayRequest::new(5, true).expect("5 lines is in range");
    let outcome = play_session(&mut draws, &WinningLineSource::default(), None, request);
    for (i, line) in outcome.ticket_lines.iter().enumerate() {
        println!("line {}: {}", i + 1, line);
    }
    println!(
        "winning={} ({}) cost={} payout={}",
        outcome.winning.line, outcome.winning.origin, outcome.cost, outcome.evaluation.total
    );
}
