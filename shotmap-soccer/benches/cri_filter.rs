use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shotmap_soccer::domain::{Event, Location};
use shotmap_soccer::filter::{filter_events, player_events};
use shotmap_soccer::stats::outcome_breakdown;

const PLAYERS: [&str; 4] = ["Jamie Vardy", "Riyad Mahrez", "Danny Drinkwater", "N'Golo Kanté"];
const TYPES: [&str; 5] = ["Pass", "Carry", "Ball Receipt*", "Pressure", "Shot"];
const OUTCOMES: [&str; 6] = ["Blocked", "Goal", "Off T", "Post", "Saved", "Wayward"];

fn synthetic_events(n: usize) -> Vec<Event> {
    (0..n)
        .map(|i| {
            let event_type = TYPES[i * 3 % TYPES.len()];
            let is_shot = event_type == "Shot";
            Event {
                id: format!("e{i}"),
                match_id: (i / 3000) as u64,
                index: i as u32,
                player: Some(PLAYERS[i % PLAYERS.len()].to_owned()),
                event_type: event_type.to_owned(),
                outcome: is_shot.then(|| OUTCOMES[i % OUTCOMES.len()].to_owned()),
                location: Some(Location::new((i % 120) as f64, (i % 80) as f64)),
                xg: is_shot.then(|| (i % 90) as f64 / 100.0),
            }
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let events = synthetic_events(3000);
    c.bench_function("cri_filter_player_shots_3000", |b| {
        b.iter(|| {
            filter_events(
                black_box(events.clone()),
                player_events("Jamie Vardy", "Shot"),
            )
        });
    });

    let shots = filter_events(events, player_events("Jamie Vardy", "Shot"));
    c.bench_function("cri_filter_outcome_breakdown", |b| {
        b.iter(|| outcome_breakdown(black_box(&shots)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
