//! Performance benchmarks for rating and matchmaking

use courtside::matchmaker::pick_match;
use courtside::rating::calculate_rating;
use courtside::roster::{InMemoryRoster, RosterStore};
use courtside::types::{MatchPolicy, Player, PlayerStats};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn create_bench_roster(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| Player {
            id: i as u64 + 1,
            name: format!("player_{}", i),
            rating: 2.0 + (i as f64 * 0.27) % 18.0,
            stats: PlayerStats::default(),
        })
        .collect()
}

fn bench_rating_calculation(c: &mut Criterion) {
    let stats = PlayerStats {
        experience: 6.0,
        competition_level: 7.5,
        height: 5.0,
        weight: 4.5,
        wingspan: 6.0,
        shooting: 8.0,
        dribbling: 7.0,
        speed: 6.5,
        agility: 7.0,
    };

    c.bench_function("rating_calculation", |b| {
        b.iter(|| black_box(calculate_rating(black_box(&stats))))
    });
}

fn bench_closest_rating_pick(c: &mut Criterion) {
    let players = create_bench_roster(64);

    c.bench_function("closest_rating_pick_64_players", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(pick_match(&players, MatchPolicy::ClosestRating, &mut rng)))
    });
}

fn bench_random_pick(c: &mut Criterion) {
    let players = create_bench_roster(64);

    c.bench_function("random_pick_64_players", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(pick_match(&players, MatchPolicy::Random, &mut rng)))
    });
}

fn bench_signup_flow(c: &mut Criterion) {
    c.bench_function("roster_signup_5_players", |b| {
        b.iter(|| {
            let roster = InMemoryRoster::new();
            for i in 0..5 {
                let stats = PlayerStats {
                    shooting: 5.0 + (i as f64 * 0.5),
                    ..PlayerStats::default()
                };
                let _ = roster.register(&format!("player_{}", i), stats);
            }
            black_box(roster.count())
        })
    });
}

criterion_group!(
    benches,
    bench_rating_calculation,
    bench_closest_rating_pick,
    bench_random_pick,
    bench_signup_flow
);
criterion_main!(benches);
