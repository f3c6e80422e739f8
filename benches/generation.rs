use criterion::{black_box, criterion_group, criterion_main, Criterion};
use warband::{
    generate_combos, known_challenge_ratings, prepare_catalog, CombatRole, ComboConstraints,
    Creature, Difficulty, ThemeFilter,
};

fn synthetic_catalog(size: usize) -> Vec<Creature> {
    let labels: Vec<_> = known_challenge_ratings().take(20).collect();
    let roles = CombatRole::all();
    (0..size)
        .map(|i| {
            Creature::new(
                format!("Creature {}", i),
                format!("creature-{}.html", i),
                labels[(i * 7) % labels.len()],
                roles[i % roles.len()],
            )
            .with_keywords([if i % 3 == 0 { "undead" } else { "humanoid" }])
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let catalog = synthetic_catalog(500);

    for level in [1, 5, 10] {
        let constraints = ComboConstraints::for_party(level, 4, Difficulty::Moderate);
        let eligible = prepare_catalog(&catalog, &constraints, &ThemeFilter::any());
        c.bench_function(&format!("generate_combos level {}", level), |b| {
            b.iter(|| generate_combos(black_box(&eligible), black_box(&constraints)))
        });
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
