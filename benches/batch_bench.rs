use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gem_appraisal::batch::{process_batch, AutoCutter, BatchRequest, GemPlan};
use gem_appraisal::catalog::{self, CATEGORIES};
use gem_appraisal::core::{EngineConfig, GemRng};
use gem_appraisal::retainer::{RetainerRequest, RetainerState};

fn batch_of(count: usize, seed: u64) -> BatchRequest {
    let mut rng = GemRng::new(seed).for_context("catalog");
    let plans: Vec<GemPlan> = (0..count)
        .map(|_| {
            let (category, _) = catalog::roll_for_category(&mut rng);
            let (kind, _) = catalog::roll_for_gem(category, &mut rng);
            GemPlan::from(kind)
        })
        .collect();
    BatchRequest::new(plans).with_category(CATEGORIES[0].name)
}

fn bench_batch(c: &mut Criterion) {
    let mut rng = GemRng::new(7);
    let retainer = RetainerState::idle()
        .hire(
            &RetainerRequest::new("Gnome", 1).with_declared_tier("Superb"),
            &EngineConfig::default(),
            &mut rng,
        )
        .map(|hired| hired.state)
        .unwrap_or_default();

    for count in [10usize, 100] {
        let request = batch_of(count, 42);
        c.bench_function(&format!("process_batch_{}", count), |b| {
            b.iter(|| {
                let mut dice = GemRng::new(1);
                let result = process_batch(&retainer, black_box(&request), &mut dice, &mut AutoCutter::new(5));
                black_box(result.map(|r| r.total_final_value).unwrap_or(0))
            })
        });
    }
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
