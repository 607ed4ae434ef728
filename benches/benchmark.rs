use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
};
use rand::{rngs::StdRng, SeedableRng};

use driftbox::prelude::*;
use glam::DVec2;

const DT: f64 = 1.0 / 60.0;

fn simulation(count: usize) -> ParticleSimulation {
    let mut rng = StdRng::seed_from_u64(0);
    let bounds = Bounds::new(-10.0, 10.0, -10.0, 10.0).unwrap();

    ParticleSimulation::with_rng(count, 1.0, 0.5, bounds, &mut rng).unwrap()
}

fn tick<C: ComputeMethod>(simulation: &mut ParticleSimulation, mut cm: C) {
    simulation.step_with(DT, &mut cm).unwrap();
    simulation
        .apply_attractor_with(100.0, DVec2::new(1.0, -2.0), &mut cm)
        .unwrap();
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Driftbox");
    group
        .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(50);

    for i in (2..=18).step_by(2).map(|i| 2_usize.pow(i)) {
        #[cfg(feature = "parallel")]
        {
            let mut simulation = simulation(i);
            group.bench_function(BenchmarkId::new("parallel::PerParticle", i), |b| {
                b.iter(|| tick(&mut simulation, parallel::PerParticle))
            });
        }

        {
            let mut simulation = simulation(i);
            group.bench_function(BenchmarkId::new("sequential::PerParticle", i), |b| {
                b.iter(|| tick(&mut simulation, sequential::PerParticle))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
