//! Step operation benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use endpoint_steps::{ReplayClient, ScenarioContext};
use std::sync::Arc;

fn benchmark_scenario_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("endpoint_steps_scenario");

    for status in [200u16, 404, 503].iter() {
        group.bench_with_input(
            BenchmarkId::new("set_send_assert", status),
            status,
            |b, &status| {
                let client = Arc::new(ReplayClient::status(status));
                b.iter(|| {
                    let mut ctx = ScenarioContext::with_client(client.clone());
                    ctx.set_endpoint(format!("http://localhost/status/{status}"));
                    tokio_test::block_on(ctx.send_get_request()).ok();
                    black_box(ctx.assert_status_code(status).is_ok())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_scenario_steps);
criterion_main!(benches);
