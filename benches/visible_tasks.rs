//! Benchmarks for the derived task views recomputed on every frame.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fake::{Fake, Faker};
use todo_tui::state::{State, TaskFilter};
use todo_tui::todos::Task;

fn state_with(count: usize) -> State {
    let tasks: Vec<Task> = (0..count)
        .map(|i| {
            let mut task: Task = Faker.fake();
            task.id = i as u64;
            task
        })
        .collect();
    let mut state = State::default();
    state.set_tasks(tasks);
    state
}

fn bench_visible_tasks(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_tasks");
    for count in [100, 1_000, 10_000] {
        for filter in TaskFilter::ALL {
            let mut state = state_with(count);
            state.set_filter(filter);
            group.bench_with_input(
                BenchmarkId::new(filter.label(), count),
                &state,
                |b, state| b.iter(|| black_box(state.visible_tasks().len())),
            );
        }
    }
    group.finish();
}

fn bench_pending_count(c: &mut Criterion) {
    let state = state_with(10_000);
    c.bench_function("pending_count_10000", |b| {
        b.iter(|| black_box(state.pending_count()))
    });
}

criterion_group!(benches, bench_visible_tasks, bench_pending_count);
criterion_main!(benches);
