// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use journeyplot::config::ChartConfig;
use journeyplot::interaction::{CellPos, InteractionState, Selection};
use journeyplot::model::Dataset;
use journeyplot::render::build_scene;
use journeyplot::resolve::{annotate_phase, phase_at, HoverSample};

// Benchmark identity (keep stable):
// - Group names in this file: `resolve.hover`, `resolve.annotate`, `render.scene`.
// - Case IDs must remain stable across refactors so results stay comparable over time.
fn criterion() -> Criterion {
    Criterion::default()
        .sample_size(60)
        .warm_up_time(Duration::from_secs(2))
}

fn benches_hover(c: &mut Criterion) {
    let dataset = Dataset::demo().expect("demo dataset");
    let phases = dataset.phases().as_slice();
    let samples: Vec<f64> = (0..=900u32).map(f64::from).collect();

    let mut group = c.benchmark_group("resolve.hover");
    group.throughput(Throughput::Elements(samples.len() as u64));
    group.bench_function("sweep_demo", |b| {
        b.iter(|| {
            samples
                .iter()
                .filter(|&&x| phase_at(black_box(phases), x).is_some())
                .count()
        })
    });
    group.bench_function("apply_sample", |b| {
        let mut state = InteractionState::default();
        b.iter(|| {
            HoverSample::resolve(phases, black_box(612.0), CellPos::new(40, 10)).apply(&mut state);
            black_box(state.hover_label().is_some())
        })
    });
    group.finish();
}

fn benches_annotate(c: &mut Criterion) {
    let dataset = Dataset::demo().expect("demo dataset");
    let config = ChartConfig::default();

    let mut group = c.benchmark_group("resolve.annotate");
    group.throughput(Throughput::Elements(dataset.phases().len() as u64));
    group.bench_function("all_phases", |b| {
        b.iter(|| {
            dataset
                .phases()
                .iter()
                .map(|phase| {
                    annotate_phase(phase, dataset.notes(), &config.important_points)
                        .points()
                        .len()
                })
                .sum::<usize>()
        })
    });
    group.finish();
}

fn benches_scene(c: &mut Criterion) {
    let dataset = Dataset::demo().expect("demo dataset");
    let config = ChartConfig::default();
    let mut state = InteractionState::new(Selection::new(config.characters.iter().cloned()));
    state.set_hover(Some("The Ordeal"), CellPos::new(50, 12), 430.0);

    let mut group = c.benchmark_group("render.scene");
    group.bench_function("all_characters_hovered", |b| {
        b.iter(|| build_scene(&dataset, &config, black_box(&state)).markers.len())
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = criterion();
    targets = benches_hover, benches_annotate, benches_scene
}
criterion_main!(benches);
