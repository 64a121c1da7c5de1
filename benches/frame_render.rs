// Enable the optional `bench` feature when running Criterion benches.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulsechat::ui::network_canvas::NetworkCanvas;
use pulsechat::utils::color::ColorDepth;
use pulsechat::visualizer::display_list::DisplayList;
use pulsechat::visualizer::{AnimationEngine, EngineConfig, GraphShape, SurfaceSize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

fn engine_for(shape: GraphShape, size: SurfaceSize) -> AnimationEngine<StdRng> {
    let config = EngineConfig {
        shape,
        ..EngineConfig::default()
    };
    AnimationEngine::new(config, size, StdRng::seed_from_u64(42))
}

fn bench_frame_render(c: &mut Criterion) {
    let size = SurfaceSize::new(640.0, 160.0);
    let mut group = c.benchmark_group("frame_render");

    for (layers, per_layer) in [(5usize, 8usize), (8, 16)] {
        let shape = GraphShape {
            layer_count: layers,
            nodes_per_layer: per_layer,
        };
        let mut engine = engine_for(shape, size);
        let mut list = DisplayList::with_extent(size);
        let label = format!("{layers}x{per_layer}");

        group.throughput(Throughput::Elements(engine.graph().edges().len() as u64));
        group.bench_function(BenchmarkId::new("engine", &label), |b| {
            b.iter(|| engine.render_frame(&mut list))
        });

        // Engine step plus braille rasterization of the result.
        let area = Rect::new(0, 0, 80, 10);
        let mut buf = Buffer::empty(area);
        group.bench_function(BenchmarkId::new("engine_and_canvas", &label), |b| {
            b.iter(|| {
                engine.render_frame(&mut list);
                NetworkCanvas::new(&list, Color::Rgb(15, 17, 23), ColorDepth::Truecolor)
                    .render(area, &mut buf);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame_render);
criterion_main!(benches);
