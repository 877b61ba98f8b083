use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use tracing_subscriber::EnvFilter;

use gpui_dragselect::{
    AxisId, Color, GpuiSelectionView, PluginOptions, RangeSpec, SelectionConfig, SelectionEvent,
    SelectionViewConfig, ValueRange, ViewAxis,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(480.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let mut selection = SelectionConfig::default();
            selection.selector.color = Some(Color::from_rgb_hex(0x3A7BD5));

            let config = SelectionViewConfig {
                axes: vec![
                    ViewAxis::linear(AxisId::x(), ValueRange::new(0.0, 60.0)),
                    ViewAxis::linear(AxisId::y(), ValueRange::new(-1.0, 1.0)),
                ],
                background: Some(Color::from_rgb_hex(0x1E1E24)),
            };

            let view = GpuiSelectionView::with_config(PluginOptions::enabled(selection), config);
            view.subscribe(|event| match event {
                SelectionEvent::Selecting(_) => {}
                SelectionEvent::Selected { ranges, .. } => {
                    for (axis, range) in ranges.iter() {
                        tracing::info!(axis, from = range.from, to = range.to, "selected");
                    }
                }
                SelectionEvent::Unselected => tracing::info!("unselected"),
            });

            cx.new(|cx| {
                let mut view = view;
                let initial = RangeSpec::new().with_axis("xaxis", 10.0, 25.0);
                if let Err(err) = view.set_selection(&initial, true, cx) {
                    tracing::warn!(%err, "initial selection rejected");
                }
                view
            })
        })
        .unwrap();
    });
}
