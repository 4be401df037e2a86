use price_chart::api::feeds::fuel_history_from_json_str;
use price_chart::api::{FuelKind, RenderModel};
use price_chart::{ChartConfig, ChartPresenter};

#[test]
fn feed_to_render_model_smoke() {
    let payload = r#"{ "gas": [
        { "price_95": "1.65", "price_d": "1.55" },
        { "price_95": "1.68", "price_d": "1.57" },
        { "price_95": "1.66", "price_d": "1.54" }
    ] }"#;
    let dataset =
        fuel_history_from_json_str(payload, &[FuelKind::Petrol95, FuelKind::Diesel])
            .expect("payload");

    let mut presenter = ChartPresenter::new(dataset, &ChartConfig::new(330.0)).expect("presenter");
    presenter.on_pointer_down(165.0);

    let model = presenter.render_model();
    let RenderModel::Chart(chart) = &model else {
        panic!("expected chart model");
    };
    assert_eq!(chart.series.len(), 2);
    assert_eq!(model.selected_index(), Some(1));
    assert!(!chart.series[0].path.to_path_data().is_empty());
}

#[test]
fn telemetry_helper_is_callable() {
    let _ = price_chart::telemetry::init_default_tracing();
}
