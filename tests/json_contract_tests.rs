use price_chart::api::{
    ChartConfig, ChartInput, DEFAULT_CHART_HEIGHT, FuelKind, RenderModel, recompute,
};

#[test]
fn config_fills_defaults_from_minimal_json() {
    let config = ChartConfig::from_json_str(r#"{ "width": 330.0 }"#).expect("config");

    assert_eq!(config.height, DEFAULT_CHART_HEIGHT);
    assert_eq!(config.horizontal_padding, 15.0);
    assert_eq!(config.vertical_padding, 20.0);
    assert_eq!(config.options.extrema_min_distance, 3);
    assert_eq!(config.options.grid_line_count, 5);
    assert!(!config.render_style.show_extrema_markers);
}

#[test]
fn config_overrides_are_read() {
    let config = ChartConfig::from_json_str(
        r#"{
            "width": 200.0,
            "height": 150.0,
            "horizontal_padding": 0.0,
            "vertical_padding": 0.0,
            "options": { "extrema_min_distance": 5, "electricity_unit_suffix": "c/kWh" },
            "render_style": { "show_extrema_markers": true }
        }"#,
    )
    .expect("config");

    assert_eq!(config.height, 150.0);
    assert_eq!(config.options.extrema_min_distance, 5);
    assert_eq!(config.options.grid_line_count, 5);
    assert_eq!(config.options.electricity_unit_suffix, "c/kWh");
    assert_eq!(config.options.fuel_unit_suffix, "€/L");
    assert!(config.render_style.show_extrema_markers);
    assert_eq!(config.render_style.series_line_width, 2.5);
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartConfig::new(330.0)
        .with_height(200.0)
        .with_padding(10.0, 12.0)
        .with_grid_line_count(3);
    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartConfig::from_json_str(&json).expect("parse");

    assert_eq!(restored.width, 330.0);
    assert_eq!(restored.height, 200.0);
    assert_eq!(restored.horizontal_padding, 10.0);
    assert_eq!(restored.vertical_padding, 12.0);
    assert_eq!(restored.options, config.options);
    assert!(
        (restored.render_style.grid_line_color.red - config.render_style.grid_line_color.red)
            .abs()
            <= 1e-12
    );
}

#[test]
fn invalid_config_json_is_rejected() {
    assert!(ChartConfig::from_json_str("{}").is_err());
    assert!(ChartConfig::from_json_str(r#"{ "width": -5.0 }"#).is_err());
    assert!(ChartConfig::from_json_str("nope").is_err());
}

#[test]
fn render_model_contract_v1_round_trips() {
    let dataset = vec![
        FuelKind::Petrol95.series(&[1.6, 1.7, 1.65]),
        FuelKind::Electricity.series(&[9.5, 10.25]),
    ];
    let input = ChartInput::from_config(dataset, &ChartConfig::new(330.0))
        .expect("input")
        .with_selection(Some(1));
    let model = recompute(&input);

    let json = model.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"state\": \"chart\""));

    let restored = RenderModel::from_json_contract_v1_str(&json).expect("parse");
    let original = model.chart().expect("chart");
    let restored = restored.chart().expect("restored chart");

    assert_eq!(restored.series.len(), original.series.len());
    assert_eq!(restored.reference_len, original.reference_len);
    assert_eq!(restored.series[1].id, "EL");
    assert_eq!(restored.series[0].extrema, original.series[0].extrema);
    assert_eq!(restored.series[0].path.len(), original.series[0].path.len());
    for (a, b) in restored.series[0]
        .path
        .points
        .iter()
        .zip(&original.series[0].path.points)
    {
        assert!((a.x - b.x).abs() <= 1e-9);
        assert!((a.y - b.y).abs() <= 1e-9);
    }

    let selection = restored.selection.as_ref().expect("selection");
    assert_eq!(selection.index, 1);
    assert_eq!(selection.readouts.len(), 2);
    assert_eq!(selection.readouts[0].formatted_price, "1.70 €/L");
}

#[test]
fn render_model_without_schema_version_is_rejected() {
    let input = ChartInput::from_config(Vec::new(), &ChartConfig::new(330.0)).expect("input");
    let model = recompute(&input);
    let bare = serde_json::to_string(&model).expect("serialize");

    assert!(RenderModel::from_json_contract_v1_str(&bare).is_err());
    let versioned = model.to_json_contract_v1_pretty().expect("serialize");
    let restored = RenderModel::from_json_contract_v1_str(&versioned).expect("parse");
    assert!(restored.is_no_data());
}

#[test]
fn unknown_schema_version_is_rejected() {
    let input = ChartInput::from_config(Vec::new(), &ChartConfig::new(330.0)).expect("input");
    let json = recompute(&input)
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");
    assert!(RenderModel::from_json_contract_v1_str(&json).is_err());
}
