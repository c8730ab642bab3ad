//! Chart Workflow Integration Tests

use crate::helpers::{controller_with_sales_table, workbook_bytes, xlsx_meta};
use serde_json::json;
use sheetlens::data::{DataError, TraceValue};
use sheetlens::types::ChartType;

#[test]
fn test_decoded_sales_table_builds_bar_trace() {
    let controller = controller_with_sales_table();

    let spec = controller.current_chart().unwrap().unwrap();
    let trace = &spec.traces[0];
    assert_eq!(trace.trace_type, "bar");
    assert_eq!(
        trace.x,
        Some(vec![
            TraceValue::Text("Alice".into()),
            TraceValue::Text("Bob".into()),
        ])
    );
    assert_eq!(trace.y, Some(vec![Some(10.0), Some(20.0)]));
    assert_eq!(spec.layout.title, "Sales vs Name");
}

#[test]
fn test_every_chart_type_builds_from_the_same_selection() {
    let mut controller = controller_with_sales_table();

    for &chart_type in ChartType::all() {
        controller.set_chart_type(chart_type);
        let spec = controller.current_chart().unwrap();
        assert!(spec.is_ok(), "{chart_type:?} failed: {spec:?}");
    }
}

#[test]
fn test_chart_json_payload_for_the_rendering_widget() {
    let mut controller = controller_with_sales_table();
    controller.set_chart_type(ChartType::Line);

    let spec = controller.current_chart().unwrap().unwrap();
    assert_eq!(
        serde_json::to_value(&spec.traces).unwrap(),
        json!([{
            "type": "scatter",
            "mode": "lines+markers",
            "x": ["Alice", "Bob"],
            "y": [10.0, 20.0],
        }])
    );
}

#[test]
fn test_selection_survives_chart_type_changes_only() {
    let mut controller = controller_with_sales_table();
    controller.set_chart_type(ChartType::Pie);
    let pie = controller.current_chart().unwrap().unwrap();
    controller.set_chart_type(ChartType::Bar);
    let bar = controller.current_chart().unwrap().unwrap();

    // same data, different shape
    assert_eq!(pie.traces[0].labels, bar.traces[0].x);
    assert_ne!(pie.traces[0].trace_type, bar.traces[0].trace_type);
}

#[test]
fn test_text_only_y_column_fails_for_numeric_chart_types() {
    let mut controller = sheetlens::pipeline::PipelineController::new();
    let bytes = workbook_bytes(&["K", "V"], &[&["a", "x"], &["b", "y"], &["c", "z"]]);
    let ticket = controller.begin_upload(xlsx_meta("text.xlsx")).unwrap();
    controller.finish_upload(ticket, &bytes).unwrap();

    for chart_type in [ChartType::Bar, ChartType::Line, ChartType::Scatter3d] {
        controller.set_chart_type(chart_type);
        let result = controller.current_chart().unwrap();
        assert!(
            matches!(result, Err(DataError::NoNumericData { .. })),
            "{chart_type:?} should reject an all-text Y column"
        );
    }

    controller.set_chart_type(ChartType::Pie);
    assert!(controller.current_chart().unwrap().is_ok());
}

#[test]
fn test_stale_axis_selection_is_replaced_on_new_upload() {
    let mut controller = controller_with_sales_table();
    controller.set_x_column("Sales");
    controller.set_y_column("Name");

    let bytes = workbook_bytes(&["Country", "Code"], &[&["Norway", "NO"]]);
    let ticket = controller.begin_upload(xlsx_meta("codes.xlsx")).unwrap();
    controller.finish_upload(ticket, &bytes).unwrap();

    // old names are gone; the default policy re-resolved both axes
    assert_eq!(controller.axes().x_column, "Country");
    assert_eq!(controller.axes().y_column, "Code");
}

#[test]
fn test_single_column_table_leaves_y_axis_unselected() {
    let mut controller = sheetlens::pipeline::PipelineController::new();
    let bytes = workbook_bytes(&["Only"], &[&["v"]]);
    let ticket = controller.begin_upload(xlsx_meta("one.xlsx")).unwrap();
    controller.finish_upload(ticket, &bytes).unwrap();

    assert_eq!(controller.axes().y_column, "");
    let result = controller.current_chart().unwrap();
    assert!(matches!(result, Err(DataError::MissingAxis)));
}
