//! Chart trace derivation.
//!
//! Maps (table, axis selection, chart type) to the trace and layout payload
//! the external charting widget consumes through its documented props. Pure:
//! identical inputs always produce an identical [`ChartSpec`], and every call
//! returns a fresh value.

use crate::data::error::{DataError, DataResult};
use crate::types::{AxisSelection, CellValue, ChartType, TableStore};
use serde::Serialize;

/// Color scale applied by the 3D chart variants
const COLOR_SCALE: &str = "Viridis";

/// A raw axis value forwarded to the charting engine
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TraceValue {
    Number(f64),
    Boolean(bool),
    Text(String),
    Null,
}

impl From<&CellValue> for TraceValue {
    fn from(cell: &CellValue) -> Self {
        match cell {
            CellValue::Number(n) => TraceValue::Number(*n),
            CellValue::Boolean(b) => TraceValue::Boolean(*b),
            CellValue::Text(s) => TraceValue::Text(s.clone()),
            CellValue::Empty => TraceValue::Null,
        }
    }
}

/// Marker block carrying the value-to-color mapping for the 3D variants
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TraceMarker {
    pub color: Vec<Option<f64>>,
    pub colorscale: &'static str,
    pub showscale: bool,
}

/// One renderable series, shaped per chart type
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartTrace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<TraceValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<TraceValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<TraceValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<TraceMarker>,
}

impl ChartTrace {
    fn new(trace_type: &'static str) -> Self {
        Self {
            trace_type,
            mode: None,
            x: None,
            y: None,
            labels: None,
            values: None,
            marker: None,
        }
    }
}

/// Axis title wrapper matching the engine's layout contract
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    pub title: String,
}

/// Layout descriptor: chart title plus axis titles (omitted for pie)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisTitle>,
}

/// The produced artifact, owned exclusively by the caller
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub traces: Vec<ChartTrace>,
    pub layout: ChartLayout,
}

/// Derive the chart series for the selected axes and chart type.
pub fn build_chart(
    table: &TableStore,
    axes: &AxisSelection,
    chart_type: ChartType,
) -> DataResult<ChartSpec> {
    if !axes.is_complete() {
        return Err(DataError::MissingAxis);
    }

    let x_idx = table
        .column_index(&axes.x_column)
        .ok_or_else(|| DataError::ColumnNotFound {
            name: axes.x_column.clone(),
        })?;
    let y_idx = table
        .column_index(&axes.y_column)
        .ok_or_else(|| DataError::ColumnNotFound {
            name: axes.y_column.clone(),
        })?;

    let x_values: Vec<TraceValue> = table.rows().iter().map(|row| (&row[x_idx]).into()).collect();

    let trace = if chart_type == ChartType::Pie {
        // pie partitions a whole by raw value; the engine applies its own
        // coercion to `values`
        let values: Vec<TraceValue> = table.rows().iter().map(|row| (&row[y_idx]).into()).collect();
        ChartTrace {
            labels: Some(x_values),
            values: Some(values),
            ..ChartTrace::new("pie")
        }
    } else {
        let y_numeric: Vec<Option<f64>> = table
            .rows()
            .iter()
            .map(|row| row[y_idx].as_f64())
            .collect();
        if y_numeric.iter().all(Option::is_none) {
            return Err(DataError::NoNumericData {
                column: axes.y_column.clone(),
            });
        }

        let (trace_type, mode) = match chart_type {
            ChartType::Bar | ChartType::Bar3d => ("bar", None),
            ChartType::Line => ("scatter", Some("lines+markers")),
            ChartType::Scatter | ChartType::Scatter3d => ("scatter", Some("markers")),
            ChartType::Pie => unreachable!("handled above"),
        };
        let marker = chart_type.color_encoded().then(|| TraceMarker {
            color: y_numeric.clone(),
            colorscale: COLOR_SCALE,
            showscale: true,
        });

        ChartTrace {
            mode,
            x: Some(x_values),
            y: Some(y_numeric),
            marker,
            ..ChartTrace::new(trace_type)
        }
    };

    let layout = if chart_type == ChartType::Pie {
        ChartLayout {
            title: format!("{} vs {}", axes.y_column, axes.x_column),
            xaxis: None,
            yaxis: None,
        }
    } else {
        ChartLayout {
            title: format!("{} vs {}", axes.y_column, axes.x_column),
            xaxis: Some(AxisTitle {
                title: axes.x_column.clone(),
            }),
            yaxis: Some(AxisTitle {
                title: axes.y_column.clone(),
            }),
        }
    };

    Ok(ChartSpec {
        traces: vec![trace],
        layout,
    })
}
