//! Heatmap of spending by category (columns) and date (rows).

use charming::{
    Chart,
    component::{Axis, Title, VisualMap},
    datatype::DataPoint,
    element::{AxisType, Orient, Tooltip, Trigger},
    series::Heatmap,
};

use crate::chart::pivot::PivotTable;

/// Build the heatmap chart with categories on the x-axis and dates on the
/// y-axis, cell values colored by the summed amount.
pub fn heatmap_chart(pivot: &PivotTable) -> Chart {
    let mut data = Vec::new();
    let mut max_value = 0.0_f64;

    for (date_index, row) in pivot.values.iter().enumerate() {
        for (category_index, value) in row.iter().enumerate() {
            max_value = max_value.max(*value);
            data.push(vec![
                DataPoint::from(category_index as i64),
                DataPoint::from(date_index as i64),
                DataPoint::from(*value),
            ]);
        }
    }

    Chart::new()
        .title(Title::new().text("Spending Heatmap Over Time"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(pivot.categories.clone()),
        )
        .y_axis(Axis::new().type_(AxisType::Category).data(pivot.date_labels()))
        .visual_map(
            VisualMap::new()
                .min(0)
                .max(max_value)
                .calculable(true)
                .orient(Orient::Horizontal)
                .left("center")
                .bottom("2%"),
        )
        .series(Heatmap::new().name("Amount Spent").data(data))
}
