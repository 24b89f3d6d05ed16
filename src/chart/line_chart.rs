//! Line chart of spending trends by category over time.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisType, ItemStyle, LineStyle, Tooltip, Trigger},
    series::Line,
};

use crate::chart::{palette::category_color, pivot::PivotTable};

/// Build the line chart, one line series per category with visible markers.
pub fn line_chart(pivot: &PivotTable) -> Chart {
    let mut chart = Chart::new()
        .title(Title::new().text("Spending Trends Over Time"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().top("bottom"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(pivot.date_labels()))
        .y_axis(Axis::new().type_(AxisType::Value));

    for (index, category) in pivot.categories.iter().enumerate() {
        let color = category_color(category);

        chart = chart.series(
            Line::new()
                .name(category)
                .item_style(ItemStyle::new().color(color))
                .line_style(LineStyle::new().color(color).width(3.0))
                .data(pivot.column(index)),
        );
    }

    chart
}

#[cfg(test)]
mod tests {
    use crate::{
        chart::{line_chart::line_chart, pivot::pivot_by_date_and_category},
        transaction::Transaction,
    };

    #[test]
    fn renders_series_with_palette_color() {
        let transactions = vec![Transaction {
            id: 1,
            description: "Groceries".to_owned(),
            amount: 50.0,
            category: "Food".to_owned(),
            date: "2025-03-28".to_owned(),
        }];
        let pivot = pivot_by_date_and_category(&transactions);

        let options = line_chart(&pivot).to_string();

        assert!(options.contains("Food"));
        assert!(options.contains("#34A853"));
    }

    #[test]
    fn renders_empty_pivot_without_series() {
        let pivot = pivot_by_date_and_category(&[]);

        let options = line_chart(&pivot).to_string();

        assert!(options.contains("Spending Trends Over Time"));
    }
}
