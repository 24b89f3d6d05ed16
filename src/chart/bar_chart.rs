//! Stacked bar chart of spending by category over time.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisType, ItemStyle, Tooltip, Trigger},
    series::Bar,
};

use crate::chart::{palette::category_color, pivot::PivotTable};

/// Build the stacked bar chart, one bar series per category.
pub fn bar_chart(pivot: &PivotTable) -> Chart {
    let mut chart = Chart::new()
        .title(Title::new().text("Spending Categories Over Time"))
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
        chart = chart.series(
            Bar::new()
                .name(category)
                .stack("spending")
                .item_style(ItemStyle::new().color(category_color(category)))
                .data(pivot.column(index)),
        );
    }

    chart
}

#[cfg(test)]
mod tests {
    use crate::{
        chart::{bar_chart::bar_chart, pivot::pivot_by_date_and_category},
        transaction::Transaction,
    };

    #[test]
    fn renders_one_series_per_category() {
        let transactions = vec![
            Transaction {
                id: 1,
                description: "Rent payment".to_owned(),
                amount: 150.0,
                category: "Housing".to_owned(),
                date: "2025-03-28".to_owned(),
            },
            Transaction {
                id: 2,
                description: "Groceries".to_owned(),
                amount: 50.0,
                category: "Food".to_owned(),
                date: "2025-03-28".to_owned(),
            },
        ];
        let pivot = pivot_by_date_and_category(&transactions);

        let options = bar_chart(&pivot).to_string();

        assert!(options.contains("Housing"));
        assert!(options.contains("Food"));
        assert!(options.contains("Mar 28"));
    }

    #[test]
    fn renders_unknown_category_without_error() {
        let transactions = vec![Transaction {
            id: 1,
            description: "Netflix".to_owned(),
            amount: 15.0,
            category: "Subscriptions".to_owned(),
            date: "2025-03-28".to_owned(),
        }];
        let pivot = pivot_by_date_and_category(&transactions);

        let options = bar_chart(&pivot).to_string();

        assert!(options.contains("Subscriptions"));
        assert!(options.contains("#A9A9A9"));
    }
}
