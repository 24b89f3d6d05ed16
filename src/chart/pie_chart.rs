//! Pie chart of spending by category with a selectable period.
//!
//! One chart is built per selectable period: all twelve calendar months
//! followed by all 52 ISO weeks. The artifact page embeds every variant and
//! switches between them client-side, so selection never re-fetches data.

use charming::{
    Chart,
    component::{Legend, Title},
    datatype::DataPointItem,
    element::{ItemStyle, Tooltip, Trigger},
    series::Pie,
};
use time::Month;

use crate::{
    chart::{
        palette::category_color,
        pivot::{Period, category_totals},
    },
    transaction::Transaction,
};

/// One precomputed pie chart for a single period selection.
pub struct PieVariant {
    /// The label shown in the period dropdown, e.g. "Month March" or "Week 12".
    pub label: String,
    /// The chart for this period.
    pub chart: Chart,
}

/// Build the pie chart variants for every selectable period.
pub fn pie_chart_variants(transactions: &[Transaction]) -> Vec<PieVariant> {
    let months = (1u8..=12).map(|number| {
        let name = Month::try_from(number).unwrap();
        (format!("Month {name}"), Period::Month(number))
    });
    let weeks = (1u8..=52).map(|number| (format!("Week {number}"), Period::Week(number)));

    months
        .chain(weeks)
        .map(|(label, period)| {
            let chart = pie_chart(transactions, period, &label);
            PieVariant { label, chart }
        })
        .collect()
}

/// Build a single pie chart for the transactions that fall in `period`.
fn pie_chart(transactions: &[Transaction], period: Period, period_label: &str) -> Chart {
    let totals = category_totals(transactions, period);

    let data: Vec<DataPointItem> = totals
        .iter()
        .map(|(category, total)| {
            DataPointItem::new(*total)
                .name(category)
                .item_style(ItemStyle::new().color(category_color(category)))
        })
        .collect();

    Chart::new()
        .title(Title::new().text(format!("Spending Breakdown - {period_label}")))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().top("bottom"))
        .series(Pie::new().name(period_label).radius("60%").data(data))
}
