use crate::config::Config;
use crate::core::aggregate::{aggregate, totals};
use crate::models::period::Period;
use crate::models::summary::PeriodBucket;
use crate::models::trip_log::TripLog;
use crate::ui::messages::{header, info};
use crate::utils::colors::color_for_net;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::{mins2readable, money};

pub struct SummaryLogic;

impl SummaryLogic {
    /// Print the bucket table for `period` followed by the totals footer.
    pub fn print(log: &TripLog, period: Period, cfg: &Config) -> Vec<PeriodBucket> {
        let buckets = aggregate(log, period);

        header(format!("Earnings by {period}"));

        if buckets.is_empty() {
            info("No trips recorded yet. Add one with `sparktracker add`.");
        } else {
            println!("{}", Self::table(&buckets, cfg).render(&cfg.separator_char));
        }

        let (gross, net) = totals(log);
        println!(
            "{}    {}",
            bold(&format!("Gross Total: {}", money(gross, &cfg.currency))),
            bold(&format!("Net Total: {}", money(net, &cfg.currency)))
        );

        buckets
    }

    fn table(buckets: &[PeriodBucket], cfg: &Config) -> Table {
        let mut table = Table::new(vec![
            Column::left("period"),
            Column::right("trips"),
            Column::right("gross"),
            Column::right("net"),
            Column::right("time"),
            Column::right("miles"),
        ]);

        for b in buckets {
            table.add_colored_row(
                vec![
                    b.label(),
                    b.trips.to_string(),
                    money(b.total_gross, &cfg.currency),
                    money(b.net_pay, &cfg.currency),
                    mins2readable(b.trip_minutes as i64, false),
                    format!("{:.1}", b.miles_driven),
                ],
                vec![None, None, None, Some(color_for_net(b.net_pay)), None, None],
            );
        }

        table
    }
}
