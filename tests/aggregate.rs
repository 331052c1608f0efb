#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use worktally::libs::aggregate::{client_totals, group_totals, period_totals, UNKNOWN_CUSTOMER, UNKNOWN_TASK};
    use worktally::libs::entry::{Customer, Dataset, Task, TimeEntry};
    use worktally::libs::filter::{GroupBy, ReportFilter};
    use worktally::libs::range::{DateRange, Period};
    use worktally::libs::report::Report;

    fn entry(id: &str, customer: Option<&str>, minutes: f64, billable: bool) -> TimeEntry {
        TimeEntry {
            id: id.to_string(),
            customer_id: customer.map(str::to_string),
            task_id: None,
            date: Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            start_time: None,
            end_time: None,
            duration_minutes: Some(minutes),
            billable,
            rate: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
        }
    }

    fn customers() -> Vec<Customer> {
        vec![
            Customer { id: "cust-a".to_string(), name: "Acme".to_string() },
            Customer { id: "cust-b".to_string(), name: "Bolt".to_string() },
        ]
    }

    fn dataset(entries: Vec<TimeEntry>) -> Dataset {
        Dataset {
            customers: customers(),
            tasks: vec![Task { id: "task-1".to_string(), name: "Design".to_string() }],
            entries,
        }
    }

    #[test]
    fn customer_report_sums_billable_and_non_billable() {
        // One 90-minute billable entry and one timestamped 1.5h non-billable
        // entry for the same customer.
        let billable = entry("1", Some("cust-a"), 90.0, true);
        let mut tracked = entry("2", Some("cust-a"), 0.0, false);
        tracked.duration_minutes = None;
        tracked.start_time = Some(Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap());
        tracked.end_time = Some(Utc.with_ymd_and_hms(2024, 1, 10, 10, 30, 0).unwrap());

        let filter = ReportFilter {
            date_range: DateRange::new(
                Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
                Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            ),
            group_by: GroupBy::Customer,
            ..Default::default()
        };
        let report = Report::build(&dataset(vec![billable, tracked]), &filter, Period::Month, None);

        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.group_key, "Acme");
        assert!((row.total_hours - 3.0).abs() < 0.01);
        assert!((row.billable_hours - 1.5).abs() < 0.01);
        assert!((row.non_billable_hours - 1.5).abs() < 0.01);
    }

    #[test]
    fn billable_only_excludes_non_billable_from_totals() {
        let billable = entry("1", Some("cust-a"), 90.0, true);
        let free = entry("2", Some("cust-a"), 90.0, false);

        let filter = ReportFilter {
            billable_only: true,
            group_by: GroupBy::Customer,
            ..Default::default()
        };
        let report = Report::build(&dataset(vec![billable, free]), &filter, Period::Month, None);

        let row = &report.rows[0];
        assert!((row.total_hours - 1.5).abs() < 0.01);
        assert!((row.billable_hours - 1.5).abs() < 0.01);
        assert!(row.non_billable_hours.abs() < 0.01);
    }

    #[test]
    fn billable_amount_multiplies_hours_by_rate() {
        let mut e = entry("1", Some("cust-a"), 120.0, true);
        e.rate = Some(500.0);

        let clients = client_totals(&[e], &customers(), None);

        assert_eq!(clients.len(), 1);
        assert!((clients[0].billable_amount - 1000.0).abs() < 0.01);
    }

    #[test]
    fn missing_rate_counts_hours_but_adds_no_amount() {
        let with_rate = {
            let mut e = entry("1", Some("cust-a"), 60.0, true);
            e.rate = Some(100.0);
            e
        };
        let without_rate = entry("2", Some("cust-a"), 60.0, true);

        let clients = client_totals(&[with_rate, without_rate], &customers(), None);

        assert!((clients[0].billable_amount - 100.0).abs() < 0.01);
        assert_eq!(clients[0].total_seconds, 7200);
    }

    #[test]
    fn non_billable_entries_add_no_amount() {
        let mut e = entry("1", Some("cust-a"), 60.0, false);
        e.rate = Some(100.0);

        let clients = client_totals(&[e], &customers(), None);

        assert!(clients[0].billable_amount.abs() < f64::EPSILON);
        assert_eq!(clients[0].non_billable_seconds, 3600);
    }

    #[test]
    fn clients_with_zero_hours_are_dropped() {
        let worked = entry("1", Some("cust-a"), 60.0, true);
        let empty = entry("2", Some("cust-b"), 0.0, true);

        let clients = client_totals(&[worked, empty], &customers(), None);

        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].customer_name, "Acme");
    }

    #[test]
    fn entries_without_customer_are_skipped_in_client_overview() {
        let assigned = entry("1", Some("cust-a"), 60.0, true);
        let unassigned = entry("2", None, 60.0, true);

        let clients = client_totals(&[assigned, unassigned], &customers(), None);

        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].customer_id, "cust-a");
    }

    #[test]
    fn client_overview_ignores_report_filters() {
        let a = entry("1", Some("cust-a"), 60.0, true);
        let b = entry("2", Some("cust-b"), 120.0, true);

        let filter = ReportFilter {
            customer_id: Some("cust-a".to_string()),
            group_by: GroupBy::Customer,
            ..Default::default()
        };
        let report = Report::build(&dataset(vec![a, b]), &filter, Period::Month, None);

        // The grouped rows honor the filter; the client overview does not.
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].group_key, "Acme");
        assert_eq!(report.clients.len(), 2);
    }

    #[test]
    fn unknown_dimension_values_fall_back_to_sentinels() {
        let no_customer = entry("1", None, 60.0, true);
        let unlisted = entry("2", Some("cust-x"), 60.0, true);

        let rows = group_totals(&[no_customer.clone(), unlisted], GroupBy::Customer, &customers(), &[], None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, UNKNOWN_CUSTOMER);
        assert_eq!(rows[0].total_seconds, 7200);

        let rows = group_totals(&[no_customer], GroupBy::Task, &customers(), &[], None);
        assert_eq!(rows[0].key, UNKNOWN_TASK);
    }

    #[test]
    fn customer_rows_rank_descending_by_total() {
        let small = entry("1", Some("cust-a"), 30.0, true);
        let big = entry("2", Some("cust-b"), 120.0, true);

        let rows = group_totals(&[small, big], GroupBy::Customer, &customers(), &[], None);

        assert_eq!(rows[0].key, "Bolt");
        assert_eq!(rows[1].key, "Acme");
    }

    #[test]
    fn day_rows_run_in_chronological_order() {
        let mut late = entry("1", None, 60.0, true);
        late.date = Some(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        let mut early = entry("2", None, 60.0, true);
        early.date = Some(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        let mut middle = entry("3", None, 180.0, true);
        middle.date = Some(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());

        let rows = group_totals(&[late, early, middle], GroupBy::Day, &[], &[], None);

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["2024-01-05", "2024-01-12", "2024-01-20"]);
    }

    #[test]
    fn week_buckets_split_on_monday() {
        // 2024-01-14 is a Sunday, 2024-01-15 the following Monday.
        let mut sunday = entry("1", None, 60.0, true);
        sunday.date = Some(NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        let mut monday = entry("2", None, 60.0, true);
        monday.date = Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let periods = period_totals(&[sunday, monday], Period::Week, None);

        let labels: Vec<&str> = periods.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2024-W02", "2024-W03"]);
    }

    #[test]
    fn period_summaries_carry_billable_percentage() {
        let billable = entry("1", None, 90.0, true);
        let free = entry("2", None, 90.0, false);

        let periods = period_totals(&[billable, free], Period::Month, None);

        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].label, "2024-01");
        assert_eq!(periods[0].total_seconds, 10800);
        assert_eq!(periods[0].billable_seconds, 5400);
    }

    #[test]
    fn quarter_buckets_span_three_months() {
        let mut january = entry("1", None, 60.0, true);
        january.date = Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        let mut march = entry("2", None, 60.0, true);
        march.date = Some(NaiveDate::from_ymd_opt(2024, 3, 28).unwrap());
        let mut april = entry("3", None, 60.0, true);
        april.date = Some(NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());

        let periods = period_totals(&[january, march, april], Period::Quarter, None);

        let labels: Vec<&str> = periods.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2024-Q1", "2024-Q2"]);
        assert_eq!(periods[0].total_seconds, 7200);
    }

    #[test]
    fn running_entries_count_only_in_live_reports() {
        let mut running = entry("1", Some("cust-a"), 0.0, true);
        running.duration_minutes = None;
        running.start_time = Some(Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap());

        let closed = group_totals(&[running.clone()], GroupBy::Customer, &customers(), &[], None);
        assert_eq!(closed[0].total_seconds, 0);

        let now = Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap();
        let live = group_totals(&[running], GroupBy::Customer, &customers(), &[], Some(now));
        assert_eq!(live[0].total_seconds, 3600);
    }

    #[test]
    fn billable_and_non_billable_partition_each_row() {
        let entries = vec![
            entry("1", Some("cust-a"), 47.0, true),
            entry("2", Some("cust-a"), 13.0, false),
            entry("3", Some("cust-b"), 125.0, true),
            entry("4", Some("cust-b"), 8.0, false),
            entry("5", None, 31.0, false),
        ];

        let report = Report::build(&dataset(entries), &ReportFilter::default(), Period::Month, None);

        for row in &report.rows {
            let sum = row.billable_hours + row.non_billable_hours;
            assert!((sum - row.total_hours).abs() <= 0.01, "row {} splits unevenly", row.group_key);
        }
    }

    #[test]
    fn clients_rank_descending_by_total_hours() {
        let small = entry("1", Some("cust-a"), 30.0, true);
        let big = entry("2", Some("cust-b"), 240.0, true);

        let clients = client_totals(&[small, big], &customers(), None);

        assert_eq!(clients[0].customer_name, "Bolt");
        assert_eq!(clients[1].customer_name, "Acme");
    }
}
