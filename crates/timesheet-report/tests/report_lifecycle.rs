//! End-to-end report lifecycle against real workbook files.

use std::path::PathBuf;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use timesheet_core::{CoreError, ReportIdentity};
use timesheet_report::content::{PLACEHOLDERS, TOTAL_TIME_CALCULATED};
use timesheet_report::layout;
use timesheet_report::{
    CellGrid, FixedPicker, Report, ReportError, ReportOptions, SENT_MARKER, TemplateSource,
    WeekField, WeekFields, workbook,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn report_path(dir: &tempfile::TempDir, month: u32, year: i32) -> PathBuf {
    let identity = ReportIdentity::new(month, year).expect("identity");
    dir.path().join(identity.file_name())
}

fn all_fields(report: &Report) -> Vec<WeekFields> {
    report.week_entries().map(|entry| entry.fields()).collect()
}

/// Write a pre-existing April 2026 report whose cells are `cells`.
fn seed_april(dir: &tempfile::TempDir, cells: &[(usize, WeekField, &str)]) -> PathBuf {
    let path = report_path(dir, 4, 2026);
    let mut grid = CellGrid::new("04-2026");
    for (week, field, value) in cells {
        grid.set(field.cell(*week), *value);
    }
    workbook::write_grid(&grid, "04-2026", &path).expect("seed workbook");
    path
}

#[test]
fn creates_report_from_bundled_template() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let path = report_path(&dir, 4, 2026);
    let options = ReportOptions::default();

    let mut report = Report::open(&path, &options).expect("open");
    assert!(report.was_created());
    assert_eq!(report.week_count(), 5);
    assert_eq!(report.sentinel().index(), 5);
    assert_eq!(report.sentinel().number_of_days(), 0);

    report
        .update_period_title()
        .update_start_of_month()
        .update_end_of_month()
        .update_week_periods();
    let saved = report.save().expect("save");
    report.close();

    assert_eq!(saved, path);
    assert!(path.is_file());
    let identity = ReportIdentity::new(4, 2026).expect("identity");
    assert!(!dir.path().join(identity.temp_file_name()).exists());

    let reopened = Report::open(&path, &options).expect("reopen");
    assert!(!reopened.was_created());
    assert_eq!(reopened.grid().sheet_name(), "04-2026");
    assert_eq!(reopened.grid().get(layout::PERIOD_TITLE), "April 2026");
    assert_eq!(reopened.grid().get(layout::START_OF_MONTH), "01/04/2026");
    assert_eq!(reopened.grid().get(layout::END_OF_MONTH), "30/04/2026");

    let second = reopened.week(1).expect("second week");
    assert_eq!(second.field(WeekField::Period), "Week 2");
    assert_eq!(second.field(WeekField::From), "06/04/2026");
    assert_eq!(second.field(WeekField::To), "10/04/2026");

    let last = reopened.week(4).expect("last week");
    assert_eq!(last.field(WeekField::From), "27/04/2026");
    assert_eq!(last.field(WeekField::To), "30/04/2026");
}

#[test]
fn sentinel_row_is_stamped_not_applicable() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let report = Report::open(report_path(&dir, 2, 2026), &ReportOptions::default()).expect("open");

    let sentinel = report.sentinel();
    assert_eq!(sentinel.index(), 4);
    for field in WeekField::ALL {
        assert_eq!(sentinel.field(field), "N/A", "{field:?}");
    }
    assert_eq!(
        report.grid().get(layout::conclude_label(4)),
        "END OF MONTH, NO CONTENT HERE"
    );
}

#[test]
fn save_then_open_preserves_week_fields() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let path = report_path(&dir, 4, 2026);
    let options = ReportOptions::default();
    let today = date(2026, 4, 22);

    let mut report = Report::open(&path, &options).expect("open");
    report
        .update_period_title()
        .update_start_of_month()
        .update_end_of_month()
        .update_week_periods()
        .update_content(today, &mut FixedPicker(1))
        .mark_all_as_sent(today);
    let before = all_fields(&report);
    let before_sentinel = report.sentinel().fields();
    report.save().expect("save");
    report.close();

    let reopened = Report::open(&path, &options).expect("reopen");
    assert_eq!(all_fields(&reopened), before);
    assert_eq!(reopened.sentinel().fields(), before_sentinel);
}

#[test]
fn update_content_fills_past_and_current_weeks_only() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let mut report =
        Report::open(report_path(&dir, 4, 2026), &ReportOptions::default()).expect("open");

    report.update_content(date(2026, 4, 15), &mut FixedPicker(2));

    let filled: Vec<bool> = report.week_entries().map(|e| e.has_content()).collect();
    assert_eq!(filled, vec![true, true, true, false, false]);

    let first = report.week(0).expect("week").fields();
    assert_eq!(first.begin_at, "18:00");
    assert_eq!(first.end_at, "23:00");
    assert_eq!(first.total_time, "5h/day = 25h/week");
    assert_eq!(first.total_time_calculated, TOTAL_TIME_CALCULATED);
    assert_eq!(first.task_description, PLACEHOLDERS[2].task_description);
    assert_eq!(first.note, PLACEHOLDERS[2].note);
    assert_eq!(first.sent, "");
}

#[test]
fn update_content_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let mut report =
        Report::open(report_path(&dir, 4, 2026), &ReportOptions::default()).expect("open");
    let today = date(2026, 4, 15);

    report.update_content(today, &mut FixedPicker(0));
    let after_first = report.grid().clone();

    report.update_content(today, &mut FixedPicker(3));
    assert_eq!(report.grid(), &after_first);
}

#[test]
fn update_content_stops_at_latest_filled_week() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let path = seed_april(&dir, &[(2, WeekField::TotalTimeCalculated, "12h")]);

    let mut report = Report::open(&path, &ReportOptions::default()).expect("open");
    report.update_content(date(2026, 5, 10), &mut FixedPicker(0));

    let filled: Vec<bool> = report.week_entries().map(|e| e.has_content()).collect();
    assert_eq!(filled, vec![false, false, true, true, true]);
    assert_eq!(
        report.week(2).expect("week").field(WeekField::TotalTimeCalculated),
        "12h"
    );
}

#[test]
fn mark_all_as_sent_never_touches_current_or_future_weeks() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let mut report =
        Report::open(report_path(&dir, 4, 2026), &ReportOptions::default()).expect("open");
    let today = date(2026, 4, 15);

    report.update_content(today, &mut FixedPicker(0));
    assert_eq!(report.unsent_label(today).as_deref(), Some("April Week 1, 2"));
    assert!(report.has_unsent_content(today));

    report.mark_all_as_sent(today);
    let sent: Vec<bool> = report.week_entries().map(|e| e.has_been_sent()).collect();
    assert_eq!(sent, vec![true, true, false, false, false]);
    assert!(!report.has_unsent_content(today));
    assert_eq!(report.unsent_label(today), None);

    // A week later the previously current week is past and unsent.
    let later = date(2026, 4, 22);
    report.update_content(later, &mut FixedPicker(0));
    assert_eq!(report.unsent_weeks(later), vec![3]);

    report.mark_all_as_sent(later);
    let sent: Vec<bool> = report.week_entries().map(|e| e.has_been_sent()).collect();
    assert_eq!(sent, vec![true, true, true, false, false]);
    assert_eq!(
        report.week(2).expect("week").field(WeekField::Sent),
        SENT_MARKER
    );
}

#[test]
fn mark_all_as_sent_stops_at_latest_sent_week() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let path = seed_april(&dir, &[(1, WeekField::Sent, SENT_MARKER)]);

    let mut report = Report::open(&path, &ReportOptions::default()).expect("open");
    report.mark_all_as_sent(date(2026, 5, 10));

    let sent: Vec<bool> = report.week_entries().map(|e| e.has_been_sent()).collect();
    assert_eq!(sent, vec![false, true, true, true, true]);
}

#[test]
fn whole_past_month_is_reported_unsent() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let mut report =
        Report::open(report_path(&dir, 3, 2026), &ReportOptions::default()).expect("open");
    let today = date(2026, 4, 15);

    report.update_content(today, &mut FixedPicker(0));
    assert_eq!(
        report.unsent_label(today).as_deref(),
        Some("March Week 1, 2, 3, 4, 5")
    );
}

#[test]
fn invalid_file_name_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let result = Report::open(dir.path().join("timesheet.xlsx"), &ReportOptions::default());

    assert!(matches!(
        result,
        Err(ReportError::Identity(CoreError::InvalidReportFileName { .. }))
    ));
}

#[test]
fn existing_non_workbook_is_a_load_error() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let path = report_path(&dir, 4, 2026);
    std::fs::write(&path, b"plain text").expect("write");

    let result = Report::open(&path, &ReportOptions::default());
    assert!(matches!(result, Err(ReportError::Load { .. })));
}

#[test]
fn renamed_report_fails_identity_check() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let april = report_path(&dir, 4, 2026);
    let report = Report::open(&april, &ReportOptions::default()).expect("open");
    report.save().expect("save");
    report.close();

    let may = report_path(&dir, 5, 2026);
    std::fs::rename(&april, &may).expect("rename");

    let result = Report::open(&may, &ReportOptions::default());
    assert!(matches!(
        result,
        Err(ReportError::IdentityMismatch { sheet, expected, .. })
            if sheet == "04-2026" && expected == "05-2026"
    ));
}

#[test]
fn file_template_seeds_new_reports() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let april = report_path(&dir, 4, 2026);
    let mut seed = Report::open(&april, &ReportOptions::default()).expect("open");
    seed.update_period_title();
    seed.save().expect("save");
    seed.close();

    let options = ReportOptions::new(TemplateSource::File(april.clone()), "%Y-%m-%d")
        .expect("options");
    let mut report = Report::open(report_path(&dir, 5, 2026), &options).expect("open");
    assert!(report.was_created());
    assert_eq!(report.grid().get(layout::PERIOD_TITLE), "April 2026");

    report.update_period_title().update_start_of_month();
    assert_eq!(report.grid().get(layout::PERIOD_TITLE), "May 2026");
    assert_eq!(report.grid().get(layout::START_OF_MONTH), "2026-05-01");
}

#[test]
fn file_template_drops_week_rows_of_its_month() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let february = report_path(&dir, 2, 2026);
    let today = date(2026, 4, 15);
    let mut seed = Report::open(&february, &ReportOptions::default()).expect("open");
    seed.update_week_periods()
        .update_content(today, &mut FixedPicker(0))
        .mark_all_as_sent(today);
    seed.save().expect("save");
    seed.close();

    let options = ReportOptions::new(TemplateSource::File(february), "%d/%m/%Y")
        .expect("options");
    let mut march = Report::open(report_path(&dir, 3, 2026), &options).expect("open");
    assert_eq!(march.week_count(), 5);
    assert_eq!(march.week(4).expect("week").field(WeekField::Sent), "");

    march.update_content(today, &mut FixedPicker(0));
    assert!(march.week_entries().all(|entry| entry.has_content()));
    assert_eq!(
        march.unsent_label(today).as_deref(),
        Some("March Week 1, 2, 3, 4, 5")
    );
    assert_eq!(march.sentinel().index(), 5);
    assert_eq!(march.sentinel().field(WeekField::Sent), "N/A");
}

#[test]
fn sentinel_is_never_filled_or_marked() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let mut report =
        Report::open(report_path(&dir, 2, 2026), &ReportOptions::default()).expect("open");
    let weeks = report.week_count();
    let after_month = date(2026, 3, 10);

    report
        .update_content(after_month, &mut FixedPicker(2))
        .mark_all_as_sent(after_month);

    assert_eq!(report.week_count(), weeks);
    let stamped = report.sentinel().fields();
    assert_eq!(stamped, all_not_applicable());
    assert!(report.week_entries().all(|entry| entry.has_been_sent()));
    assert_eq!(report.sentinel().field(WeekField::Sent), "N/A");
}

fn all_not_applicable() -> WeekFields {
    WeekFields {
        period: "N/A".into(),
        from: "N/A".into(),
        to: "N/A".into(),
        begin_at: "N/A".into(),
        end_at: "N/A".into(),
        total_time: "N/A".into(),
        task_description: "N/A".into(),
        note: "N/A".into(),
        total_time_calculated: "N/A".into(),
        sent: "N/A".into(),
    }
}

#[test]
fn missing_template_file_fails_creation() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let options = ReportOptions::new(
        TemplateSource::File(dir.path().join("template.xlsx")),
        "%d/%m/%Y",
    )
    .expect("options");

    let result = Report::open(report_path(&dir, 4, 2026), &options);
    assert!(matches!(result, Err(ReportError::TemplateNotFound(_))));
}
