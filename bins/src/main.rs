use std::collections::BTreeSet;

use chrono::{NaiveDate, Weekday};
use eyre::Context;
use log::info;

use model::{
    amount::Amount,
    contract::BookingContract,
    ids::{BookingId, SessionId, SlotId},
    range::DateRange,
    session::{SessionRecord, SessionStatus},
    slot::{SlotCatalog, TimeSlot},
};
use progress::summarize;
use schedule::{grid::build_week, plan::ScheduleMap, week::WeekWindow};

fn main() -> eyre::Result<()> {
    pretty_env_logger::init();
    color_eyre::install()?;

    let catalog = SlotCatalog::new(vec![
        TimeSlot::from_hhmm(SlotId::new(9), "09:00", "10:00")?,
        TimeSlot::from_hhmm(SlotId::new(10), "10:00", "11:00")?,
        TimeSlot::from_hhmm(SlotId::new(14), "14:00", "15:00")?,
    ])
    .context("Failed to build slot catalog")?;
    info!("loaded {} catalog slots", catalog.len());

    // a tutor offering Mondays and Thursdays through March 2024
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 24).unwrap(),
    )?;
    let morning: BTreeSet<_> = [SlotId::new(9), SlotId::new(10)].into();
    let afternoon: BTreeSet<_> = [SlotId::new(14)].into();

    let plan = ScheduleMap::new()
        .apply_weekly(&range, Weekday::Mon, &morning)
        .apply_weekly(&range, Weekday::Thu, &afternoon);
    info!("expanded plan covers {} dates", plan.len());
    println!("{}", serde_json::to_string_pretty(&plan)?);

    for day in plan.dates() {
        let offered = plan
            .slots_on(day)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| catalog.get(*id))
                    .map(|slot| slot.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        info!("{}: {}", day, offered);
    }

    // a learner booked the Monday 09:00 cell; two sessions are done
    let nine = *catalog
        .by_start("09:00")
        .ok_or_else(|| eyre::eyre!("No 09:00 slot in catalog"))?;
    let booking = BookingId::new(1);
    let sessions = vec![
        SessionRecord::with_status(
            SessionId::new(1),
            booking,
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            nine,
            SessionStatus::Completed,
        ),
        SessionRecord::with_status(
            SessionId::new(2),
            booking,
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            nine,
            SessionStatus::Completed,
        ),
        SessionRecord::with_status(
            SessionId::new(3),
            booking,
            NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            nine,
            SessionStatus::Upcoming,
        ),
    ];

    let window = WeekWindow::containing(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
    for row in build_week(window, &catalog, &plan, &sessions) {
        println!("{} {:?}", row.slot, row.cells);
    }

    let contract = BookingContract::new(3, Amount::int(600_000));
    let summary = summarize(&sessions, &contract)?;
    println!(
        "completed {}/{} ({}%), earned {}, remaining {}",
        summary.completed,
        contract.total_sessions,
        summary.percent,
        summary.amount_earned,
        summary.amount_remaining
    );

    Ok(())
}
