use chrono::{Datelike, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

/// First and last day of a month. Months outside 1..=12 clamp to December;
/// years chrono cannot represent yield `None`. The year input in the custom
/// dialog is free-form, so this must stay total.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let month = month.clamp(1, 12);
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    Some((start, next_month_start - chrono::Duration::days(1)))
}

/// Bounds of the month preceding the month `date` falls in
pub fn previous_month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    if date.month() == 1 {
        month_bounds(date.year() - 1, 12)
    } else {
        month_bounds(date.year(), date.month() - 1)
    }
}

/// Date range input with presets: two date fields plus quick buttons for the
/// current month, the previous month (relative to the selected "from" date)
/// and a custom month/year dialog.
#[component]
pub fn DateRangePicker(
    /// "From" date, yyyy-mm-dd
    #[prop(into)]
    date_from: Signal<String>,

    /// "To" date, yyyy-mm-dd
    #[prop(into)]
    date_to: Signal<String>,

    /// Called with (from, to) whenever the range changes
    on_change: Callback<(String, String)>,

    /// Optional label above the inputs
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let show_picker = RwSignal::new(false);
    let selected_month = RwSignal::new(Utc::now().date_naive().month().to_string());
    let selected_year = RwSignal::new(Utc::now().date_naive().year().to_string());

    let emit = move |(from, to): (NaiveDate, NaiveDate)| {
        on_change.run((
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        ));
    };

    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    let on_current_month = move |_| {
        let now = Utc::now().date_naive();
        if let Some(bounds) = month_bounds(now.year(), now.month()) {
            emit(bounds);
        }
    };

    // Steps back one month from the currently selected "from" date
    let on_previous_month = move |_| {
        let current_from = date_from.get_untracked();
        if let Ok(current) = NaiveDate::parse_from_str(&current_from, "%Y-%m-%d") {
            if let Some(bounds) = previous_month_bounds(current) {
                emit(bounds);
            }
        }
    };

    // Unrepresentable years (the input is free-form) leave the range as-is
    let on_apply_custom = move |_| {
        if let (Ok(year), Ok(month)) = (
            selected_year.get().parse::<i32>(),
            selected_month.get().parse::<u32>(),
        ) {
            if (1..=12).contains(&month) {
                if let Some(bounds) = month_bounds(year, month) {
                    emit(bounds);
                }
            }
        }
        show_picker.set(false);
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_from_change(event_target_value(&ev));
                    }
                />

                <div>"—"</div>

                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_to_change(event_target_value(&ev));
                    }
                />

                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_previous_month
                    >
                        "-1M"
                    </Button>

                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_current_month
                    >
                        "0M"
                    </Button>

                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| show_picker.set(true)
                    >
                        "⋯"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>

        // Custom month/year dialog
        <Dialog open=show_picker>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Select month and year"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Large>
                            <div>
                                <div style="margin-bottom: 12px; font-weight: 500;">"Month:"</div>
                                <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 8px;">
                                    {
                                        let months = [
                                            (1u32, "Jan"), (2, "Feb"), (3, "Mar"), (4, "Apr"),
                                            (5, "May"), (6, "Jun"), (7, "Jul"), (8, "Aug"),
                                            (9, "Sep"), (10, "Oct"), (11, "Nov"), (12, "Dec"),
                                        ];

                                        months.into_iter().map(|(month_num, month_name)| {
                                            let is_selected = move || selected_month.get() == month_num.to_string();
                                            view! {
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=move || {
                                                        if is_selected() {
                                                            ButtonAppearance::Primary
                                                        } else {
                                                            ButtonAppearance::Subtle
                                                        }
                                                    }
                                                    on_click=move |_| selected_month.set(month_num.to_string())
                                                    attr:style="width: 100%;"
                                                >
                                                    {month_name}
                                                </Button>
                                            }
                                        }).collect_view()
                                    }
                                </div>
                            </div>

                            <div>
                                <div style="margin-bottom: 12px; font-weight: 500;">"Year:"</div>
                                <Flex gap=FlexGap::Small vertical=false align=FlexAlign::Center>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| {
                                            selected_year
                                                .set((Utc::now().date_naive().year() - 1).to_string())
                                        }
                                    >
                                        {(Utc::now().date_naive().year() - 1).to_string()}
                                    </Button>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| {
                                            selected_year.set(Utc::now().date_naive().year().to_string())
                                        }
                                    >
                                        {Utc::now().date_naive().year().to_string()}
                                    </Button>
                                    <Input
                                        input_type=InputType::Number
                                        value=selected_year
                                        attr:style="flex: 1;"
                                    />
                                </Flex>
                            </div>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=on_apply_custom>
                            "Apply"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| show_picker.set(false)
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_regular_month() {
        let (start, end) = month_bounds(2025, 4).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
    }

    #[test]
    fn month_bounds_december_rolls_into_next_year() {
        let (start, end) = month_bounds(2025, 12).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn month_bounds_handles_leap_february() {
        let (_, end) = month_bounds(2024, 2).unwrap();
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        let (_, end) = month_bounds(2025, 2).unwrap();
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn month_bounds_rejects_out_of_range_years_without_panicking() {
        // The custom dialog's year field accepts any number
        assert_eq!(month_bounds(300_000, 5), None);
        assert_eq!(month_bounds(-300_000, 5), None);
        assert_eq!(month_bounds(i32::MAX, 12), None);
    }

    #[test]
    fn previous_month_wraps_over_january() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let (start, end) = previous_month_bounds(date).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }
}
