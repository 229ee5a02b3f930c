use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

const SECTIONS: &[(&str, &[Page])] = &[
    ("Overview", &[Page::KpiOverview]),
    ("Operations", &[Page::Orders, Page::Trips, Page::RoutePlans]),
    ("Fleet", &[Page::Vehicles, Page::Drivers, Page::Maintenance]),
    ("Commerce", &[Page::Sales, Page::Returnables]),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                {icon("truck")}
                <span class="sidebar__brand-name">"Fleetboard"</span>
            </div>
            {SECTIONS
                .iter()
                .map(|(section, pages)| {
                    view! {
                        <div class="sidebar__section">
                            <div class="sidebar__section-title">{*section}</div>
                            {pages
                                .iter()
                                .map(|page| {
                                    let page = *page;
                                    view! {
                                        <button
                                            class="sidebar__item"
                                            class:sidebar__item--active=move || {
                                                ctx.active_page.get() == page
                                            }
                                            on:click=move |_| ctx.navigate(page)
                                        >
                                            {icon(page.icon_name())}
                                            <span>{page.title()}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
