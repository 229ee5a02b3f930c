use crate::dashboards::d100_kpi_overview::KpiOverview;
use crate::domain::a001_order::ui::list::OrderList;
use crate::domain::a002_trip::ui::list::TripList;
use crate::domain::a003_route_plan::ui::list::RoutePlanList;
use crate::domain::a004_vehicle::ui::list::VehicleList;
use crate::domain::a005_driver::ui::list::DriverList;
use crate::domain::a006_maintenance_task::ui::list::MaintenanceList;
use crate::domain::a007_returnable::ui::list::ReturnableList;
use crate::domain::a008_sale::ui::list::SalesList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Shell>
            {move || match ctx.active_page.get() {
                Page::KpiOverview => view! { <KpiOverview /> }.into_any(),
                Page::Orders => view! { <OrderList /> }.into_any(),
                Page::Trips => view! { <TripList /> }.into_any(),
                Page::RoutePlans => view! { <RoutePlanList /> }.into_any(),
                Page::Vehicles => view! { <VehicleList /> }.into_any(),
                Page::Drivers => view! { <DriverList /> }.into_any(),
                Page::Maintenance => view! { <MaintenanceList /> }.into_any(),
                Page::Returnables => view! { <ReturnableList /> }.into_any(),
                Page::Sales => view! { <SalesList /> }.into_any(),
            }}
        </Shell>
    }
}
