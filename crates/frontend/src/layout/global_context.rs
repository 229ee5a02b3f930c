use leptos::prelude::*;

/// Top-level pages of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    KpiOverview,
    Orders,
    Trips,
    RoutePlans,
    Vehicles,
    Drivers,
    Maintenance,
    Returnables,
    Sales,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::KpiOverview => "Overview",
            Page::Orders => "Orders",
            Page::Trips => "Trips",
            Page::RoutePlans => "Routes",
            Page::Vehicles => "Vehicles",
            Page::Drivers => "Drivers",
            Page::Maintenance => "Maintenance",
            Page::Returnables => "Returnables",
            Page::Sales => "Sales",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::KpiOverview => "dashboard",
            Page::Orders => "orders",
            Page::Trips => "trips",
            Page::RoutePlans => "routes",
            Page::Vehicles => "truck",
            Page::Drivers => "drivers",
            Page::Maintenance => "wrench",
            Page::Returnables => "returnables",
            Page::Sales => "sales",
        }
    }
}

/// App-wide navigation state, provided via context at the root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::KpiOverview),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.active_page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
