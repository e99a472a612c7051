use contracts::shared::filter::DatePosted;
use leptos::prelude::*;

use super::store::use_filters;
use crate::shared::components::ui::{Input, Select};

#[component]
pub fn RoleInputBox() -> impl IntoView {
    let filters = use_filters();
    view! {
        <Input
            id="role-filter"
            value=Signal::derive(move || filters.role())
            on_input=Callback::new(move |v| filters.set_role(v))
            placeholder="Title, skill or keyword"
        />
    }
}

#[component]
pub fn LocationInputBox() -> impl IntoView {
    let filters = use_filters();
    view! {
        <Input
            id="location-filter"
            value=Signal::derive(move || filters.location())
            on_input=Callback::new(move |v| filters.set_location(v))
            placeholder="City, country or \"Remote\""
        />
    }
}

#[component]
pub fn CompanyInputBox() -> impl IntoView {
    let filters = use_filters();
    view! {
        <Input
            id="company-filter"
            value=Signal::derive(move || filters.company())
            on_input=Callback::new(move |v| filters.set_company(v))
            placeholder="Company"
        />
    }
}

#[component]
pub fn DateInputBox() -> impl IntoView {
    let filters = use_filters();
    let options = DatePosted::ALL
        .iter()
        .map(|d| (d.as_str().to_string(), d.label().to_string()))
        .collect::<Vec<_>>();
    view! {
        <Select
            id="date-filter"
            label="Date posted"
            value=Signal::derive(move || filters.date())
            on_change=Callback::new(move |v| filters.set_date(v))
            options=options
        />
    }
}

#[component]
pub fn MinSalaryInputBox() -> impl IntoView {
    let filters = use_filters();
    view! {
        <Input
            id="salary-filter"
            label="Minimum salary"
            input_type="number"
            value=Signal::derive(move || filters.salary())
            on_input=Callback::new(move |v| filters.set_salary(v))
            placeholder="e.g. 120000"
        />
    }
}
