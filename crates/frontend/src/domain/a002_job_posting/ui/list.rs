use chrono::Utc;
use contracts::domain::a002_job_posting::aggregate::JobPosting;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

use super::card::JobCard;
use crate::domain::a002_job_posting::api;
use crate::shared::filters::use_filters;
use crate::shared::load_state::LoadState;

/// Quiet period after the last filter edit before querying
const QUERY_DEBOUNCE_MS: u32 = 250;

fn count_label(count: usize) -> String {
    match count {
        1 => "1 job".to_string(),
        n => format!("{} jobs", n),
    }
}

/// Postings matching the current filters; re-queries on every filter change
#[component]
pub fn JobList() -> impl IntoView {
    let filters = use_filters();
    let jobs = RwSignal::new(LoadState::<Vec<JobPosting>>::Loading);
    let generation = RwSignal::new(0u64);

    Effect::new(move |_| {
        let current = filters.snapshot();
        let this = generation.get_untracked() + 1;
        generation.set(this);

        spawn_local(async move {
            TimeoutFuture::new(QUERY_DEBOUNCE_MS).await;
            if generation.get_untracked() != this {
                return;
            }
            jobs.set(LoadState::Loading);
            let result = api::fetch_jobs(&current).await;
            // A newer query superseded this one
            if generation.get_untracked() != this {
                return;
            }
            if let Err(e) = &result {
                log::error!("Job query failed: {}", e);
            }
            jobs.set(result.into());
        });
    });

    view! {
        <section class="job-list">
            {move || match jobs.get() {
                LoadState::Loading => {
                    view! {
                        <div class="job-list__loading">
                            <Spinner />
                        </div>
                    }
                        .into_any()
                }
                LoadState::Failed(e) => {
                    view! {
                        <div class="job-list__error">{format!("Could not load jobs: {}", e)}</div>
                    }
                        .into_any()
                }
                LoadState::Loaded(list) if list.is_empty() => {
                    view! { <div class="job-list__empty">"No jobs match your filters"</div> }
                        .into_any()
                }
                LoadState::Loaded(list) => {
                    let now = Utc::now();
                    view! {
                        <p class="job-list__count">{count_label(list.len())}</p>
                        {list
                            .into_iter()
                            .map(|job| view! { <JobCard job=job now=now /> })
                            .collect_view()}
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
