//! Bikes management panel: fetch-all on mount, debounced search, and
//! row-level edit / soft-delete / details actions.
//!
//! Same list-search-mutate shape as the users panel, over the bike record
//! and its four searchable fields. Store patches are keyed by the bike's
//! registration ID.

use leptos::prelude::*;

use fleet::Bike;
use fleet::paging::{clamp_page, page_count, page_slice};

use crate::components::bike_details::BikeDetailsDialog;
use crate::components::bike_form::BikeFormDialog;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::search_input::SearchInput;
use crate::state::store::{LoadState, StoreState, load_bikes};

const MOBILE_PAGE_SIZE: usize = 10;

#[component]
pub fn BikesPanel() -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();
    let search = RwSignal::new(String::new());
    let debounced = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let is_mobile = RwSignal::new(false);

    // One bulk fetch per mount; a remount reuses the cached snapshot.
    Effect::new(move || {
        if store.with_untracked(|s| s.bikes.needs_load()) {
            load_bikes(store);
        }
        is_mobile.set(crate::util::viewport::is_mobile());
    });

    let rows = Memo::new(move |_| {
        let term = debounced.get();
        store.with(|s| s.bikes.roster.search(&term))
    });
    let load = Memo::new(move |_| store.with(|s| s.bikes.load.clone()));

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2 class="panel__title">"Bikes"</h2>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ Add Bike"
                </button>
                <SearchInput value=search debounced=debounced placeholder="Search bikes..."/>
            </header>

            {move || match load.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <p class="panel__status">"Loading bikes..."</p> }.into_any()
                }
                LoadState::Failed(message) => view! {
                    <div class="panel__error">
                        <p>{format!("Failed to load bikes: {message}")}</p>
                        <button class="btn" on:click=move |_| load_bikes(store)>
                            "Retry"
                        </button>
                    </div>
                }
                .into_any(),
                LoadState::Loaded => {
                    if is_mobile.get() {
                        view! { <MobileBikesList rows=rows/> }.into_any()
                    } else {
                        view! { <BikesTable rows=rows/> }.into_any()
                    }
                }
            }}

            <Show when=move || show_create.get()>
                <BikeFormDialog
                    existing=None
                    on_close=Callback::new(move |_| show_create.set(false))
                />
            </Show>
        </section>
    }
}

#[component]
fn BikesTable(rows: Memo<Vec<Bike>>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Registration Id"</th>
                    <th>"Color"</th>
                    <th>"Model"</th>
                    <th>"Location"</th>
                    <th>"Rating"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let list = rows.get();
                    if list.is_empty() {
                        view! {
                            <tr>
                                <td class="data-table__empty" colspan="6">"No bikes found."</td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        list.into_iter()
                            .map(|bike| {
                                let registration_id = bike.registration_id.clone();
                                let color = bike.color.clone();
                                let model = bike.model.clone();
                                let location = bike.location.clone();
                                let rating = format!("{:.1}", bike.rating);
                                view! {
                                    <tr>
                                        <td>{registration_id}</td>
                                        <td>{color}</td>
                                        <td>{model}</td>
                                        <td>{location}</td>
                                        <td>{rating}</td>
                                        <td><BikeActions bike=bike/></td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}

#[component]
fn MobileBikesList(rows: Memo<Vec<Bike>>) -> impl IntoView {
    let page = RwSignal::new(1_usize);
    let expanded = RwSignal::new(None::<usize>);

    let pages = Memo::new(move |_| page_count(rows.get().len(), MOBILE_PAGE_SIZE));

    // Keep the page in range when the filtered set shrinks.
    Effect::new(move || {
        let total = pages.get();
        page.update(|p| *p = clamp_page(*p, total));
    });

    let page_rows = Memo::new(move |_| {
        let list = rows.get();
        page_slice(&list, page.get(), MOBILE_PAGE_SIZE)
    });

    view! {
        <div class="card-list">
            {move || {
                page_rows
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, bike)| {
                        let global_idx = (page.get_untracked() - 1) * MOBILE_PAGE_SIZE + idx;
                        let is_expanded = move || expanded.get() == Some(global_idx);
                        let registration_id = bike.registration_id.clone();
                        let model = bike.model.clone();
                        let color = bike.color.clone();
                        let location = bike.location.clone();
                        let rating = format!("{:.1}", bike.rating);
                        view! {
                            <div class="card-list__item">
                                <button
                                    class="card-list__row"
                                    on:click=move |_| {
                                        expanded.update(|e| {
                                            *e = if *e == Some(global_idx) { None } else { Some(global_idx) };
                                        });
                                    }
                                >
                                    <span class="card-list__avatar">"B"</span>
                                    <span class="card-list__primary">{registration_id}</span>
                                    <span class="card-list__secondary">{model}</span>
                                    <span class="card-list__chevron">
                                        {move || if is_expanded() { "v" } else { ">" }}
                                    </span>
                                </button>
                                <Show when=is_expanded>
                                    <div class="card-list__details">
                                        <p><b>"Color: "</b>{color.clone()}</p>
                                        <p><b>"Location: "</b>{location.clone()}</p>
                                        <p><b>"Rating: "</b>{rating.clone()}</p>
                                        <BikeActions bike=bike.clone()/>
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}

            <Show when=move || { pages.get() > 1 }>
                <div class="card-list__pager">
                    {move || {
                        (1..=pages.get())
                            .map(|p| {
                                view! {
                                    <button
                                        class="btn btn--small"
                                        class=("btn--primary", move || page.get() == p)
                                        on:click=move |_| {
                                            page.set(p);
                                            expanded.set(None);
                                        }
                                    >
                                        {p}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}

/// Row-level actions: edit, soft-delete behind a confirm dialog, details.
#[component]
fn BikeActions(bike: Bike) -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();
    let show_confirm = RwSignal::new(false);
    let show_edit = RwSignal::new(false);
    let show_details = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let bike = StoredValue::new(bike);

    let on_delete = Callback::new(move |()| {
        show_confirm.set(false);
        busy.set(true);
        error.set(String::new());
        // Patch keyed by the bike's own natural key.
        let key = bike.with_value(|b| b.registration_id.clone());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::soft_delete("bikes", &key).await {
                    Ok(()) => store.update(|s| {
                        s.bikes.roster.patch_deleted(&key);
                    }),
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, store);
            busy.set(false);
        }
    });

    view! {
        <div class="row-actions">
            <button
                class="btn btn--small"
                disabled=move || busy.get()
                title="Edit Bike"
                on:click=move |_| show_edit.set(true)
            >
                "Edit"
            </button>
            <button
                class="btn btn--small btn--danger"
                disabled=move || busy.get()
                title="Delete Bike"
                on:click=move |_| show_confirm.set(true)
            >
                "Delete"
            </button>
            <button
                class="btn btn--small"
                disabled=move || busy.get()
                title="View Details"
                on:click=move |_| show_details.set(true)
            >
                "Details"
            </button>
            <Show when=move || !error.get().is_empty()>
                <span class="row-actions__error">{move || error.get()}</span>
            </Show>

            <Show when=move || show_confirm.get()>
                <ConfirmDialog
                    title="Delete Bike"
                    information="Are you sure you want to delete this bike?"
                    on_yes=on_delete
                    on_cancel=Callback::new(move |_| show_confirm.set(false))
                />
            </Show>
            <Show when=move || show_edit.get()>
                <BikeFormDialog
                    existing=Some(bike.get_value())
                    on_close=Callback::new(move |_| show_edit.set(false))
                />
            </Show>
            <Show when=move || show_details.get()>
                <BikeDetailsDialog
                    bike=bike.get_value()
                    on_close=Callback::new(move |_| show_details.set(false))
                />
            </Show>
        </div>
    }
}
