//! Users management panel: fetch-all on mount, debounced search, and
//! row-level edit / soft-delete / details actions.
//!
//! Desktop renders a dense table; narrow viewports get an expandable card
//! list with pagination. Both read the same filtered row set, so they always
//! show identical data.

use leptos::prelude::*;

use fleet::User;
use fleet::paging::{clamp_page, page_count, page_slice};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::search_input::SearchInput;
use crate::components::user_details::UserDetailsDialog;
use crate::components::user_form::UserFormDialog;
use crate::state::auth::AuthState;
use crate::state::store::{LoadState, StoreState, load_users};

const MOBILE_PAGE_SIZE: usize = 10;

#[component]
pub fn UsersPanel() -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();
    let search = RwSignal::new(String::new());
    let debounced = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let is_mobile = RwSignal::new(false);

    // One bulk fetch per mount; a remount reuses the cached snapshot.
    Effect::new(move || {
        if store.with_untracked(|s| s.users.needs_load()) {
            load_users(store);
        }
        is_mobile.set(crate::util::viewport::is_mobile());
    });

    let rows = Memo::new(move |_| {
        let term = debounced.get();
        store.with(|s| s.users.roster.search(&term))
    });
    let load = Memo::new(move |_| store.with(|s| s.users.load.clone()));

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2 class="panel__title">"Users"</h2>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ Add User"
                </button>
                <SearchInput value=search debounced=debounced placeholder="Search users..."/>
            </header>

            {move || match load.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <p class="panel__status">"Loading users..."</p> }.into_any()
                }
                LoadState::Failed(message) => view! {
                    <div class="panel__error">
                        <p>{format!("Failed to load users: {message}")}</p>
                        <button class="btn" on:click=move |_| load_users(store)>
                            "Retry"
                        </button>
                    </div>
                }
                .into_any(),
                LoadState::Loaded => {
                    if is_mobile.get() {
                        view! { <MobileUsersList rows=rows/> }.into_any()
                    } else {
                        view! { <UsersTable rows=rows/> }.into_any()
                    }
                }
            }}

            <Show when=move || show_create.get()>
                <UserFormDialog
                    existing=None
                    on_close=Callback::new(move |_| show_create.set(false))
                />
            </Show>
        </section>
    }
}

#[component]
fn UsersTable(rows: Memo<Vec<User>>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Age"</th>
                    <th>"Role"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let list = rows.get();
                    if list.is_empty() {
                        view! {
                            <tr>
                                <td class="data-table__empty" colspan="5">"No users found."</td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        list.into_iter()
                            .map(|user| {
                                let name = user.name.clone();
                                let email = user.email.clone();
                                let age = user.age;
                                let role = user.role_label();
                                view! {
                                    <tr>
                                        <td>{name}</td>
                                        <td>{email}</td>
                                        <td>{age}</td>
                                        <td>{role}</td>
                                        <td><UserActions user=user/></td>
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
fn MobileUsersList(rows: Memo<Vec<User>>) -> impl IntoView {
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
                    .map(|(idx, user)| {
                        let global_idx = (page.get_untracked() - 1) * MOBILE_PAGE_SIZE + idx;
                        let is_expanded = move || expanded.get() == Some(global_idx);
                        let name = user.name.clone();
                        let email = user.email.clone();
                        let age = user.age;
                        let role = user.role_label();
                        let initial = user
                            .name
                            .chars()
                            .next()
                            .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().to_string());
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
                                    <span class="card-list__avatar">{initial}</span>
                                    <span class="card-list__primary">{name}</span>
                                    <span class="card-list__secondary">{email}</span>
                                    <span class="card-list__chevron">
                                        {move || if is_expanded() { "v" } else { ">" }}
                                    </span>
                                </button>
                                <Show when=is_expanded>
                                    <div class="card-list__details">
                                        <p><b>"Age: "</b>{age}</p>
                                        <p><b>"Role: "</b>{role}</p>
                                        <UserActions user=user.clone()/>
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
///
/// The signed-in admin's own row cannot be deleted.
#[component]
fn UserActions(user: User) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<RwSignal<StoreState>>();
    let show_confirm = RwSignal::new(false);
    let show_edit = RwSignal::new(false);
    let show_details = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let user = StoredValue::new(user);
    let self_row = Memo::new(move |_| {
        let email = user.with_value(|u| u.email.clone());
        auth.get().is_self(&email)
    });

    let on_delete = Callback::new(move |()| {
        show_confirm.set(false);
        busy.set(true);
        error.set(String::new());
        let key = user.with_value(|u| u.email.clone());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::soft_delete("users", &key).await {
                    Ok(()) => store.update(|s| {
                        s.users.roster.patch_deleted(&key);
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
                title="Edit User"
                on:click=move |_| show_edit.set(true)
            >
                "Edit"
            </button>
            <button
                class="btn btn--small btn--danger"
                disabled=move || busy.get() || self_row.get()
                title="Delete User"
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
                    title="Delete user"
                    information="Are you sure you want to delete the user?"
                    on_yes=on_delete
                    on_cancel=Callback::new(move |_| show_confirm.set(false))
                />
            </Show>
            <Show when=move || show_edit.get()>
                <UserFormDialog
                    existing=Some(user.get_value())
                    on_close=Callback::new(move |_| show_edit.set(false))
                />
            </Show>
            <Show when=move || show_details.get()>
                <UserDetailsDialog
                    user=user.get_value()
                    on_close=Callback::new(move |_| show_details.set(false))
                />
            </Show>
        </div>
    }
}
